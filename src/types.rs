//! Type-safe handles for circuit variables and gates.
//!
//! This module provides newtype wrappers that enforce compile-time distinction
//! between variable slots and gate slots, preventing common mistakes in
//! circuit-manipulation code.
use std::fmt;

/// A handle to a variable slot inside a [`Circuit`](crate::circuit::Circuit).
///
/// Handles are cheap to copy and compare by identity. They are only
/// meaningful for the circuit that issued them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    pub(crate) fn new(index: usize) -> Self {
        Var(index as u32)
    }

    /// Returns the raw slot index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A handle to a wired gate inside a [`Circuit`](crate::circuit::Circuit).
///
/// Gates are immutable once wired, so a `GateId` stays valid for the lifetime
/// of its circuit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GateId(u32);

impl GateId {
    pub(crate) fn new(index: usize) -> Self {
        GateId(index as u32)
    }

    /// Returns the raw slot index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}
