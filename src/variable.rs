use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::GateId;

/// A named boolean cell.
///
/// A variable is in exactly one of two states:
///
/// - a **free input**: no driving gate, the stored value is authoritative;
/// - a **derived output**: driven by exactly one gate, the stored value is
///   shadowed for as long as the variable stays driven.
///
/// The driving slot is write-once: it is claimed at most once, by the gate
/// that successfully wires this variable as its output, and never reassigned.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    value: bool,
    driven_by: Option<GateId>,
}

impl Variable {
    /// Creates a free input with the given name, initially `false`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_value(name, false)
    }

    /// Creates a free input with the given name and initial value.
    pub fn with_value(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
            driven_by: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored value. Authoritative only while the variable is undriven.
    pub fn stored_value(&self) -> bool {
        self.value
    }

    pub(crate) fn set_stored_value(&mut self, value: bool) {
        self.value = value;
    }

    /// The gate driving this variable, if any.
    pub fn driving_gate(&self) -> Option<GateId> {
        self.driven_by
    }

    /// Claims this variable as a gate output.
    ///
    /// # Panics
    ///
    /// Panics if the variable is already driven. Wiring goes through
    /// [`Circuit::wire`](crate::circuit::Circuit::wire), which rejects the
    /// collision before reaching this point.
    pub(crate) fn set_driving_gate(&mut self, gate: GateId) {
        assert!(
            self.driven_by.is_none(),
            "variable {:?} is already driven",
            self.name
        );
        self.driven_by = Some(gate);
    }
}

/// Structural equality on (name, stored value) only.
///
/// This is deliberately looser than the name-only uniqueness enforced by
/// [`Circuit::add_variable`](crate::circuit::Circuit::add_variable): two
/// variables with the same name but different stored values compare unequal,
/// even though a circuit would reject the second one by name alone.
impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
