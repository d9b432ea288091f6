//! # circuit-rs: Combinational Logic Circuits in Rust
//!
//! **`circuit-rs`** is a small, safe, manager-centric library for modeling
//! **combinational logic circuits**: named boolean variables wired into a
//! directed acyclic graph by AND/OR/NOT gates.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All construction and queries go through
//!   the [`Circuit`][crate::circuit::Circuit] manager, which owns every
//!   variable and gate and hands out lightweight [`Var`][crate::types::Var]
//!   and [`GateId`][crate::types::GateId] handles.
//! - **Validated Wiring**: Every wiring step is checked for output collisions
//!   and cycles, so the dependency graph is a DAG by construction.
//! - **Live Evaluation**: Values are re-derived on every read, so upstream
//!   changes are visible immediately, with no caching or staleness.
//! - **Formula Reconstruction**: Any variable can render its full derivation
//!   chain, e.g. `NOT(OR(AND(x1,x2),x3))`.
//!
//! A second, independent component lives in [`simpson`] and [`normal`]: an
//! adaptive Simpson's-rule integrator and a normal-distribution model built
//! on top of it for tail-probability queries.
//!
//! ## Basic Usage
//!
//! ```rust
//! use circuit_rs::circuit::Circuit;
//!
//! // 1. Initialize the manager
//! let circuit = Circuit::new();
//!
//! // 2. Create named inputs
//! let x1 = circuit.mk_input("x1", true);
//! let x2 = circuit.mk_input("x2", false);
//! let y = circuit.mk_input("y", false);
//!
//! // 3. Wire a gate: y = AND(x1, x2)
//! circuit.wire_and(y, x1, x2).unwrap();
//!
//! // 4. Query
//! assert!(!circuit.value(y));
//! assert_eq!(circuit.formula(y), "AND(x1,x2)");
//!
//! // 5. Flip an input; the change is visible immediately
//! circuit.set_value(x2, true);
//! assert!(circuit.value(y));
//! ```
//!
//! ## Core Components
//!
//! - **[`circuit`]**: The heart of the library. Contains the
//!   [`Circuit`][crate::circuit::Circuit] manager.
//! - **[`gate`]**: The [`Gate`][crate::gate::Gate] variants and their boolean
//!   functions.
//! - **[`normal`]**: Normal distributions and the injectable
//!   [`DistributionRegistry`][crate::normal::DistributionRegistry].

pub mod circuit;
pub mod error;
pub mod gate;
pub mod normal;
pub mod simpson;
pub mod types;
pub mod variable;
