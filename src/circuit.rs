use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt::Debug;

use log::debug;

use crate::error::CircuitError;
use crate::gate::Gate;
use crate::types::{GateId, Var};
use crate::variable::Variable;

/// A combinational circuit: named boolean variables wired into a directed
/// acyclic graph by logic gates.
///
/// The circuit owns every variable slot and every wired gate; callers hold
/// lightweight [`Var`] and [`GateId`] handles and go through the circuit for
/// all queries and mutations. Acyclicity is enforced incrementally: each
/// [`wire`](Circuit::wire) call validates the newest edge, which is
/// sufficient because a DAG can only become cyclic through the edge being
/// added.
///
/// Evaluation is recursive and uncached: a driven variable re-derives its
/// value through its gate on every read, so upstream changes are visible
/// immediately. This is exponential in pathological diamond-shaped graphs,
/// which is acceptable for the expected circuit sizes.
pub struct Circuit {
    variables: RefCell<Vec<Variable>>,
    names: RefCell<HashMap<String, Var>>,
    gates: RefCell<Vec<Gate>>,
}

impl Circuit {
    pub fn new() -> Self {
        Self {
            variables: RefCell::new(Vec::new()),
            names: RefCell::new(HashMap::new()),
            gates: RefCell::new(Vec::new()),
        }
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Circuit::new()
    }
}

impl Debug for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Circuit")
            .field("variables", &self.variables.borrow().len())
            .field("gates", &self.gates.borrow().len())
            .finish()
    }
}

// Registry
impl Circuit {
    /// Adds `variable` to the circuit and returns its handle.
    ///
    /// Returns `None` without mutation when the name is already present; the
    /// existing entry is never replaced. Uniqueness here is by name only,
    /// which is stricter than [`Variable`] equality.
    pub fn add_variable(&self, variable: Variable) -> Option<Var> {
        let mut names = self.names.borrow_mut();
        if names.contains_key(variable.name()) {
            debug!("add_variable({:?}): name already taken", variable.name());
            return None;
        }
        let mut variables = self.variables.borrow_mut();
        let var = Var::new(variables.len());
        debug!("add_variable({:?}) -> {}", variable.name(), var);
        names.insert(variable.name().to_string(), var);
        variables.push(variable);
        Some(var)
    }

    /// Convenience for `add_variable(Variable::with_value(name, value))`.
    ///
    /// # Panics
    ///
    /// Panics if the name is already taken.
    pub fn mk_input(&self, name: &str, value: bool) -> Var {
        self.add_variable(Variable::with_value(name, value))
            .unwrap_or_else(|| panic!("variable name {:?} is already taken", name))
    }

    /// Looks up a variable handle by name.
    pub fn variable_by_name(&self, name: &str) -> Option<Var> {
        self.names.borrow().get(name).copied()
    }

    /// Borrows the variable behind a handle.
    pub fn variable(&self, v: Var) -> Ref<'_, Variable> {
        Ref::map(self.variables.borrow(), |variables| &variables[v.index()])
    }

    /// Borrows the gate behind a handle.
    pub fn gate(&self, g: GateId) -> Ref<'_, Gate> {
        Ref::map(self.gates.borrow(), |gates| &gates[g.index()])
    }
}

// Wiring
impl Circuit {
    /// Wires `gate` into the circuit.
    ///
    /// Checks, in order:
    ///
    /// 1. [`CircuitError::Collision`] if the output is already driven;
    /// 2. [`CircuitError::Cycle`] if any input equals the output or
    ///    transitively depends on it through existing wiring.
    ///
    /// On failure nothing is modified: the gate is not stored and the
    /// output's driving slot is untouched. On success the gate is appended
    /// and the output's driving slot receives its single, final assignment.
    pub fn wire(&self, gate: Gate) -> Result<GateId, CircuitError> {
        let output = gate.output();
        if self.variable(output).driving_gate().is_some() {
            return Err(CircuitError::Collision(
                self.variable(output).name().to_string(),
            ));
        }
        for &input in gate.inputs() {
            if input == output || self.depends_on(input, output) {
                return Err(CircuitError::Cycle(
                    self.variable(output).name().to_string(),
                ));
            }
        }

        let mut gates = self.gates.borrow_mut();
        let id = GateId::new(gates.len());
        debug!("wire: {} = {}({:?}) -> {}", output, gate.symbol(), gate.inputs(), id);
        gates.push(gate);
        drop(gates);
        self.variables.borrow_mut()[output.index()].set_driving_gate(id);
        Ok(id)
    }

    /// Wires `output = AND(a, b)`.
    pub fn wire_and(&self, output: Var, a: Var, b: Var) -> Result<GateId, CircuitError> {
        self.wire(Gate::and(output, a, b))
    }

    /// Wires `output = OR(a, b)`.
    pub fn wire_or(&self, output: Var, a: Var, b: Var) -> Result<GateId, CircuitError> {
        self.wire(Gate::or(output, a, b))
    }

    /// Wires `output = NOT(input)`.
    pub fn wire_not(&self, output: Var, input: Var) -> Result<GateId, CircuitError> {
        self.wire(Gate::not(output, input))
    }
}

// Evaluation and queries
impl Circuit {
    /// The current value of `v`.
    ///
    /// A driven variable is re-derived through its gate on every read; an
    /// undriven variable returns its stored value.
    pub fn value(&self, v: Var) -> bool {
        match self.variable(v).driving_gate() {
            None => self.variable(v).stored_value(),
            Some(g) => self.gate_value(g),
        }
    }

    /// Applies the gate behind `g` to the current values of its inputs.
    pub fn gate_value(&self, g: GateId) -> bool {
        let gate = self.gate(g).clone();
        let values: Vec<bool> = gate.inputs().iter().map(|&input| self.value(input)).collect();
        gate.eval(&values)
    }

    /// Overwrites the stored value of `v`.
    ///
    /// Always permitted: on a driven variable the stored value is simply
    /// shadowed for as long as the variable stays driven.
    pub fn set_value(&self, v: Var, value: bool) {
        debug!("set_value({}, {})", v, value);
        self.variables.borrow_mut()[v.index()].set_stored_value(value);
    }

    /// Whether `v` transitively derives from `on` through its driving chain.
    ///
    /// A variable does not depend on itself unless actually wired so.
    pub fn depends_on(&self, v: Var, on: Var) -> bool {
        match self.variable(v).driving_gate() {
            None => false,
            Some(g) => self
                .gate(g)
                .inputs()
                .iter()
                .any(|&input| input == on || self.depends_on(input, on)),
        }
    }

    /// The fully expanded textual derivation of `v`, e.g.
    /// `NOT(OR(AND(x1,x2),x3))`.
    ///
    /// An undriven variable renders as its bare name.
    pub fn formula(&self, v: Var) -> String {
        match self.variable(v).driving_gate() {
            None => self.variable(v).name().to_string(),
            Some(g) => self.gate_formula(g),
        }
    }

    /// Renders `SYMBOL(arg0,arg1,...)` for the gate behind `g`, with the
    /// arguments expanded recursively, comma-separated, no spaces.
    pub fn gate_formula(&self, g: GateId) -> String {
        let gate = self.gate(g).clone();
        let args: Vec<String> = gate.inputs().iter().map(|&input| self.formula(input)).collect();
        format!("{}({})", gate.symbol(), args.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    /// x1=true, x2=false, x3=true; w1=AND(x1,x2); w2=OR(w1,x3); y1=NOT(w2).
    fn three_gate_chain(circuit: &Circuit) -> [Var; 6] {
        let x1 = circuit.mk_input("x1", true);
        let x2 = circuit.mk_input("x2", false);
        let x3 = circuit.mk_input("x3", true);
        let w1 = circuit.mk_input("w1", false);
        let w2 = circuit.mk_input("w2", false);
        let y1 = circuit.mk_input("y1", false);
        circuit.wire_and(w1, x1, x2).unwrap();
        circuit.wire_or(w2, w1, x3).unwrap();
        circuit.wire_not(y1, w2).unwrap();
        [x1, x2, x3, w1, w2, y1]
    }

    #[test]
    fn test_free_input_roundtrip() {
        let circuit = Circuit::new();
        let x = circuit.mk_input("x", true);
        assert!(circuit.value(x));
        circuit.set_value(x, false);
        assert!(!circuit.value(x));
        assert_eq!(circuit.formula(x), "x");
    }

    #[test]
    fn test_add_variable_rejects_duplicate_name() {
        let circuit = Circuit::new();
        let x = circuit.add_variable(Variable::with_value("x", false)).unwrap();
        // Same name, different value: unequal as variables, still rejected.
        assert_eq!(circuit.add_variable(Variable::with_value("x", true)), None);
        assert_eq!(circuit.variable_by_name("x"), Some(x));
        assert!(!circuit.value(x));
    }

    #[test]
    fn test_variable_by_name_absent() {
        let circuit = Circuit::new();
        assert_eq!(circuit.variable_by_name("nope"), None);
    }

    #[test]
    fn test_three_gate_chain_values() {
        let circuit = Circuit::new();
        let [_, _, _, w1, w2, y1] = three_gate_chain(&circuit);
        assert!(!circuit.value(w1));
        assert!(circuit.value(w2));
        assert!(!circuit.value(y1));
    }

    #[test]
    fn test_upstream_change_propagates() {
        let circuit = Circuit::new();
        let [_, _, x3, _, w2, y1] = three_gate_chain(&circuit);
        circuit.set_value(x3, false);
        assert!(!circuit.value(w2));
        assert!(circuit.value(y1));
    }

    #[test]
    fn test_set_value_on_driven_variable_is_shadowed() {
        let circuit = Circuit::new();
        let [_, _, _, w1, _, _] = three_gate_chain(&circuit);
        circuit.set_value(w1, true);
        // Still derived from AND(x1,x2) = false.
        assert!(!circuit.value(w1));
        assert!(circuit.variable(w1).stored_value());
    }

    #[test]
    fn test_formula_roundtrip() {
        let circuit = Circuit::new();
        let [x1, _, _, w1, w2, y1] = three_gate_chain(&circuit);
        assert_eq!(circuit.formula(x1), "x1");
        assert_eq!(circuit.formula(w1), "AND(x1,x2)");
        assert_eq!(circuit.formula(w2), "OR(AND(x1,x2),x3)");
        assert_eq!(circuit.formula(y1), "NOT(OR(AND(x1,x2),x3))");
    }

    #[test]
    fn test_collision_leaves_wiring_intact() {
        let circuit = Circuit::new();
        let [x1, _, x3, w1, _, _] = three_gate_chain(&circuit);
        let err = circuit.wire_or(w1, x1, x3).unwrap_err();
        assert_eq!(err, CircuitError::Collision("w1".to_string()));
        assert_eq!(circuit.formula(w1), "AND(x1,x2)");
        assert_eq!(circuit.gates.borrow().len(), 3);
    }

    #[test]
    fn test_self_cycle_rejected() {
        let circuit = Circuit::new();
        let x = circuit.mk_input("x", false);
        let err = circuit.wire_not(x, x).unwrap_err();
        assert_eq!(err, CircuitError::Cycle("x".to_string()));
        assert_eq!(circuit.variable(x).driving_gate(), None);
    }

    #[test]
    fn test_transitive_cycle_rejected() {
        let circuit = Circuit::new();
        let x1 = circuit.mk_input("x1", false);
        let x2 = circuit.mk_input("x2", false);
        let w1 = circuit.mk_input("w1", false);
        circuit.wire_and(w1, x1, x2).unwrap();
        // x1 = OR(w1, x2) would close the loop x1 -> w1 -> x1.
        let err = circuit.wire_or(x1, w1, x2).unwrap_err();
        assert_eq!(err, CircuitError::Cycle("x1".to_string()));
        // No partial edge: x1 is still a free input.
        assert_eq!(circuit.variable(x1).driving_gate(), None);
        assert_eq!(circuit.gates.borrow().len(), 1);
    }

    #[test]
    fn test_depends_on() {
        let circuit = Circuit::new();
        let [x1, x2, x3, w1, w2, y1] = three_gate_chain(&circuit);
        assert!(circuit.depends_on(w1, x1));
        assert!(circuit.depends_on(w1, x2));
        assert!(circuit.depends_on(y1, x1));
        assert!(circuit.depends_on(y1, x3));
        assert!(circuit.depends_on(y1, w2));
        assert!(!circuit.depends_on(x1, y1));
        assert!(!circuit.depends_on(x1, x1));
        assert!(!circuit.depends_on(w1, x3));
        assert!(!circuit.depends_on(y1, y1));
    }

    #[test]
    fn test_gate_accessors() {
        let circuit = Circuit::new();
        let x1 = circuit.mk_input("x1", true);
        let x2 = circuit.mk_input("x2", false);
        let w = circuit.mk_input("w", false);
        let g = circuit.wire_and(w, x1, x2).unwrap();
        assert_eq!(circuit.variable(w).driving_gate(), Some(g));
        assert_eq!(circuit.gate(g).symbol(), "AND");
        assert_eq!(circuit.gate(g).output(), w);
        assert_eq!(circuit.gate(g).inputs(), &[x1, x2]);
        assert!(!circuit.gate_value(g));
    }

    #[test]
    fn test_diamond_graph() {
        let circuit = Circuit::new();
        let x = circuit.mk_input("x", true);
        let a = circuit.mk_input("a", false);
        let b = circuit.mk_input("b", false);
        let y = circuit.mk_input("y", false);
        circuit.wire_not(a, x).unwrap();
        circuit.wire_or(b, x, a).unwrap();
        circuit.wire_and(y, a, b).unwrap();
        assert!(!circuit.value(y));
        circuit.set_value(x, false);
        assert!(circuit.value(y));
        assert_eq!(circuit.formula(y), "AND(NOT(x),OR(x,NOT(x)))");
    }
}
