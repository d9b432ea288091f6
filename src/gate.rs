use crate::types::Var;

/// The two binary gate kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BinaryKind {
    And,
    Or,
}

/// A logic gate: a pure boolean function of its input variables that
/// exclusively drives one output variable.
///
/// Input order is preserved and significant, both for formula rendering and
/// for gate comparisons. Gates are immutable once wired into a circuit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Gate {
    Binary(BinaryKind, Var, [Var; 2]),
    Not(Var, [Var; 1]),
}

// Constructors
impl Gate {
    pub fn and(output: Var, a: Var, b: Var) -> Gate {
        Gate::Binary(BinaryKind::And, output, [a, b])
    }

    pub fn or(output: Var, a: Var, b: Var) -> Gate {
        Gate::Binary(BinaryKind::Or, output, [a, b])
    }

    pub fn not(output: Var, input: Var) -> Gate {
        Gate::Not(output, [input])
    }
}

// Getters
impl Gate {
    /// The variable this gate drives.
    pub fn output(&self) -> Var {
        match *self {
            Gate::Binary(_, output, _) => output,
            Gate::Not(output, _) => output,
        }
    }

    /// The input variables, in wiring order.
    pub fn inputs(&self) -> &[Var] {
        match self {
            Gate::Binary(_, _, inputs) => inputs,
            Gate::Not(_, inputs) => inputs,
        }
    }

    /// The gate's symbol as it appears in rendered formulas.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::Binary(BinaryKind::And, ..) => "AND",
            Gate::Binary(BinaryKind::Or, ..) => "OR",
            Gate::Not(..) => "NOT",
        }
    }

    /// Applies the gate function to already-evaluated input values.
    ///
    /// `values` must line up with [`inputs`](Self::inputs).
    pub fn eval(&self, values: &[bool]) -> bool {
        match self {
            Gate::Binary(BinaryKind::And, ..) => values[0] && values[1],
            Gate::Binary(BinaryKind::Or, ..) => values[0] || values[1],
            Gate::Not(..) => !values[0],
        }
    }
}
