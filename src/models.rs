use std::fmt;

/// One decision variable of a solved model
#[derive(Debug, Clone, PartialEq)]
pub struct VarValue {
    pub name: String,
    pub value: f64,
}

impl VarValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        VarValue {
            name: name.into(),
            value,
        }
    }
}

/// Solve outcome as reported by the backend. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Optimal,
    Feasible,
    Infeasible,
    Unbounded,
    InfeasibleOrUnbounded,
    Interrupted,
    Undefined,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Optimal => "optimal",
            Status::Feasible => "feasible",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::InfeasibleOrUnbounded => "infeasible or unbounded",
            Status::Interrupted => "interrupted",
            Status::Undefined => "undefined",
        };
        f.write_str(label)
    }
}
