use crate::domain::solver::Solver;
use crate::error::{Error, Result};

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

#[cfg(feature = "gurobi-solver")]
use crate::domain::solvers::GurobiSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    #[cfg(feature = "highs-solver")]
    Highs,
    #[cfg(feature = "gurobi-solver")]
    Gurobi,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            #[cfg(feature = "highs-solver")]
            "highs" => Some(SolverType::Highs),
            #[cfg(feature = "gurobi-solver")]
            "gurobi" => Some(SolverType::Gurobi),
            _ => None,
        }
    }

    /// Backend used when none is requested: Gurobi, then HiGHS
    pub fn preferred() -> Option<Self> {
        Self::compiled().first().copied()
    }

    /// Compiled-in backends, most preferred first
    pub fn compiled() -> Vec<Self> {
        #[allow(unused_mut)]
        let mut types = Vec::new();
        #[cfg(feature = "gurobi-solver")]
        types.push(SolverType::Gurobi);
        #[cfg(feature = "highs-solver")]
        types.push(SolverType::Highs);
        types
    }

    pub fn name(&self) -> &'static str {
        match *self {
            #[cfg(feature = "highs-solver")]
            SolverType::Highs => "highs",
            #[cfg(feature = "gurobi-solver")]
            SolverType::Gurobi => "gurobi",
        }
    }
}

/// Resolve the backend for a run from the optional `SOLVER` value
pub fn select_solver(requested: Option<&str>) -> Result<SolverType> {
    match requested {
        Some(name) => SolverType::from_str(name).ok_or_else(|| Error::UnknownSolver {
            name: name.to_string(),
            available: available_names(),
        }),
        None => SolverType::preferred().ok_or(Error::NoBackend),
    }
}

fn available_names() -> String {
    let names: Vec<&str> = SolverType::compiled().iter().map(|t| t.name()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Box<dyn Solver> {
    match solver_type {
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Box::new(HighsSolver::new()),
        #[cfg(feature = "gurobi-solver")]
        SolverType::Gurobi => Box::new(GurobiSolver::new()),
    }
}
