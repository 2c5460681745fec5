//! Solve an optimization model file with an external solver and report the result.

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod mps;
pub mod output;
pub mod problem;

pub use config::RunConfig;
pub use domain::run::{run, solution_path};
pub use domain::solver::{LoadedModel, Solver};
pub use domain::solver_factory::{create_solver, select_solver, SolverType};
pub use error::{Error, Result};
pub use models::{Status, VarValue};
