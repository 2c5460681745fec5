pub mod run;
pub mod solver;
pub mod solver_factory;
pub mod solvers;
