use crate::domain::solver::{LoadedModel, Solver};
use crate::error::{Error, Result};
use crate::models::{Status, VarValue};

use grb::prelude::*;
use log::debug;

const SOLVER_NAME: &str = "Gurobi";

fn gurobi_error(e: grb::Error) -> Error {
    Error::backend(SOLVER_NAME, e)
}

/// Gurobi solver implementation
pub struct GurobiSolver;

impl GurobiSolver {
    pub fn new() -> Self {
        GurobiSolver
    }

    /// Convert Gurobi status to our status
    fn convert_status(status: grb::Status) -> Status {
        match status {
            grb::Status::Optimal => Status::Optimal,
            grb::Status::SubOptimal => Status::Feasible,
            grb::Status::Infeasible => Status::Infeasible,
            grb::Status::Unbounded => Status::Unbounded,
            grb::Status::InfOrUnbd => Status::InfeasibleOrUnbounded,
            grb::Status::TimeLimit
            | grb::Status::NodeLimit
            | grb::Status::IterationLimit
            | grb::Status::SolutionLimit
            | grb::Status::Interrupted => Status::Interrupted,
            _ => Status::Undefined,
        }
    }
}

impl Default for GurobiSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for GurobiSolver {
    fn read_model(&self, path: &str) -> Result<Box<dyn LoadedModel>> {
        // Disable Gurobi console output before the environment starts,
        // stdout only carries the solution report
        let mut env = Env::empty().map_err(gurobi_error)?;
        env.set(param::OutputFlag, 0).map_err(gurobi_error)?;
        let env = env.start().map_err(gurobi_error)?;

        // Gurobi keeps its own copy of the environment inside the model
        let model = Model::read_from(path, &env).map_err(gurobi_error)?;
        Ok(Box::new(GurobiModel { model }))
    }

    fn name(&self) -> &str {
        SOLVER_NAME
    }
}

/// A model read by Gurobi
pub struct GurobiModel {
    model: Model,
}

impl LoadedModel for GurobiModel {
    fn optimize(&mut self) -> Result<()> {
        self.model.optimize().map_err(gurobi_error)
    }

    fn status(&self) -> Result<Status> {
        let status = self.model.status().map_err(gurobi_error)?;
        debug!("Gurobi status {:?}", status);
        Ok(GurobiSolver::convert_status(status))
    }

    fn write_solution(&self, path: &str) -> Result<()> {
        // Gurobi picks the file format from the extension
        self.model.write(path).map_err(gurobi_error)
    }

    fn variables(&self) -> Result<Vec<VarValue>> {
        let vars = self.model.get_vars().map_err(gurobi_error)?;
        vars.iter()
            .map(|var| {
                let name = self
                    .model
                    .get_obj_attr(attr::VarName, var)
                    .map_err(gurobi_error)?;
                let value = self.model.get_obj_attr(attr::X, var).map_err(gurobi_error)?;
                Ok(VarValue { name, value })
            })
            .collect()
    }

    fn objective_value(&self) -> Result<f64> {
        self.model.get_attr(attr::ObjVal).map_err(gurobi_error)
    }
}
