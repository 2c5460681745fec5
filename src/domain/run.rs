use std::io::Write;

use log::{info, warn};

use crate::config::RunConfig;
use crate::domain::solver::Solver;
use crate::error::Result;
use crate::output::write_report;

const MODEL_EXTENSION: &str = ".mps";
const SOLUTION_EXTENSION: &str = ".sol";

/// Solution file for a model file: the first `.mps` becomes `.sol`.
/// A path without `.mps` comes back unchanged.
pub fn solution_path(model_path: &str) -> String {
    model_path.replacen(MODEL_EXTENSION, SOLUTION_EXTENSION, 1)
}

/// Load, solve and write the solution for one model, then print it if asked.
///
/// Errors from the backend are returned as soon as they happen; nothing is
/// printed to `out` unless every step succeeded and printing is enabled.
pub fn run<W: Write + ?Sized>(solver: &dyn Solver, config: &RunConfig, out: &mut W) -> Result<()> {
    info!("Reading {} with {}", config.model_path, solver.name());
    let mut model = solver.read_model(&config.model_path)?;

    model.optimize()?;
    info!("Solve finished: {}", model.status()?);

    let output_path = solution_path(&config.model_path);
    if output_path == config.model_path {
        warn!(
            "{} has no {} extension, not writing the solution over the model file",
            config.model_path, MODEL_EXTENSION
        );
    } else {
        model.write_solution(&output_path)?;
        info!("Solution written to {}", output_path);
    }

    if config.print_solution {
        let variables = model.variables()?;
        let objective = model.objective_value()?;
        write_report(out, &variables, objective)?;
    }

    Ok(())
}
