use dotenv::dotenv;
use env_logger::Env;
use std::io;

use mps_solve::{create_solver, run, select_solver, RunConfig};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    // Logs go to stderr; stdout is reserved for the solution report
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = RunConfig::from_env()?;
    let solver = create_solver(select_solver(config.solver.as_deref())?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(solver.as_ref(), &config, &mut out)?;
    Ok(())
}
