use std::env;
use std::path::PathBuf;

use anyhow::Context;
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use mps_solve::problem::Problem;

const USAGE: &str = "\
Specify data file
usage: problem-info <data.json>
Exits non-zero when the file is missing; absent interval bounds print as '-'";

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let Some(data_file) = env::args_os().nth(1).map(PathBuf::from) else {
        anyhow::bail!(USAGE);
    };
    info!("Loading problem data from {}", data_file.display());
    let problem =
        Problem::load(&data_file).with_context(|| data_file.display().to_string())?;
    print!("{}", problem.summary());
    Ok(())
}
