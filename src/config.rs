use std::env;
use std::ffi::OsString;

use crate::error::{Error, Result};

/// Model file used when no argument is given
pub const DEFAULT_MODEL_FILE: &str = "example.mps";

/// Set to exactly `yes` to print the solution to stdout
pub const PRINT_SOL_VAR: &str = "PRINT_SOL";

/// Optional backend name, see `domain::solver_factory`
pub const SOLVER_VAR: &str = "SOLVER";

/// Everything one run of the driver needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub model_path: String,
    pub print_solution: bool,
    pub solver: Option<String>,
}

impl RunConfig {
    /// Read the process arguments and environment.
    /// Call `dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        let model_path = model_path_from_os_args(env::args_os())?;
        Ok(Self::from_parts(
            [String::new(), model_path],
            env::var(PRINT_SOL_VAR).ok(),
            env::var(SOLVER_VAR).ok(),
        ))
    }

    /// `args` includes the program name, as `std::env::args` does.
    pub fn from_parts<I>(args: I, print_sol: Option<String>, solver: Option<String>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        RunConfig {
            model_path: model_path_from_args(args),
            print_solution: print_flag(print_sol.as_deref()),
            solver: solver.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// First positional argument, or the default model file. Extra arguments are ignored.
pub fn model_path_from_args<I>(args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MODEL_FILE.to_string())
}

/// Like `model_path_from_args`, but a non-UTF-8 model path is an error
/// instead of a panic. The program name is never inspected.
pub fn model_path_from_os_args<I>(args: I) -> Result<String>
where
    I: IntoIterator<Item = OsString>,
{
    match args.into_iter().nth(1) {
        Some(arg) => arg
            .into_string()
            .map_err(|raw| Error::NonUnicodeArgument(raw.to_string_lossy().into_owned())),
        None => Ok(DEFAULT_MODEL_FILE.to_string()),
    }
}

/// Only the exact string `yes` turns printing on.
pub fn print_flag(value: Option<&str>) -> bool {
    value == Some("yes")
}
