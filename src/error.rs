use thiserror::Error;

/// Result type for solver driver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, solving or reporting a model
#[derive(Error, Debug)]
pub enum Error {
    /// The solver library reported a failure; its message is passed through as-is
    #[error("{solver}: {details}")]
    Backend { solver: String, details: String },

    /// `SOLVER` named a backend that is not compiled in
    #[error("Unknown solver '{name}' (available: {available})")]
    UnknownSolver { name: String, available: String },

    /// No solver backend feature was enabled at build time
    #[error("No solver backend compiled in; rebuild with --features highs-solver or --features gurobi-solver")]
    NoBackend,

    /// Command-line argument is not valid UTF-8
    #[error("Model path is not valid UTF-8: {0}")]
    NonUnicodeArgument(String),

    /// Path cannot be handed to a C solver API
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Writing the report failed
    #[error("Output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn backend(solver: &str, details: impl ToString) -> Self {
        Error::Backend {
            solver: solver.to_string(),
            details: details.to_string(),
        }
    }
}
