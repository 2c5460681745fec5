use crate::error::Result;
use crate::models::{Status, VarValue};

/// Common interface for solver backends
pub trait Solver {
    /// Load a model file. Parsing is entirely up to the backend.
    fn read_model(&self, path: &str) -> Result<Box<dyn LoadedModel>>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}

/// A model owned by a backend for the duration of one run.
///
/// Accessors are only meaningful after `optimize` has returned; what they
/// do before that (or on an infeasible model) is backend-defined.
pub trait LoadedModel {
    /// Solve in place, blocking until the backend returns
    fn optimize(&mut self) -> Result<()>;

    fn status(&self) -> Result<Status>;

    /// Write the current solution in the backend's own solution format
    fn write_solution(&self, path: &str) -> Result<()>;

    /// Variables in the order the backend exposes them
    fn variables(&self) -> Result<Vec<VarValue>>;

    fn objective_value(&self) -> Result<f64>;
}
