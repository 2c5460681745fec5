use std::ffi::{c_char, c_void, CStr, CString};

use crate::domain::solver::{LoadedModel, Solver};
use crate::error::{Error, Result};
use crate::models::{Status, VarValue};

use ::highs::HighsModelStatus;
use highs_sys::*;
use log::{debug, warn};

const SOLVER_NAME: &str = "HiGHS";

/// kHighsMaximumStringLength in the C API
const NAME_BUFFER_LEN: usize = 512;

const HIGHS_STATUS_ERROR: HighsInt = -1;
const HIGHS_STATUS_WARNING: HighsInt = 1;

const OUTPUT_FLAG_OPTION: &[u8] = b"output_flag\0";
const PRIMAL_SOLUTION_STATUS_INFO: &[u8] = b"primal_solution_status\0";

/// kSolutionStatusFeasible in the C API
const SOLUTION_STATUS_FEASIBLE: HighsInt = 2;

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }

    /// Convert HiGHS status to our status
    fn convert_status(model_status: HighsModelStatus) -> Status {
        match model_status {
            HighsModelStatus::Optimal => Status::Optimal,
            HighsModelStatus::Infeasible => Status::Infeasible,
            HighsModelStatus::UnboundedOrInfeasible => Status::InfeasibleOrUnbounded,
            HighsModelStatus::Unbounded => Status::Unbounded,
            HighsModelStatus::ReachedTimeLimit | HighsModelStatus::ReachedIterationLimit => {
                Status::Interrupted
            }
            _ => Status::Undefined,
        }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for HighsSolver {
    fn read_model(&self, path: &str) -> Result<Box<dyn LoadedModel>> {
        let handle = HighsHandle::new()?;
        let filename = c_path(path)?;
        let status = unsafe { Highs_readModel(handle.ptr, filename.as_ptr()) };
        check(status, "read model")?;
        Ok(Box::new(HighsModel { handle }))
    }

    fn name(&self) -> &str {
        SOLVER_NAME
    }
}

/// Owning wrapper around a `Highs_create` instance
struct HighsHandle {
    ptr: *mut c_void,
}

impl HighsHandle {
    fn new() -> Result<Self> {
        let ptr = unsafe { Highs_create() };
        if ptr.is_null() {
            return Err(Error::backend(SOLVER_NAME, "Failed to create HiGHS instance"));
        }
        let handle = HighsHandle { ptr };

        // Disable HiGHS console output, stdout only carries the solution report
        let status = unsafe {
            Highs_setBoolOptionValue(handle.ptr, OUTPUT_FLAG_OPTION.as_ptr().cast::<c_char>(), 0)
        };
        check(status, "disable console output")?;
        Ok(handle)
    }
}

impl Drop for HighsHandle {
    fn drop(&mut self) {
        unsafe {
            if !self.ptr.is_null() {
                Highs_destroy(self.ptr);
            }
        }
    }
}

/// A model read by HiGHS
pub struct HighsModel {
    handle: HighsHandle,
}

impl HighsModel {
    fn num_cols(&self) -> usize {
        let n = unsafe { Highs_getNumCol(self.handle.ptr) };
        n.max(0) as usize
    }

    fn num_rows(&self) -> usize {
        let n = unsafe { Highs_getNumRow(self.handle.ptr) };
        n.max(0) as usize
    }

    fn col_name(&self, col: usize) -> Result<String> {
        let mut buffer: Vec<c_char> = vec![0; NAME_BUFFER_LEN];
        let status =
            unsafe { Highs_getColName(self.handle.ptr, col as HighsInt, buffer.as_mut_ptr()) };
        check(status, "read column name")?;
        // HiGHS always NUL-terminates within kHighsMaximumStringLength
        let name = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        Ok(name.to_string_lossy().into_owned())
    }

    /// HiGHS hands out zeros for infeasible or unbounded models, so
    /// solution accessors fail unless a feasible primal solution exists.
    fn require_primal_solution(&self) -> Result<()> {
        let mut solution_status: HighsInt = 0;
        let status = unsafe {
            Highs_getIntInfoValue(
                self.handle.ptr,
                PRIMAL_SOLUTION_STATUS_INFO.as_ptr().cast::<c_char>(),
                &mut solution_status,
            )
        };
        check(status, "read primal solution status")?;
        if solution_status != SOLUTION_STATUS_FEASIBLE {
            return Err(Error::backend(
                SOLVER_NAME,
                format!("No feasible solution available (model is {})", self.status()?),
            ));
        }
        Ok(())
    }
}

impl LoadedModel for HighsModel {
    fn optimize(&mut self) -> Result<()> {
        let status = unsafe { Highs_run(self.handle.ptr) };
        check(status, "run")
    }

    fn status(&self) -> Result<Status> {
        let raw = unsafe { Highs_getModelStatus(self.handle.ptr) };
        debug!("HiGHS model status {}", raw);
        Ok(HighsModelStatus::try_from(raw)
            .map(HighsSolver::convert_status)
            .unwrap_or(Status::Undefined))
    }

    fn write_solution(&self, path: &str) -> Result<()> {
        self.require_primal_solution()?;
        let filename = c_path(path)?;
        let status = unsafe { Highs_writeSolution(self.handle.ptr, filename.as_ptr()) };
        check(status, "write solution")
    }

    fn variables(&self) -> Result<Vec<VarValue>> {
        self.require_primal_solution()?;
        let n_cols = self.num_cols();
        let n_rows = self.num_rows();
        let mut col_value = vec![0.0; n_cols];
        let mut col_dual = vec![0.0; n_cols];
        let mut row_value = vec![0.0; n_rows];
        let mut row_dual = vec![0.0; n_rows];

        let status = unsafe {
            Highs_getSolution(
                self.handle.ptr,
                col_value.as_mut_ptr(),
                col_dual.as_mut_ptr(),
                row_value.as_mut_ptr(),
                row_dual.as_mut_ptr(),
            )
        };
        check(status, "read solution")?;

        col_value
            .into_iter()
            .enumerate()
            .map(|(col, value)| {
                Ok(VarValue {
                    name: self.col_name(col)?,
                    value,
                })
            })
            .collect()
    }

    fn objective_value(&self) -> Result<f64> {
        self.require_primal_solution()?;
        Ok(unsafe { Highs_getObjectiveValue(self.handle.ptr) })
    }
}

fn c_path(path: &str) -> Result<CString> {
    CString::new(path).map_err(|_| Error::InvalidPath(path.to_string()))
}

/// Map a HiGHS return status to our error type. Warnings are logged only.
fn check(status: HighsInt, action: &str) -> Result<()> {
    match status {
        HIGHS_STATUS_ERROR => Err(Error::backend(
            SOLVER_NAME,
            format!("Failed to {}", action),
        )),
        HIGHS_STATUS_WARNING => {
            warn!("HiGHS reported a warning during {}", action);
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mps::{MpsModel, Row, RowKind, VarKind};

    fn scratch_model(name: &str, model: &MpsModel) -> String {
        let path = std::env::temp_dir().join(format!("highs-{}-{}", std::process::id(), name));
        model.write_to(&path).unwrap();
        path.to_str().unwrap().to_string()
    }

    /// x >= 5 and x <= 1
    fn infeasible_model() -> MpsModel {
        let mut model = MpsModel::new("infeas");
        let x = model.add_var("x", VarKind::Continuous, None).unwrap();
        for (name, kind, rhs) in [("lo", RowKind::GreaterEqual, 5.0), ("hi", RowKind::LessEqual, 1.0)] {
            model
                .add_row(Row {
                    name: name.to_string(),
                    desc: None,
                    kind,
                    terms: vec![(1.0, x)],
                    rhs,
                })
                .unwrap();
        }
        model.set_objective(&[(1.0, x)]).unwrap();
        model
    }

    #[test]
    fn test_infeasible_model_has_no_solution() {
        let path = scratch_model("infeas.mps", &infeasible_model());
        let solver = HighsSolver::new();
        let mut model = solver.read_model(&path).unwrap();
        std::fs::remove_file(&path).ok();

        model.optimize().unwrap();
        assert!(matches!(
            model.status().unwrap(),
            Status::Infeasible | Status::InfeasibleOrUnbounded
        ));
        assert!(matches!(model.variables(), Err(Error::Backend { .. })));
        assert!(matches!(model.objective_value(), Err(Error::Backend { .. })));
        assert!(matches!(
            model.write_solution("unused.sol"),
            Err(Error::Backend { .. })
        ));
    }

    #[test]
    fn test_feasible_model_reports_solution() {
        let mut lp = MpsModel::new("lp");
        let x = lp.add_var("x", VarKind::Continuous, None).unwrap();
        lp.add_row(Row {
            name: "lo".to_string(),
            desc: None,
            kind: RowKind::GreaterEqual,
            terms: vec![(1.0, x)],
            rhs: 2.0,
        })
        .unwrap();
        lp.set_objective(&[(3.0, x)]).unwrap();
        let path = scratch_model("lp.mps", &lp);

        let solver = HighsSolver::new();
        let mut model = solver.read_model(&path).unwrap();
        std::fs::remove_file(&path).ok();

        model.optimize().unwrap();
        let variables = model.variables().unwrap();
        assert_eq!(variables.len(), 1);
        assert_eq!(variables[0].name, "x");
        assert!((variables[0].value - 2.0).abs() < 1e-9);
        assert!((model.objective_value().unwrap() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_model_file_is_backend_error() {
        let solver = HighsSolver::new();
        let err = solver
            .read_model("definitely/not/here.mps")
            .err()
            .expect("reading a missing file should fail");
        assert!(matches!(err, Error::Backend { .. }));
    }

    #[test]
    fn test_interior_nul_is_invalid_path() {
        let solver = HighsSolver::new();
        let err = solver.read_model("bad\0name.mps").err().unwrap();
        assert!(matches!(err, Error::InvalidPath(_)));
    }

    #[test]
    fn test_convert_status() {
        assert_eq!(
            HighsSolver::convert_status(HighsModelStatus::Optimal),
            Status::Optimal
        );
        assert_eq!(
            HighsSolver::convert_status(HighsModelStatus::Infeasible),
            Status::Infeasible
        );
        assert_eq!(
            HighsSolver::convert_status(HighsModelStatus::UnboundedOrInfeasible),
            Status::InfeasibleOrUnbounded
        );
    }
}
