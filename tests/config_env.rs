use serial_test::serial;
use std::env;

use mps_solve::config::{PRINT_SOL_VAR, SOLVER_VAR};
use mps_solve::RunConfig;

fn with_env(print_sol: Option<&str>, solver: Option<&str>) -> RunConfig {
    match print_sol {
        Some(value) => env::set_var(PRINT_SOL_VAR, value),
        None => env::remove_var(PRINT_SOL_VAR),
    }
    match solver {
        Some(value) => env::set_var(SOLVER_VAR, value),
        None => env::remove_var(SOLVER_VAR),
    }
    let config = RunConfig::from_env().unwrap();
    env::remove_var(PRINT_SOL_VAR);
    env::remove_var(SOLVER_VAR);
    config
}

#[test]
#[serial]
fn test_print_sol_yes_enables_printing() {
    assert!(with_env(Some("yes"), None).print_solution);
}

#[test]
#[serial]
fn test_print_sol_other_values_disable_printing() {
    assert!(!with_env(Some("no"), None).print_solution);
    assert!(!with_env(Some("YES"), None).print_solution);
    assert!(!with_env(Some("1"), None).print_solution);
    assert!(!with_env(None, None).print_solution);
}

#[test]
#[serial]
fn test_solver_variable_is_passed_through() {
    assert_eq!(
        with_env(None, Some("gurobi")).solver.as_deref(),
        Some("gurobi")
    );
    assert_eq!(with_env(None, None).solver, None);
}
