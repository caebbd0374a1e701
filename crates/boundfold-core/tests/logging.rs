//! `enable_logging` installs a process-wide subscriber, so every step lives in
//! one test and this binary holds no other tests.

use std::env;

use boundfold_core::logging::{LOG_FORMAT_ENV, TRACE_ENV, enable_logging};
use boundfold_core::{ConstraintToVarBound, Model, Transformation, Variable};
use boundfold_expr::Expr;

#[test]
fn test_enable_logging_from_environment() {
    // SAFETY: the only test in this binary, nothing else reads the environment.
    unsafe {
        env::set_var(LOG_FORMAT_ENV, "xml");
        env::remove_var(TRACE_ENV);
    }
    let err = enable_logging(Some("debug")).unwrap_err();
    assert_eq!(err.code(), "LOGGING_INVALID_FORMAT");

    let err = enable_logging(Some("boundfold_core=loud")).unwrap_err();
    assert_eq!(err.code(), "LOGGING_INVALID_FILTER");

    // SAFETY: as above.
    unsafe {
        env::set_var(LOG_FORMAT_ENV, "json");
        env::set_var(TRACE_ENV, "boundfold_core=debug");
    }
    assert_eq!(enable_logging(None), Ok(true));

    let mut model = Model::new();
    let x = model.add_variable(Variable::free()).unwrap();
    model.add_constraint(Expr::var(x).le_scalar(1.0)).unwrap();
    let report = ConstraintToVarBound::new().apply_to(&mut model).unwrap();
    assert_eq!(report.deactivated, 1);

    assert_eq!(enable_logging(Some("info")), Ok(false));
}
