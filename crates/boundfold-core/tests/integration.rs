#![allow(clippy::float_cmp)]

use boundfold_core::{
    BoundSide, CONSTRAINTS_TO_VAR_BOUNDS, ConstraintToVarBound, FoldConfig, FoldReport, Model,
    ROOT_BLOCK, Transformation, TransformationFactory, Variable,
};
use boundfold_expr::{ConstraintId, Expr, VariableId};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn fold(model: &mut Model) -> FoldReport {
    ConstraintToVarBound::new()
        .apply_to(model)
        .expect("bound folding failed")
}

fn bounds(model: &Model, var: VariableId) -> (Option<f64>, Option<f64>) {
    (
        model.lower_bound(var).expect("lower bound"),
        model.upper_bound(var).expect("upper bound"),
    )
}

/// A small dispatch model with a generator subsystem nested under a plant
/// block. Returns the model and the variables `(p, q, r, s)`.
fn plant_model() -> (Model, [VariableId; 4]) {
    let mut model = Model::new();
    let p = model.add_variable(Variable::free().with_value(12.0)).unwrap();
    let q = model
        .add_variable(Variable::continuous(Some(0.0), None))
        .unwrap();
    let r = model.add_variable(Variable::free()).unwrap();
    let s = model.add_variable(Variable::free().with_value(-1.0)).unwrap();
    model.set_variable_name(p, "p".to_string()).unwrap();

    // p <= 10 at the root
    let cap = model.add_constraint(Expr::var(p).le_scalar(10.0)).unwrap();
    model.set_constraint_name(cap, "p_cap".to_string()).unwrap();
    // p + q <= 15 couples two variables
    model
        .add_constraint((Expr::var(p) + Expr::var(q)).le_scalar(15.0))
        .unwrap();

    let plant = model.add_block(ROOT_BLOCK, "plant").unwrap();
    // 2q >= 4 inside the plant
    model
        .add_constraint_to(plant, Expr::term(q, 2.0).ge_scalar(4.0))
        .unwrap();
    let unit = model.add_block(plant, "unit1").unwrap();
    // -r + 1 <= 3 two levels down
    model
        .add_constraint_to(unit, (Expr::term(r, -1.0) + 1.0).le_scalar(3.0))
        .unwrap();
    // s * s <= 9 stays nonlinear
    model
        .add_constraint_to(unit, Expr::product(s, s, 1.0).le_scalar(9.0))
        .unwrap();
    // s >= 0 pulls the stored value of s up
    model
        .add_constraint_to(unit, Expr::var(s).ge_scalar(0.0))
        .unwrap();

    (model, [p, q, r, s])
}

#[test]
fn test_plant_model_folds_through_nested_blocks() {
    init_tracing();
    let (mut model, [p, q, r, s]) = plant_model();

    let report = fold(&mut model);

    assert_eq!(bounds(&model, p), (None, Some(10.0)));
    assert_eq!(bounds(&model, q), (Some(2.0), None));
    assert_eq!(bounds(&model, r), (Some(-2.0), None));
    assert_eq!(bounds(&model, s), (Some(0.0), None));
    assert_eq!(model.value(p).unwrap(), Some(10.0));
    assert_eq!(model.value(s).unwrap(), Some(0.0));

    assert_eq!(report.visited, 6);
    assert_eq!(report.deactivated, 4);
    assert_eq!(report.skipped_nonlinear, 1);
    assert_eq!(report.skipped_non_single, 1);
    assert_eq!(report.value_repairs.len(), 2);

    let remaining: Vec<ConstraintId> = model.active_constraints(true).collect();
    assert_eq!(remaining, vec![ConstraintId::new(1), ConstraintId::new(4)]);

    let cap = model.get_constraint_by_name("p_cap").expect("named constraint");
    assert!(!model.is_constraint_active(cap).unwrap());
    assert_eq!(model.get_variable_by_name("p"), Some(p));
}

#[test]
fn test_without_descent_only_root_constraints_fold() {
    init_tracing();
    let (mut model, [p, q, r, _]) = plant_model();

    let pass =
        ConstraintToVarBound::with_config(FoldConfig::new().with_descend_into(false)).unwrap();
    let report = pass.apply_to(&mut model).unwrap();

    assert_eq!(report.visited, 2);
    assert_eq!(report.deactivated, 1);
    assert_eq!(bounds(&model, p), (None, Some(10.0)));
    assert_eq!(bounds(&model, q), (Some(0.0), None));
    assert_eq!(bounds(&model, r), (None, None));
}

#[test]
fn test_inactive_block_is_skipped() {
    init_tracing();
    let mut model = Model::new();
    let x = model.add_variable(Variable::free()).unwrap();
    let block = model.add_block(ROOT_BLOCK, "maintenance").unwrap();
    let con = model
        .add_constraint_to(block, Expr::var(x).le_scalar(1.0))
        .unwrap();
    model.deactivate_block(block).unwrap();

    let report = fold(&mut model);

    assert!(report.is_noop());
    assert!(model.is_constraint_active(con).unwrap());
    assert_eq!(bounds(&model, x), (None, None));

    model.activate_block(block).unwrap();
    fold(&mut model);
    assert_eq!(bounds(&model, x), (None, Some(1.0)));
}

#[test]
fn test_create_using_leaves_input_untouched() {
    init_tracing();
    let (original, [p, q, r, s]) = plant_model();
    let pass = ConstraintToVarBound::new();

    let (transformed, copy_report) = pass.create_using(&original).unwrap();

    for var in [p, q, r] {
        assert_eq!(
            bounds(&original, var).1,
            None,
            "original upper bound changed"
        );
    }
    assert_eq!(bounds(&original, q), (Some(0.0), None));
    assert_eq!(original.value(p).unwrap(), Some(12.0));
    assert_eq!(original.active_constraints(true).count(), 6);

    let mut in_place = original.clone();
    let in_place_report = pass.apply_to(&mut in_place).unwrap();
    assert_eq!(copy_report, in_place_report);
    for var in [p, q, r, s] {
        assert_eq!(bounds(&transformed, var), bounds(&in_place, var));
        assert_eq!(transformed.value(var).unwrap(), in_place.value(var).unwrap());
    }
}

#[test]
fn test_second_run_changes_nothing() {
    init_tracing();
    let (mut model, vars) = plant_model();
    fold(&mut model);
    let before: Vec<_> = vars.iter().map(|&v| bounds(&model, v)).collect();

    let report = fold(&mut model);

    assert!(report.is_noop());
    assert!(report.bound_updates.is_empty());
    assert!(report.value_repairs.is_empty());
    let after: Vec<_> = vars.iter().map(|&v| bounds(&model, v)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_bounds_only_tighten() {
    init_tracing();
    let mut model = Model::new();
    let x = model
        .add_variable(Variable::continuous(Some(-1.0), Some(1.0)))
        .unwrap();
    model.add_constraint(Expr::var(x).le_scalar(5.0)).unwrap();
    model.add_constraint(Expr::var(x).ge_scalar(-5.0)).unwrap();
    model
        .add_constraint(Expr::term(x, 4.0).between(-2.0, 8.0).unwrap())
        .unwrap();

    let report = fold(&mut model);

    assert_eq!(bounds(&model, x), (Some(-0.5), Some(1.0)));
    assert_eq!(report.deactivated, 3);
    for update in &report.bound_updates {
        let previous = update.previous.expect("x starts bounded");
        match update.side {
            BoundSide::Lower => assert!(update.current >= previous),
            BoundSide::Upper => assert!(update.current <= previous),
        }
    }
}

#[test]
fn test_fixed_variables_fold_into_constant() {
    init_tracing();
    let mut model = Model::new();
    let x = model.add_variable(Variable::free()).unwrap();
    let on = model
        .add_variable(Variable::continuous(Some(0.0), Some(1.0)))
        .unwrap();
    let cap = model.add_variable(Variable::free()).unwrap();
    model.fix_variable(on, 1.0).unwrap();
    model.fix_variable(cap, 0.0).unwrap();

    // x - 8*on <= 0  with on fixed at 1  =>  x <= 8
    let switched = model
        .add_constraint((Expr::var(x) - Expr::term(on, 8.0)).le_scalar(0.0))
        .unwrap();
    // x * cap <= 3 with cap fixed at 0 has nothing left to bound
    let bilinear = model
        .add_constraint(Expr::product(x, cap, 1.0).le_scalar(3.0))
        .unwrap();

    let report = fold(&mut model);

    assert_eq!(bounds(&model, x), (None, Some(8.0)));
    assert!(!model.is_constraint_active(switched).unwrap());
    assert!(model.is_constraint_active(bilinear).unwrap());
    assert_eq!(report.skipped_non_single, 1);
}

#[test]
fn test_equality_pins_variable() {
    init_tracing();
    let mut model = Model::new();
    let x = model.add_variable(Variable::free().with_value(0.0)).unwrap();
    model
        .add_constraint((Expr::term(x, -2.0) + 3.0).eq_scalar(-7.0))
        .unwrap();

    fold(&mut model);

    assert_eq!(bounds(&model, x), (Some(5.0), Some(5.0)));
    assert_eq!(model.value(x).unwrap(), Some(5.0));
}

#[test]
fn test_factory_pass_matches_direct_construction() {
    init_tracing();
    let transformation =
        TransformationFactory::create(CONSTRAINTS_TO_VAR_BOUNDS).expect("registered");
    let (mut by_name, vars) = plant_model();
    let (mut direct, _) = plant_model();

    let named_report = transformation.apply_to(&mut by_name).unwrap();
    let direct_report = fold(&mut direct);

    assert_eq!(named_report, direct_report);
    for var in vars {
        assert_eq!(bounds(&by_name, var), bounds(&direct, var));
    }
}

#[test]
fn test_report_serializes_for_diagnostics() {
    init_tracing();
    let (mut model, _) = plant_model();
    let report = fold(&mut model);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["deactivated"], 4);
    assert_eq!(json["bound_updates"][0]["side"], "upper");
    assert_eq!(json["bound_updates"][0]["constraint"], 0);
    assert_eq!(json["value_repairs"][0]["current"], 10.0);
}
