use crate::model::Model;
use crate::types::Variable;
use boundfold_expr::ids::VariableId;

pub(super) fn bounded_variable(model: &mut Model, lower: f64, upper: f64) -> VariableId {
    model
        .add_variable(Variable::continuous(Some(lower), Some(upper)))
        .unwrap()
}

pub(super) fn free_variable(model: &mut Model) -> VariableId {
    model.add_variable(Variable::free()).unwrap()
}
