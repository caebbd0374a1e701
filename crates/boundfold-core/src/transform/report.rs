//! Summary of what a bound folding run changed.

use boundfold_expr::ids::{ConstraintId, VariableId};
use serde::Serialize;

/// Which side of a variable's domain a bound applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundSide {
    Lower,
    Upper,
}

impl BoundSide {
    pub fn as_str(self) -> &'static str {
        match self {
            BoundSide::Lower => "lower",
            BoundSide::Upper => "upper",
        }
    }
}

/// A variable bound tightened from a constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundUpdate {
    pub constraint: ConstraintId,
    pub variable: VariableId,
    pub side: BoundSide,
    pub previous: Option<f64>,
    pub current: f64,
}

/// A variable value moved back inside its bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueRepair {
    pub variable: VariableId,
    pub previous: f64,
    pub current: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoldReport {
    /// Active constraints examined.
    pub visited: usize,
    /// Constraints deactivated, degenerate ones included.
    pub deactivated: usize,
    /// Deactivated constraints whose coefficient was numerically zero.
    pub degenerate: usize,
    /// Left active: body has a term of degree two or more.
    pub skipped_nonlinear: usize,
    /// Left active: body references zero or several variables.
    pub skipped_non_single: usize,
    pub bound_updates: Vec<BoundUpdate>,
    pub value_repairs: Vec<ValueRepair>,
}

impl FoldReport {
    /// True when the run changed nothing.
    pub fn is_noop(&self) -> bool {
        self.deactivated == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_json() {
        let report = FoldReport {
            visited: 1,
            deactivated: 1,
            bound_updates: vec![BoundUpdate {
                constraint: ConstraintId::new(0),
                variable: VariableId::new(2),
                side: BoundSide::Upper,
                previous: None,
                current: 2.0,
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["visited"], 1);
        assert_eq!(value["bound_updates"][0]["side"], "upper");
        assert_eq!(value["bound_updates"][0]["variable"], 2);
        assert!(value["bound_updates"][0]["previous"].is_null());
    }

    #[test]
    fn test_default_report_is_noop() {
        assert!(FoldReport::default().is_noop());
    }
}
