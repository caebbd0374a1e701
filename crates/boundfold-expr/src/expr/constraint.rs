//! Ranged constraint expressions: `lower <= body <= upper`.

use crate::expr::core::Expr;

/// A constraint body with optional numeric bounds on either side.
///
/// Infinite bounds are stored as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RangedExpr {
    body: Expr,
    lower: Option<f64>,
    upper: Option<f64>,
}

impl RangedExpr {
    pub fn new(body: Expr, lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            body,
            lower: lower.filter(|v| !v.is_infinite()),
            upper: upper.filter(|v| !v.is_infinite()),
        }
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// True when both sides are present and equal.
    pub fn is_equality(&self) -> bool {
        matches!((self.lower, self.upper), (Some(l), Some(u)) if l == u)
    }

    pub fn into_parts(self) -> (Expr, Option<f64>, Option<f64>) {
        (self.body, self.lower, self.upper)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::RangedExpr;
    use crate::{Expr, VariableId};

    #[test]
    fn infinite_bounds_are_absent() {
        let c = RangedExpr::new(
            Expr::var(VariableId::new(0)),
            Some(f64::NEG_INFINITY),
            Some(f64::INFINITY),
        );
        assert_eq!(c.lower(), None);
        assert_eq!(c.upper(), None);
    }

    #[test]
    fn eq_is_equality() {
        let c = Expr::var(VariableId::new(0)).eq_scalar(2.0);
        assert!(c.is_equality());
        let (body, lower, upper) = c.into_parts();
        assert_eq!(body.linear_terms().len(), 1);
        assert_eq!(lower, Some(2.0));
        assert_eq!(upper, Some(2.0));
    }
}
