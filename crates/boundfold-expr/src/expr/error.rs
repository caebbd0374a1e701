//! Expression construction and decomposition errors.

#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// Product of two expressions exceeds the supported degree.
    DegreeOverflow { degree: usize },
    /// A coefficient or constant is NaN or infinite.
    NonFiniteCoefficient { value: f64 },
    /// Lower bound of a ranged expression exceeds its upper bound.
    InvalidRange { lower: f64, upper: f64 },
}

impl ExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExprError::DegreeOverflow { .. } => "EXPR_DEGREE_OVERFLOW",
            ExprError::NonFiniteCoefficient { .. } => "EXPR_NON_FINITE_COEFFICIENT",
            ExprError::InvalidRange { .. } => "EXPR_INVALID_RANGE",
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprError::DegreeOverflow { degree } => write!(
                f,
                "[{}] Product has degree {}, at most {} is supported",
                self.code(),
                degree,
                crate::expr::core::MAX_DEGREE
            ),
            ExprError::NonFiniteCoefficient { value } => write!(
                f,
                "[{}] Expression coefficient must be finite (got {})",
                self.code(),
                value
            ),
            ExprError::InvalidRange { lower, upper } => write!(
                f,
                "[{}] Range invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
        }
    }
}

impl std::error::Error for ExprError {}
