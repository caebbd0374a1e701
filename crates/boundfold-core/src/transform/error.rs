//! Transformation error types.

use boundfold_expr::expr::ExprError;
use boundfold_expr::ids::ConstraintId;

use crate::model::ModelError;

/// Error type for transformations.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A model accessor failed.
    Model(ModelError),
    /// Decomposing a constraint body failed.
    Expr(ExprError),
    /// No transformation is registered under this name.
    UnknownTransformation(String),
    /// Zero tolerance must be finite and non-negative.
    InvalidTolerance { tolerance: f64 },
    /// A constraint implies a bound that no finite value satisfies.
    UnsatisfiableBound { constraint: ConstraintId, value: f64 },
}

impl TransformError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            TransformError::Model(err) => err.code(),
            TransformError::Expr(err) => err.code(),
            TransformError::UnknownTransformation(_) => "TRANSFORM_UNKNOWN",
            TransformError::InvalidTolerance { .. } => "TRANSFORM_INVALID_TOLERANCE",
            TransformError::UnsatisfiableBound { .. } => "TRANSFORM_UNSATISFIABLE_BOUND",
        }
    }
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::Model(err) => write!(f, "{err}"),
            TransformError::Expr(err) => write!(f, "{err}"),
            TransformError::UnknownTransformation(name) => {
                write!(f, "[{}] No transformation named '{}'", self.code(), name)
            }
            TransformError::InvalidTolerance { tolerance } => write!(
                f,
                "[{}] Zero tolerance must be finite and non-negative (got {})",
                self.code(),
                tolerance
            ),
            TransformError::UnsatisfiableBound { constraint, value } => write!(
                f,
                "[{}] Constraint {} implies the bound {}",
                self.code(),
                constraint.inner(),
                value
            ),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Model(err) => Some(err),
            TransformError::Expr(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for TransformError {
    fn from(err: ModelError) -> Self {
        TransformError::Model(err)
    }
}

impl From<ExprError> for TransformError {
    fn from(err: ExprError) -> Self {
        TransformError::Expr(err)
    }
}
