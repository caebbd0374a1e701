//! Model error types.

use boundfold_expr::ids::{BlockId, ConstraintId, VariableId};

/// Errors that can occur during model operations
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Invalid variable ID
    InvalidVariableId(VariableId),
    /// Invalid variable bounds
    InvalidVariableBounds { lower: f64, upper: f64 },
    /// Variable value is NaN
    InvalidVariableValue { value: f64 },
    /// Fixed variable has no value to be fixed at
    FixedWithoutValue,
    /// Invalid constraint ID
    InvalidConstraintId(ConstraintId),
    /// Invalid constraint bounds
    InvalidConstraintBounds { lower: f64, upper: f64 },
    /// Invalid block ID
    InvalidBlockId(BlockId),
    /// A sibling block already uses this name
    DuplicateBlockName { name: String },
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidVariableId(_) => "VARIABLE_INVALID_ID",
            ModelError::InvalidVariableBounds { .. } => "VARIABLE_INVALID_BOUNDS",
            ModelError::InvalidVariableValue { .. } => "VARIABLE_INVALID_VALUE",
            ModelError::FixedWithoutValue => "VARIABLE_FIXED_WITHOUT_VALUE",
            ModelError::InvalidConstraintId(_) => "CONSTRAINT_INVALID_ID",
            ModelError::InvalidConstraintBounds { .. } => "CONSTRAINT_INVALID_BOUNDS",
            ModelError::InvalidBlockId(_) => "BLOCK_INVALID_ID",
            ModelError::DuplicateBlockName { .. } => "BLOCK_DUPLICATE_NAME",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidVariableId(id) => write!(
                f,
                "[{}] Variable ID {} does not exist",
                self.code(),
                id.inner()
            ),
            ModelError::InvalidVariableBounds { lower, upper } => write!(
                f,
                "[{}] Variable bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            ModelError::InvalidVariableValue { value } => write!(
                f,
                "[{}] Variable value must be a number (got {})",
                self.code(),
                value
            ),
            ModelError::FixedWithoutValue => {
                write!(f, "[{}] Fixed variable must have a value", self.code())
            }
            ModelError::InvalidConstraintId(id) => write!(
                f,
                "[{}] Constraint ID {} does not exist",
                self.code(),
                id.inner()
            ),
            ModelError::InvalidConstraintBounds { lower, upper } => write!(
                f,
                "[{}] Constraint bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            ModelError::InvalidBlockId(id) => {
                write!(f, "[{}] Block ID {} does not exist", self.code(), id.inner())
            }
            ModelError::DuplicateBlockName { name } => {
                write!(f, "[{}] Block '{}' already exists", self.code(), name)
            }
        }
    }
}

impl std::error::Error for ModelError {}
