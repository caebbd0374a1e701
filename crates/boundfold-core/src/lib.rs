//! Boundfold model layer and the constraint-to-variable-bound transformation.

pub mod logging;
pub mod model;
pub mod transform;
pub mod types;

pub use model::{ActiveConstraints, Model, ModelError, ROOT_BLOCK};
pub use transform::{
    BoundSide, BoundTransformation, BoundUpdate, CONSTRAINTS_TO_VAR_BOUNDS, ConstraintToVarBound,
    FoldConfig, FoldReport, TransformError, Transformation, TransformationFactory, ValueRepair,
};
pub use types::{Block, Constraint, Variable};
