//! Model transformations.
//!
//! A [`Transformation`] rewrites a model either in place ([`apply_to`]) or on
//! a deep copy ([`create_using`]), leaving the input untouched. Registered
//! transformations can be looked up by name through
//! [`TransformationFactory`].
//!
//! [`apply_to`]: Transformation::apply_to
//! [`create_using`]: Transformation::create_using

mod bounds_to_vars;
mod config;
mod error;
mod report;

use crate::model::Model;

pub use bounds_to_vars::{CONSTRAINTS_TO_VAR_BOUNDS, ConstraintToVarBound};
pub use config::{DEFAULT_ZERO_TOLERANCE, FoldConfig};
pub use error::TransformError;
pub use report::{BoundSide, BoundUpdate, FoldReport, ValueRepair};

/// A rewrite of a model into an equivalent model.
pub trait Transformation {
    /// Summary of what one run changed.
    type Report;

    /// Registered name of the transformation.
    fn name(&self) -> &'static str;

    /// Apply the transformation to `model` in place.
    fn apply_to(&self, model: &mut Model) -> Result<Self::Report, TransformError>;

    /// Apply the transformation to a clone of `model` and return the clone.
    fn create_using(&self, model: &Model) -> Result<(Model, Self::Report), TransformError> {
        let mut transformed = model.clone();
        let report = self.apply_to(&mut transformed)?;
        Ok((transformed, report))
    }
}

/// A registered transformation that rewrites variable bounds.
pub type BoundTransformation = dyn Transformation<Report = FoldReport>;

/// Name-based lookup of registered transformations.
pub struct TransformationFactory;

impl TransformationFactory {
    /// Names of all registered transformations.
    pub fn names() -> &'static [&'static str] {
        &[CONSTRAINTS_TO_VAR_BOUNDS]
    }

    /// Create a transformation with its default configuration.
    pub fn create(name: &str) -> Result<Box<BoundTransformation>, TransformError> {
        match name {
            CONSTRAINTS_TO_VAR_BOUNDS => Ok(Box::new(ConstraintToVarBound::new())),
            other => {
                tracing::warn!(
                    component = "transform",
                    operation = "create",
                    status = "error",
                    name = other,
                    "Unknown transformation"
                );
                Err(TransformError::UnknownTransformation(other.to_string()))
            }
        }
    }
}
