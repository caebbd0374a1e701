//! Expression types for optimization modeling.
//!
//! - [`core`]: `Expr`, terms by degree plus a constant
//! - [`constraint`]: `RangedExpr`, a body with optional lower and upper bounds
//! - [`error`]: expression construction errors

pub mod constraint;
pub mod core;
pub mod error;

pub use constraint::RangedExpr;
pub use core::Expr;
pub use error::ExprError;
