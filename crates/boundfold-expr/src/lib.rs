pub mod expr;
pub mod ids;
pub mod repn;

pub use expr::{Expr, ExprError, RangedExpr};
pub use ids::{BlockId, ConstraintId, VariableId};
pub use repn::{Decompose, FixedValues, LinearForm, NoFixedValues, Repn, StandardDecomposer};
