use boundfold_expr::expr::{Expr, RangedExpr};
use boundfold_expr::ids::{BlockId, ConstraintId};

/// A decision variable with optional bounds and an optional current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub value: Option<f64>,
    pub is_fixed: bool,
}

impl Variable {
    /// Create a variable with no bounds.
    pub fn free() -> Self {
        Self::continuous(None, None)
    }

    /// Create a variable with the given bounds.
    pub fn continuous(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower,
            upper,
            value: None,
            is_fixed: false,
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn has_lower(&self) -> bool {
        self.lower.is_some()
    }

    pub fn has_upper(&self) -> bool {
        self.upper.is_some()
    }
}

/// A constraint `lower <= body <= upper` with an active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub body: Expr,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub is_active: bool,
}

impl Constraint {
    pub fn has_lower(&self) -> bool {
        self.lower.is_some()
    }

    pub fn has_upper(&self) -> bool {
        self.upper.is_some()
    }
}

impl From<RangedExpr> for Constraint {
    fn from(ranged: RangedExpr) -> Self {
        let (body, lower, upper) = ranged.into_parts();
        Self {
            body,
            lower,
            upper,
            is_active: true,
        }
    }
}

/// A named group of constraints and nested blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub parent: Option<BlockId>,
    pub constraints: Vec<ConstraintId>,
    pub children: Vec<BlockId>,
    pub is_active: bool,
}

impl Block {
    pub(crate) fn new(name: String, parent: Option<BlockId>) -> Self {
        Self {
            name,
            parent,
            constraints: Vec::new(),
            children: Vec::new(),
            is_active: true,
        }
    }
}
