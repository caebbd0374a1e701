//! Linear-form decomposition of expressions.
//!
//! A [`Decompose`] implementation classifies an expression as affine or not
//! and, when affine, reports its constant and its `(variable, coefficient)`
//! terms. Variables reported as fixed by a [`FixedValues`] source are treated
//! as constants.

use std::collections::BTreeMap;

use crate::expr::{Expr, ExprError};
use crate::ids::VariableId;

/// Source of values for variables that must be treated as constants.
pub trait FixedValues {
    /// Value of `id` if it is fixed, `None` if it is free.
    fn fixed_value(&self, id: VariableId) -> Option<f64>;
}

/// Treats every variable as free.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFixedValues;

impl FixedValues for NoFixedValues {
    fn fixed_value(&self, _id: VariableId) -> Option<f64> {
        None
    }
}

impl FixedValues for BTreeMap<VariableId, f64> {
    fn fixed_value(&self, id: VariableId) -> Option<f64> {
        self.get(&id).copied()
    }
}

/// `constant + Σ coefficient·variable`, one entry per distinct variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearForm {
    constant: f64,
    terms: Vec<(VariableId, f64)>,
}

impl LinearForm {
    pub fn new(constant: f64, terms: Vec<(VariableId, f64)>) -> Self {
        Self { constant, terms }
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn terms(&self) -> &[(VariableId, f64)] {
        &self.terms
    }

    pub fn num_variables(&self) -> usize {
        self.terms.len()
    }

    /// The only term, if exactly one variable is referenced.
    pub fn single_term(&self) -> Option<(VariableId, f64)> {
        match self.terms.as_slice() {
            [term] => Some(*term),
            _ => None,
        }
    }
}

/// Result of decomposing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Repn {
    Linear(LinearForm),
    /// At least one term of `degree >= 2` remains after fixing.
    Nonlinear { degree: usize },
}

impl Repn {
    pub fn is_linear(&self) -> bool {
        matches!(self, Repn::Linear(_))
    }

    pub fn as_linear(&self) -> Option<&LinearForm> {
        match self {
            Repn::Linear(form) => Some(form),
            Repn::Nonlinear { .. } => None,
        }
    }
}

/// Pluggable linear-form decomposition service.
pub trait Decompose {
    fn decompose(&self, expr: &Expr, fixed: &dyn FixedValues) -> Result<Repn, ExprError>;
}

/// Default decomposer over [`Expr`]'s degree-partitioned terms.
///
/// - Linear terms in fixed variables fold into the constant.
/// - Linear terms in free variables are merged per variable. Zero
///   coefficients are kept so the variable stays referenced.
/// - Product terms multiply in the values of their fixed factors. A product
///   whose coefficient ends up exactly zero vanishes, free factors included.
/// - A product with a single free factor left becomes a linear term.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDecomposer;

impl StandardDecomposer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct Accumulator {
    constant: f64,
    terms: Vec<(VariableId, f64)>,
    nonlinear_degree: usize,
}

impl Accumulator {
    fn add_linear(&mut self, var_id: VariableId, coeff: f64) {
        match self.terms.iter_mut().find(|(id, _)| *id == var_id) {
            Some((_, existing)) => *existing += coeff,
            None => self.terms.push((var_id, coeff)),
        }
    }

    fn add_product(&mut self, factors: &[VariableId], coeff: f64, fixed: &dyn FixedValues) {
        let mut coeff = coeff;
        let mut free = Vec::with_capacity(factors.len());
        for &factor in factors {
            match fixed.fixed_value(factor) {
                Some(value) => coeff *= value,
                None => free.push(factor),
            }
        }
        if coeff == 0.0 {
            return;
        }
        match free.as_slice() {
            [] => self.constant += coeff,
            [var_id] => self.add_linear(*var_id, coeff),
            _ => self.nonlinear_degree = self.nonlinear_degree.max(free.len()),
        }
    }
}

fn finite(value: f64) -> Result<f64, ExprError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::NonFiniteCoefficient { value })
    }
}

impl Decompose for StandardDecomposer {
    fn decompose(&self, expr: &Expr, fixed: &dyn FixedValues) -> Result<Repn, ExprError> {
        let mut acc = Accumulator {
            constant: finite(expr.constant())?,
            ..Default::default()
        };

        for &(var_id, coeff) in expr.linear_terms() {
            let coeff = finite(coeff)?;
            match fixed.fixed_value(var_id) {
                Some(value) => acc.constant += coeff * value,
                None => acc.add_linear(var_id, coeff),
            }
        }
        for &(a, b, coeff) in expr.quadratic_terms() {
            acc.add_product(&[a, b], finite(coeff)?, fixed);
        }
        for &(a, b, c, coeff) in expr.cubic_terms() {
            acc.add_product(&[a, b, c], finite(coeff)?, fixed);
        }

        if acc.nonlinear_degree >= 2 {
            return Ok(Repn::Nonlinear {
                degree: acc.nonlinear_degree,
            });
        }

        // Fixed values can overflow the folded form.
        let constant = finite(acc.constant)?;
        for &(_, coeff) in &acc.terms {
            finite(coeff)?;
        }
        Ok(Repn::Linear(LinearForm::new(constant, acc.terms)))
    }
}
