//! Core expression type: terms by degree + constant.
//!
//! Terms are kept in separate Vecs per degree:
//! - linear:    (VarId, f64)
//! - quadratic: (VarId, VarId, f64)
//! - cubic:     (VarId, VarId, VarId, f64)
//!
//! Terms are stored as written. Duplicates are not merged and zero
//! coefficients are kept, so `0 * x` still references `x`. Merging happens in
//! the decomposition service (`crate::repn`).

use crate::expr::constraint::RangedExpr;
use crate::expr::error::ExprError;
use crate::ids::VariableId;

/// Highest term degree an expression can hold.
pub(crate) const MAX_DEGREE: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    constant: f64,
    linear: Vec<(VariableId, f64)>,
    quadratic: Vec<(VariableId, VariableId, f64)>,
    cubic: Vec<(VariableId, VariableId, VariableId, f64)>,
}

impl Expr {
    // ── Constructors ────────────────────────────────────────

    /// Expression from linear terms and constant.
    pub fn new(linear: Vec<(VariableId, f64)>, constant: f64) -> Self {
        Self {
            constant,
            linear,
            ..Default::default()
        }
    }

    /// Just a constant, no variable terms.
    pub fn from_constant(constant: f64) -> Self {
        Self {
            constant,
            ..Default::default()
        }
    }

    /// Single linear term: coeff * var. A zero coefficient is kept.
    pub fn term(var_id: VariableId, coeff: f64) -> Self {
        Self {
            linear: vec![(var_id, coeff)],
            ..Default::default()
        }
    }

    /// Single variable with coefficient 1.0.
    pub fn var(var_id: VariableId) -> Self {
        Self::term(var_id, 1.0)
    }

    /// From raw linear terms, no constant.
    pub fn from_linear(linear: Vec<(VariableId, f64)>) -> Self {
        Self {
            linear,
            ..Default::default()
        }
    }

    /// Bilinear term: coeff * a * b.
    pub fn product(a: VariableId, b: VariableId, coeff: f64) -> Self {
        Self {
            quadratic: vec![(a, b, coeff)],
            ..Default::default()
        }
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn linear_terms(&self) -> &[(VariableId, f64)] {
        &self.linear
    }

    pub fn quadratic_terms(&self) -> &[(VariableId, VariableId, f64)] {
        &self.quadratic
    }

    pub fn cubic_terms(&self) -> &[(VariableId, VariableId, VariableId, f64)] {
        &self.cubic
    }

    /// Max degree of any term (0 = constant only).
    pub fn degree(&self) -> usize {
        if !self.cubic.is_empty() {
            3
        } else if !self.quadratic.is_empty() {
            2
        } else {
            usize::from(!self.linear.is_empty())
        }
    }

    /// Distinct variables referenced by any term, in first-seen order.
    pub fn variables(&self) -> Vec<VariableId> {
        let mut seen = Vec::new();
        let mut visit = |id: VariableId| {
            if !seen.contains(&id) {
                seen.push(id);
            }
        };
        for &(v, _) in &self.linear {
            visit(v);
        }
        for &(a, b, _) in &self.quadratic {
            visit(a);
            visit(b);
        }
        for &(a, b, c, _) in &self.cubic {
            visit(a);
            visit(b);
            visit(c);
        }
        seen
    }

    // ── Operations ──────────────────────────────────────────

    /// Scale all terms and constant by a factor.
    pub fn scale(&self, by: f64) -> Self {
        Self {
            constant: self.constant * by,
            linear: self.linear.iter().map(|&(v, c)| (v, c * by)).collect(),
            quadratic: self
                .quadratic
                .iter()
                .map(|&(a, b, c)| (a, b, c * by))
                .collect(),
            cubic: self
                .cubic
                .iter()
                .map(|&(a, b, c, d)| (a, b, c, d * by))
                .collect(),
        }
    }

    /// Add another expression (concatenates terms, sums constants).
    pub fn add(&self, other: &Expr) -> Self {
        let mut sum = self.clone();
        sum.constant += other.constant;
        sum.linear.extend_from_slice(&other.linear);
        sum.quadratic.extend_from_slice(&other.quadratic);
        sum.cubic.extend_from_slice(&other.cubic);
        sum
    }

    /// Add a constant offset.
    pub fn add_constant(&self, value: f64) -> Self {
        let mut shifted = self.clone();
        shifted.constant += value;
        shifted
    }

    /// Polynomial product of two expressions.
    ///
    /// Fails when the product would exceed degree 3. A zero constant does not
    /// contribute cross terms, so `x * y` yields a single bilinear term.
    pub fn mul_expr(&self, other: &Expr) -> Result<Expr, ExprError> {
        let degree = self.degree() + other.degree();
        if degree > MAX_DEGREE {
            return Err(ExprError::DegreeOverflow { degree });
        }

        let right = other.monomials();
        let mut product = Expr::default();
        for (left_factors, left_coeff) in self.monomials() {
            for (right_factors, right_coeff) in &right {
                let mut factors = left_factors.clone();
                factors.extend_from_slice(right_factors);
                product.push_monomial(&factors, left_coeff * right_coeff);
            }
        }
        Ok(product)
    }

    fn monomials(&self) -> Vec<(Vec<VariableId>, f64)> {
        let mut out = Vec::with_capacity(
            1 + self.linear.len() + self.quadratic.len() + self.cubic.len(),
        );
        if self.constant != 0.0 {
            out.push((Vec::new(), self.constant));
        }
        out.extend(self.linear.iter().map(|&(v, c)| (vec![v], c)));
        out.extend(self.quadratic.iter().map(|&(a, b, c)| (vec![a, b], c)));
        out.extend(self.cubic.iter().map(|&(a, b, c, d)| (vec![a, b, c], d)));
        out
    }

    fn push_monomial(&mut self, factors: &[VariableId], coeff: f64) {
        match *factors {
            [] => self.constant += coeff,
            [a] => self.linear.push((a, coeff)),
            [a, b] => self.quadratic.push((a, b, coeff)),
            [a, b, c] => self.cubic.push((a, b, c, coeff)),
            _ => unreachable!("degree is checked before expanding"),
        }
    }

    // ── Comparison methods (produce RangedExpr) ─────────────

    /// `self <= rhs`. The body keeps its constant.
    pub fn le_scalar(&self, rhs: f64) -> RangedExpr {
        RangedExpr::new(self.clone(), None, Some(rhs))
    }

    /// `self >= rhs`.
    pub fn ge_scalar(&self, rhs: f64) -> RangedExpr {
        RangedExpr::new(self.clone(), Some(rhs), None)
    }

    /// `self == rhs`.
    pub fn eq_scalar(&self, rhs: f64) -> RangedExpr {
        RangedExpr::new(self.clone(), Some(rhs), Some(rhs))
    }

    /// `lower <= self <= upper`.
    pub fn between(&self, lower: f64, upper: f64) -> Result<RangedExpr, ExprError> {
        if lower > upper {
            return Err(ExprError::InvalidRange { lower, upper });
        }
        Ok(RangedExpr::new(self.clone(), Some(lower), Some(upper)))
    }

    /// `self <= rhs`, stored as `self - rhs <= 0`.
    pub fn le_expr(&self, rhs: &Expr) -> RangedExpr {
        RangedExpr::new(self.add(&rhs.scale(-1.0)), None, Some(0.0))
    }

    /// `self >= rhs`, stored as `self - rhs >= 0`.
    pub fn ge_expr(&self, rhs: &Expr) -> RangedExpr {
        RangedExpr::new(self.add(&rhs.scale(-1.0)), Some(0.0), None)
    }

    /// `self == rhs`, stored as `self - rhs == 0`.
    pub fn eq_expr(&self, rhs: &Expr) -> RangedExpr {
        RangedExpr::new(self.add(&rhs.scale(-1.0)), Some(0.0), Some(0.0))
    }
}

// ── Operator overloads ──────────────────────────────────────

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs)
    }
}

impl std::ops::Add<f64> for Expr {
    type Output = Expr;

    fn add(self, rhs: f64) -> Self::Output {
        self.add_constant(rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs.scale(-1.0))
    }
}

impl std::ops::Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
