//! Storage access methods for the model.

use crate::types::{Block, Constraint, Variable};
use boundfold_expr::ids::{BlockId, ConstraintId, VariableId};

use super::Model;
use super::error::ModelError;

impl Model {
    /// Get the number of variables
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Get the number of constraints
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Get the number of blocks, root included
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Get a variable by ID.
    pub fn get_variable(&self, id: VariableId) -> Result<&Variable, ModelError> {
        self.variables
            .get(id.index())
            .ok_or(ModelError::InvalidVariableId(id))
    }

    /// Get a constraint by ID.
    pub fn get_constraint(&self, id: ConstraintId) -> Result<&Constraint, ModelError> {
        self.constraints
            .get(id.index())
            .ok_or(ModelError::InvalidConstraintId(id))
    }

    /// Get a block by ID.
    pub fn get_block(&self, id: BlockId) -> Result<&Block, ModelError> {
        self.blocks
            .get(id.index())
            .ok_or(ModelError::InvalidBlockId(id))
    }

    fn variable_mut(&mut self, id: VariableId) -> Result<&mut Variable, ModelError> {
        self.variables
            .get_mut(id.index())
            .ok_or(ModelError::InvalidVariableId(id))
    }

    fn constraint_mut(&mut self, id: ConstraintId) -> Result<&mut Constraint, ModelError> {
        self.constraints
            .get_mut(id.index())
            .ok_or(ModelError::InvalidConstraintId(id))
    }

    // ── Variable bounds ─────────────────────────────────────

    pub fn lower_bound(&self, id: VariableId) -> Result<Option<f64>, ModelError> {
        Ok(self.get_variable(id)?.lower)
    }

    pub fn upper_bound(&self, id: VariableId) -> Result<Option<f64>, ModelError> {
        Ok(self.get_variable(id)?.upper)
    }

    pub fn has_lower_bound(&self, id: VariableId) -> Result<bool, ModelError> {
        Ok(self.get_variable(id)?.has_lower())
    }

    pub fn has_upper_bound(&self, id: VariableId) -> Result<bool, ModelError> {
        Ok(self.get_variable(id)?.has_upper())
    }

    /// Replace the lower bound. `None` or `-inf` removes it.
    ///
    /// The bound is not checked against the upper bound.
    pub fn set_lower_bound(&mut self, id: VariableId, lower: Option<f64>) -> Result<(), ModelError> {
        let var = self.variable_mut(id)?;
        if let Some(value) = lower.filter(|v| v.is_nan()) {
            return Err(ModelError::InvalidVariableBounds {
                lower: value,
                upper: var.upper.unwrap_or(f64::INFINITY),
            });
        }
        var.lower = lower.filter(|v| *v != f64::NEG_INFINITY);
        Ok(())
    }

    /// Replace the upper bound. `None` or `+inf` removes it.
    ///
    /// The bound is not checked against the lower bound.
    pub fn set_upper_bound(&mut self, id: VariableId, upper: Option<f64>) -> Result<(), ModelError> {
        let var = self.variable_mut(id)?;
        if let Some(value) = upper.filter(|v| v.is_nan()) {
            return Err(ModelError::InvalidVariableBounds {
                lower: var.lower.unwrap_or(f64::NEG_INFINITY),
                upper: value,
            });
        }
        var.upper = upper.filter(|v| *v != f64::INFINITY);
        Ok(())
    }

    // ── Variable values ─────────────────────────────────────

    pub fn value(&self, id: VariableId) -> Result<Option<f64>, ModelError> {
        Ok(self.get_variable(id)?.value)
    }

    pub fn set_value(&mut self, id: VariableId, value: Option<f64>) -> Result<(), ModelError> {
        if let Some(value) = value.filter(|v| v.is_nan()) {
            return Err(ModelError::InvalidVariableValue { value });
        }
        let var = self.variable_mut(id)?;
        if var.is_fixed && value.is_none() {
            return Err(ModelError::FixedWithoutValue);
        }
        var.value = value;
        Ok(())
    }

    /// Fix a variable at `value`. Decomposition treats it as a constant.
    pub fn fix_variable(&mut self, id: VariableId, value: f64) -> Result<(), ModelError> {
        self.set_value(id, Some(value))?;
        self.variable_mut(id)?.is_fixed = true;
        Ok(())
    }

    /// Release a fixed variable, keeping its value.
    pub fn unfix_variable(&mut self, id: VariableId) -> Result<(), ModelError> {
        self.variable_mut(id)?.is_fixed = false;
        Ok(())
    }

    // ── Constraint activation ───────────────────────────────

    pub fn is_constraint_active(&self, id: ConstraintId) -> Result<bool, ModelError> {
        Ok(self.get_constraint(id)?.is_active)
    }

    /// Deactivate a constraint without removing it.
    pub fn deactivate_constraint(&mut self, id: ConstraintId) -> Result<(), ModelError> {
        self.constraint_mut(id)?.is_active = false;
        Ok(())
    }

    /// Activate a previously deactivated constraint.
    pub fn activate_constraint(&mut self, id: ConstraintId) -> Result<(), ModelError> {
        self.constraint_mut(id)?.is_active = true;
        Ok(())
    }
}
