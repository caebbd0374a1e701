//! Model builder methods for adding variables, constraints, and blocks.

use crate::types::{Block, Constraint, Variable};
use boundfold_expr::expr::RangedExpr;
use boundfold_expr::ids::{BlockId, ConstraintId, VariableId};

use crate::model::error::ModelError;
use crate::model::{Model, ROOT_BLOCK};

impl Model {
    /// Add a variable to the model.
    ///
    /// Infinite bounds are stored as absent. A fixed variable must carry a
    /// value.
    pub fn add_variable(&mut self, variable: Variable) -> Result<VariableId, ModelError> {
        let lower = variable.lower.filter(|v| !v.is_infinite());
        let upper = variable.upper.filter(|v| !v.is_infinite());
        let crossed = matches!((lower, upper), (Some(l), Some(u)) if l > u);
        if lower.is_some_and(f64::is_nan) || upper.is_some_and(f64::is_nan) || crossed {
            return Err(ModelError::InvalidVariableBounds {
                lower: lower.unwrap_or(f64::NEG_INFINITY),
                upper: upper.unwrap_or(f64::INFINITY),
            });
        }
        if let Some(value) = variable.value.filter(|v| v.is_nan()) {
            return Err(ModelError::InvalidVariableValue { value });
        }
        if variable.is_fixed && variable.value.is_none() {
            return Err(ModelError::FixedWithoutValue);
        }

        let id = VariableId::new(self.variables.len() as u32);
        self.variables.push(Variable {
            lower,
            upper,
            ..variable
        });

        Ok(id)
    }

    /// Add a constraint to the root block.
    pub fn add_constraint(
        &mut self,
        constraint: RangedExpr,
    ) -> Result<ConstraintId, ModelError> {
        self.add_constraint_to(ROOT_BLOCK, constraint)
    }

    /// Add a constraint to the given block.
    ///
    /// Every variable referenced by the body must already exist.
    pub fn add_constraint_to(
        &mut self,
        block: BlockId,
        constraint: RangedExpr,
    ) -> Result<ConstraintId, ModelError> {
        self.ensure_block_exists(block)?;
        let lower = constraint.lower();
        let upper = constraint.upper();
        let crossed = matches!((lower, upper), (Some(l), Some(u)) if l > u);
        if lower.is_some_and(f64::is_nan) || upper.is_some_and(f64::is_nan) || crossed {
            return Err(ModelError::InvalidConstraintBounds {
                lower: lower.unwrap_or(f64::NEG_INFINITY),
                upper: upper.unwrap_or(f64::INFINITY),
            });
        }
        for var_id in constraint.body().variables() {
            self.ensure_variable_exists(var_id)?;
        }

        let id = ConstraintId::new(self.constraints.len() as u32);
        self.constraints.push(Constraint::from(constraint));
        self.blocks[block.index()].constraints.push(id);

        Ok(id)
    }

    /// Add a named child block under `parent`.
    pub fn add_block(&mut self, parent: BlockId, name: &str) -> Result<BlockId, ModelError> {
        self.ensure_block_exists(parent)?;
        let taken = self.blocks[parent.index()]
            .children
            .iter()
            .any(|child| self.blocks[child.index()].name == name);
        if taken {
            return Err(ModelError::DuplicateBlockName {
                name: name.to_string(),
            });
        }

        let id = BlockId::new(self.blocks.len() as u32);
        self.blocks.push(Block::new(name.to_string(), Some(parent)));
        self.blocks[parent.index()].children.push(id);

        tracing::debug!(
            component = "model",
            operation = "add_block",
            status = "success",
            block_id = id.inner(),
            parent_id = parent.inner(),
            name,
            "Added block"
        );
        Ok(id)
    }

    /// Deactivate a block. Its constraints and sub-blocks are skipped by
    /// active traversals but keep their own flags.
    pub fn deactivate_block(&mut self, id: BlockId) -> Result<(), ModelError> {
        self.ensure_block_exists(id)?;
        self.blocks[id.index()].is_active = false;
        Ok(())
    }

    /// Activate a previously deactivated block.
    pub fn activate_block(&mut self, id: BlockId) -> Result<(), ModelError> {
        self.ensure_block_exists(id)?;
        self.blocks[id.index()].is_active = true;
        Ok(())
    }
}
