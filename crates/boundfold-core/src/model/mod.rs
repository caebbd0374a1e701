//! Model module for building optimization models.
//!
//! This module provides the core [`Model`] type: registries of variables and
//! constraints addressed by stable IDs, and a tree of blocks that groups
//! constraints.
//!
//! # Module Organization
//!
//! - [`error`]: Model error types
//! - [`builder`]: Methods for adding variables, constraints, and blocks
//! - [`storage`]: Bound, value, and activation accessors
//! - [`metadata`]: Variable and constraint naming
//! - [`walk`]: Traversal of active constraints through nested blocks

mod builder;
mod error;
mod metadata;
mod storage;
mod walk;

use crate::types::{Block, Constraint, Variable};
use boundfold_expr::ids::{BlockId, ConstraintId, VariableId};
use boundfold_expr::repn::FixedValues;
use std::collections::BTreeMap;

pub use error::ModelError;
pub use walk::ActiveConstraints;

/// ID of the block every model starts with.
pub const ROOT_BLOCK: BlockId = BlockId::new(0);

/// An optimization model.
///
/// Variables and constraints live in registries owned by the model and are
/// addressed by ID. Cloning a model produces an independent deep copy.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) variables: Vec<Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) blocks: Vec<Block>,
    // Lazy-allocated metadata storage
    pub(crate) variable_names: Option<BTreeMap<VariableId, String>>,
    pub(crate) constraint_names: Option<BTreeMap<ConstraintId, String>>,
}

impl Model {
    /// Create a new model holding only the root block.
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            constraints: Vec::new(),
            blocks: vec![Block::new(String::new(), None)],
            variable_names: None,
            constraint_names: None,
        }
    }

    pub(crate) fn ensure_variable_exists(&self, id: VariableId) -> Result<(), ModelError> {
        if id.index() < self.variables.len() {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableId(id))
        }
    }

    pub(crate) fn ensure_constraint_exists(&self, id: ConstraintId) -> Result<(), ModelError> {
        if id.index() < self.constraints.len() {
            Ok(())
        } else {
            Err(ModelError::InvalidConstraintId(id))
        }
    }

    pub(crate) fn ensure_block_exists(&self, id: BlockId) -> Result<(), ModelError> {
        if id.index() < self.blocks.len() {
            Ok(())
        } else {
            Err(ModelError::InvalidBlockId(id))
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed variables act as constants during decomposition.
impl FixedValues for Model {
    fn fixed_value(&self, id: VariableId) -> Option<f64> {
        self.variables
            .get(id.index())
            .filter(|var| var.is_fixed)
            .and_then(|var| var.value)
    }
}
