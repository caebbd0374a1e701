//! Names for variables and constraints, and block paths.

use std::collections::BTreeMap;

use boundfold_expr::ids::{BlockId, ConstraintId, VariableId};

use crate::model::error::ModelError;
use crate::model::{Model, ROOT_BLOCK};

type NameTable<I> = Option<BTreeMap<I, String>>;

fn name_in<I: Ord>(table: &NameTable<I>, id: I) -> Option<&str> {
    table.as_ref()?.get(&id).map(String::as_str)
}

// Names are not unique; the lowest id wins.
fn id_named<I: Copy>(table: &NameTable<I>, name: &str) -> Option<I> {
    table
        .as_ref()?
        .iter()
        .find(|(_, candidate)| candidate.as_str() == name)
        .map(|(id, _)| *id)
}

impl Model {
    pub fn set_variable_name(&mut self, id: VariableId, name: String) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        self.variable_names
            .get_or_insert_with(BTreeMap::new)
            .insert(id, name);
        Ok(())
    }

    pub fn get_variable_name(&self, id: VariableId) -> Option<&str> {
        name_in(&self.variable_names, id)
    }

    /// First variable carrying `name`.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        id_named(&self.variable_names, name)
    }

    pub fn set_constraint_name(
        &mut self,
        id: ConstraintId,
        name: String,
    ) -> Result<(), ModelError> {
        self.ensure_constraint_exists(id)?;
        self.constraint_names
            .get_or_insert_with(BTreeMap::new)
            .insert(id, name);
        Ok(())
    }

    pub fn get_constraint_name(&self, id: ConstraintId) -> Option<&str> {
        name_in(&self.constraint_names, id)
    }

    /// First constraint carrying `name`.
    pub fn get_constraint_by_name(&self, name: &str) -> Option<ConstraintId> {
        id_named(&self.constraint_names, name)
    }

    /// Dotted path of a block from the root, e.g. `plant.unit1`.
    ///
    /// The root block's path is empty.
    pub fn block_path(&self, id: BlockId) -> Result<String, ModelError> {
        let mut segments = Vec::new();
        let mut current = id;
        while current != ROOT_BLOCK {
            let block = self.get_block(current)?;
            segments.push(block.name.as_str());
            current = block.parent.unwrap_or(ROOT_BLOCK);
        }
        segments.reverse();
        Ok(segments.join("."))
    }
}
