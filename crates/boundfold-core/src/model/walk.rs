//! Traversal of active constraints through nested blocks.

use boundfold_expr::ids::{BlockId, ConstraintId};

use crate::model::{Model, ROOT_BLOCK};

/// Depth-first iterator over active constraints.
///
/// A block yields its own constraints before descending into its children,
/// in insertion order. Inactive blocks are skipped with everything below them.
#[derive(Debug, Clone)]
pub struct ActiveConstraints<'a> {
    model: &'a Model,
    descend_into: bool,
    pending: Vec<BlockId>,
    current: Option<(BlockId, usize)>,
}

impl<'a> Iterator for ActiveConstraints<'a> {
    type Item = ConstraintId;

    fn next(&mut self) -> Option<Self::Item> {
        let model = self.model;
        loop {
            if let Some((block_id, position)) = self.current {
                let Some(block) = model.blocks.get(block_id.index()) else {
                    self.current = None;
                    continue;
                };
                if let Some(&constraint_id) = block.constraints.get(position) {
                    self.current = Some((block_id, position + 1));
                    let active = model
                        .constraints
                        .get(constraint_id.index())
                        .is_some_and(|constraint| constraint.is_active);
                    if active {
                        return Some(constraint_id);
                    }
                    continue;
                }
                self.current = None;
                if self.descend_into {
                    self.pending.extend(block.children.iter().rev().copied());
                }
            }

            let next_block = self.pending.pop()?;
            let active = model
                .blocks
                .get(next_block.index())
                .is_some_and(|block| block.is_active);
            if active {
                self.current = Some((next_block, 0));
            }
        }
    }
}

impl Model {
    /// Iterate the active constraints reachable from the root block.
    ///
    /// With `descend_into == false` only the root block's own constraints are
    /// visited.
    pub fn active_constraints(&self, descend_into: bool) -> ActiveConstraints<'_> {
        ActiveConstraints {
            model: self,
            descend_into,
            pending: vec![ROOT_BLOCK],
            current: None,
        }
    }
}
