//! Undo/redo stacks of recorded commands.

use sketchy_core::StateError;

use crate::canvas::Canvas;
use crate::commands::DesignerCommand;

/// Linear undo history. Recording a new command discards everything that
/// could have been redone.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<DesignerCommand>,
    redo_stack: Vec<DesignerCommand>,
    /// Maximum undo depth; 0 means unbounded
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    /// Pushes an already-performed command.
    pub fn record(&mut self, cmd: DesignerCommand) {
        tracing::debug!("Recorded {} on object {}", cmd.name(), cmd.target());
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.limit > 0 && self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
        }
    }

    /// Reverts the most recent command. Returns `Ok(false)` when there is
    /// nothing to undo. On failure the command stays on the undo stack.
    pub fn undo(&mut self, canvas: &mut Canvas) -> Result<bool, StateError> {
        let Some(mut cmd) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if let Err(err) = cmd.undo(canvas) {
            tracing::warn!("Undo of {} failed: {}", cmd.name(), err);
            self.undo_stack.push(cmd);
            return Err(err);
        }
        tracing::debug!("Undid {}", cmd.name());
        self.redo_stack.push(cmd);
        Ok(true)
    }

    /// Replays the most recently undone command. Returns `Ok(false)` when
    /// there is nothing to redo. On failure the command stays on the redo
    /// stack.
    pub fn redo(&mut self, canvas: &mut Canvas) -> Result<bool, StateError> {
        let Some(mut cmd) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(err) = cmd.apply(canvas) {
            tracing::warn!("Redo of {} failed: {}", cmd.name(), err);
            self.redo_stack.push(cmd);
            return Err(err);
        }
        tracing::debug!("Redid {}", cmd.name());
        self.undo_stack.push(cmd);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Menu label of the command `undo` would revert.
    pub fn undo_name(&self) -> Option<&'static str> {
        self.undo_stack.last().map(DesignerCommand::name)
    }

    pub fn redo_name(&self) -> Option<&'static str> {
        self.redo_stack.last().map(DesignerCommand::name)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
