//! Shape operations (delete, fill, raise, lower) on the selected shape.

use sketchy_core::StateError;

use super::DesignerState;
use crate::commands::{DeleteShape, DesignerCommand, FillShape, RestackShape};
use crate::model::DrawingShape;

impl DesignerState {
    /// Deletes the selected shape. Returns `Ok(false)` when nothing is
    /// selected.
    pub fn delete_selected(&mut self) -> Result<bool, StateError> {
        let Some(id) = self.canvas.selected_id() else {
            return Ok(false);
        };
        self.end_gesture();
        let (object, placement) = self.canvas.detach(id)?;
        tracing::debug!("Deleted {} {}", object.shape_type(), id);
        self.record(DesignerCommand::Delete(DeleteShape {
            id,
            placement,
            object: Some(object),
        }));
        Ok(true)
    }

    /// Fills the selected shape with the current color. Nothing is recorded
    /// when there is no selection or the color is unchanged.
    pub fn fill_selected(&mut self) -> bool {
        let new_color = self.current_color;
        let Some(obj) = self.canvas.selected_mut() else {
            return false;
        };
        let old_color = obj.shape.color();
        if old_color == new_color {
            return false;
        }
        obj.shape.set_color(new_color);
        let id = obj.id;
        self.record(DesignerCommand::Fill(FillShape {
            id,
            old_color,
            new_color,
        }));
        true
    }

    /// Raises the selected shape one slot. Returns `Ok(false)` when nothing
    /// is selected or the shape is already on top.
    pub fn raise_selected(&mut self) -> Result<bool, StateError> {
        let Some(id) = self.canvas.selected_id() else {
            return Ok(false);
        };
        let (from, to) = self.canvas.raise(id)?;
        if from == to {
            return Ok(false);
        }
        self.record(DesignerCommand::Raise(RestackShape { id, from, to }));
        Ok(true)
    }

    /// Lowers the selected shape one slot. Returns `Ok(false)` when nothing
    /// is selected or the shape is already at the bottom.
    pub fn lower_selected(&mut self) -> Result<bool, StateError> {
        let Some(id) = self.canvas.selected_id() else {
            return Ok(false);
        };
        let (from, to) = self.canvas.lower(id)?;
        if from == to {
            return Ok(false);
        }
        self.record(DesignerCommand::Lower(RestackShape { id, from, to }));
        Ok(true)
    }
}
