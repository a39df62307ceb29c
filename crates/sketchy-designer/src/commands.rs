//! Undoable editor actions.
//!
//! A command is recorded after its action has already happened on the
//! canvas, so `apply` is only ever called for a redo. Each command carries the
//! ids, placements and before/after values needed to replay itself in both
//! directions through the canvas' own mutation methods.

use sketchy_core::{Color, Point, StateError};

use crate::canvas::{Canvas, DrawingObject, Placement};
use crate::model::DrawingShape;

#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    CreateShape(InsertObject),
    DrawCurve(InsertObject),
    Delete(DeleteShape),
    Fill(FillShape),
    Move(MoveShape),
    Resize(ResizeShape),
    Rotate(RotateShape),
    Raise(RestackShape),
    Lower(RestackShape),
}

/// A shape or curve that was added to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertObject {
    pub id: u64,
    pub placement: Placement,
    pub object: Option<DrawingObject>, // None while on the canvas, Some when undone
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteShape {
    pub id: u64,
    pub placement: Placement,
    pub object: Option<DrawingObject>, // Some while deleted, None when undone
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillShape {
    pub id: u64,
    pub old_color: Color,
    pub new_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveShape {
    pub id: u64,
    pub old_center: Point,
    pub new_center: Point,
}

/// Width and height before and after, as `(width, height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeShape {
    pub id: u64,
    pub old_size: (f64, f64),
    pub new_size: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RotateShape {
    pub id: u64,
    pub old_angle: f64,
    pub new_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestackShape {
    pub id: u64,
    pub from: Placement,
    pub to: Placement,
}

impl InsertObject {
    /// Captures an object that is currently on `canvas`.
    pub fn on_canvas(canvas: &Canvas, id: u64) -> Result<Self, StateError> {
        let placement = canvas
            .placement(id)
            .ok_or(StateError::UnknownObject { id })?;
        Ok(Self {
            id,
            placement,
            object: None,
        })
    }
}

impl DesignerCommand {
    /// Replays the command forward.
    pub fn apply(&mut self, canvas: &mut Canvas) -> Result<(), StateError> {
        match self {
            DesignerCommand::CreateShape(cmd) | DesignerCommand::DrawCurve(cmd) => {
                reattach(canvas, cmd.id, cmd.placement, &mut cmd.object)
            }
            DesignerCommand::Delete(cmd) => {
                stash(canvas, cmd.id, &mut cmd.placement, &mut cmd.object)
            }
            DesignerCommand::Fill(cmd) => {
                canvas.object_mut(cmd.id)?.shape.set_color(cmd.new_color);
                Ok(())
            }
            DesignerCommand::Move(cmd) => {
                canvas.object_mut(cmd.id)?.shape.set_center(cmd.new_center);
                Ok(())
            }
            DesignerCommand::Resize(cmd) => {
                set_size(canvas.object_mut(cmd.id)?, cmd.new_size);
                Ok(())
            }
            DesignerCommand::Rotate(cmd) => {
                canvas.object_mut(cmd.id)?.shape.set_angle(cmd.new_angle);
                Ok(())
            }
            DesignerCommand::Raise(cmd) | DesignerCommand::Lower(cmd) => {
                canvas.move_to(cmd.id, cmd.to)
            }
        }
    }

    /// Reverts the command.
    pub fn undo(&mut self, canvas: &mut Canvas) -> Result<(), StateError> {
        match self {
            DesignerCommand::CreateShape(cmd) | DesignerCommand::DrawCurve(cmd) => {
                stash(canvas, cmd.id, &mut cmd.placement, &mut cmd.object)
            }
            DesignerCommand::Delete(cmd) => {
                reattach(canvas, cmd.id, cmd.placement, &mut cmd.object)
            }
            DesignerCommand::Fill(cmd) => {
                canvas.object_mut(cmd.id)?.shape.set_color(cmd.old_color);
                Ok(())
            }
            DesignerCommand::Move(cmd) => {
                canvas.object_mut(cmd.id)?.shape.set_center(cmd.old_center);
                Ok(())
            }
            DesignerCommand::Resize(cmd) => {
                set_size(canvas.object_mut(cmd.id)?, cmd.old_size);
                Ok(())
            }
            DesignerCommand::Rotate(cmd) => {
                canvas.object_mut(cmd.id)?.shape.set_angle(cmd.old_angle);
                Ok(())
            }
            DesignerCommand::Raise(cmd) | DesignerCommand::Lower(cmd) => {
                canvas.move_to(cmd.id, cmd.from)
            }
        }
    }

    /// Id of the object the command acts on.
    pub fn target(&self) -> u64 {
        match self {
            DesignerCommand::CreateShape(cmd) | DesignerCommand::DrawCurve(cmd) => cmd.id,
            DesignerCommand::Delete(cmd) => cmd.id,
            DesignerCommand::Fill(cmd) => cmd.id,
            DesignerCommand::Move(cmd) => cmd.id,
            DesignerCommand::Resize(cmd) => cmd.id,
            DesignerCommand::Rotate(cmd) => cmd.id,
            DesignerCommand::Raise(cmd) | DesignerCommand::Lower(cmd) => cmd.id,
        }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            DesignerCommand::CreateShape(_) => "Create Shape",
            DesignerCommand::DrawCurve(_) => "Draw Curve",
            DesignerCommand::Delete(_) => "Delete",
            DesignerCommand::Fill(_) => "Fill",
            DesignerCommand::Move(_) => "Move",
            DesignerCommand::Resize(_) => "Resize",
            DesignerCommand::Rotate(_) => "Rotate",
            DesignerCommand::Raise(_) => "Raise",
            DesignerCommand::Lower(_) => "Lower",
        }
    }
}

fn set_size(object: &mut DrawingObject, (width, height): (f64, f64)) {
    object.shape.set_width(width);
    object.shape.set_height(height);
}

/// Puts the stored object back at `placement`. The slot is only emptied once
/// the canvas has accepted the placement.
fn reattach(
    canvas: &mut Canvas,
    id: u64,
    placement: Placement,
    slot: &mut Option<DrawingObject>,
) -> Result<(), StateError> {
    let object = slot.as_ref().ok_or(StateError::MissingObject { id })?;
    canvas.check_attach(object, placement)?;
    let object = slot.take().ok_or(StateError::MissingObject { id })?;
    canvas.attach(object, placement)
}

/// Takes the object off the canvas into `slot`, remembering where it sat.
fn stash(
    canvas: &mut Canvas,
    id: u64,
    placement: &mut Placement,
    slot: &mut Option<DrawingObject>,
) -> Result<(), StateError> {
    if slot.is_some() {
        return Err(StateError::Inconsistent {
            reason: format!("command already holds a detached copy of {id}"),
        });
    }
    let (object, detached_from) = canvas.detach(id)?;
    *placement = detached_from;
    *slot = Some(object);
    Ok(())
}
