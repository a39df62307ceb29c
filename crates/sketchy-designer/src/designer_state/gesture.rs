//! Pointer gesture handling: press, drag and release.
//!
//! A press captures a snapshot of the selected shape; the release compares
//! the shape against it and records at most one move, or a rotate and/or a
//! resize.

use sketchy_core::{Point, StateError};

use super::{DesignerState, Modifiers};
use crate::canvas::{Canvas, DrawingMode};
use crate::commands::{DesignerCommand, InsertObject, MoveShape, ResizeShape, RotateShape};
use crate::model::DrawingShape;

/// Geometry of the selected shape when the gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GestureSnapshot {
    pub id: u64,
    pub center: Point,
    pub angle: f64,
    pub width: f64,
    pub height: f64,
}

impl GestureSnapshot {
    fn capture(canvas: &Canvas) -> Option<Self> {
        canvas.selected().map(|obj| Self {
            id: obj.id,
            center: obj.shape.center(),
            angle: obj.shape.angle(),
            width: obj.shape.width(),
            height: obj.shape.height(),
        })
    }
}

impl DesignerState {
    /// Pointer pressed at `point`.
    ///
    /// Select hit-tests and transfers or clears the selection. Pen starts a
    /// curve. Rectangle and Ellipse create a zero-size shape under the
    /// pointer and select it. With no tool chosen only the pointer position
    /// is remembered.
    pub fn on_press(&mut self, point: Point) -> Result<(), StateError> {
        match self.canvas.mode() {
            Some(DrawingMode::Select) => match self.canvas.hit_test(point) {
                Some(id) => {
                    self.canvas.select(id);
                }
                None => self.canvas.deselect(),
            },
            Some(DrawingMode::Pen) => {
                self.canvas.deselect();
                let id = self
                    .canvas
                    .add_curve(point, self.current_color, self.stroke_width);
                self.active_curve = Some(id);
                let cmd = InsertObject::on_canvas(&self.canvas, id)?;
                self.record(DesignerCommand::DrawCurve(cmd));
            }
            Some(mode @ (DrawingMode::Rectangle | DrawingMode::Ellipse)) => {
                let id = if mode == DrawingMode::Rectangle {
                    self.canvas.add_rectangle(point, self.current_color)
                } else {
                    self.canvas.add_ellipse(point, self.current_color)
                };
                self.canvas.select(id);
                let cmd = InsertObject::on_canvas(&self.canvas, id)?;
                self.record(DesignerCommand::CreateShape(cmd));
            }
            None => {}
        }

        self.prev_pointer = Some(point);
        self.snapshot = GestureSnapshot::capture(&self.canvas);
        self.moved = false;
        self.resized = false;
        Ok(())
    }

    /// Pointer dragged to `point`.
    ///
    /// In Select mode the selected shape follows the pointer; the rotate
    /// modifier turns it instead and takes precedence over the resize
    /// modifier.
    pub fn on_drag(&mut self, point: Point, modifiers: Modifiers) {
        let prev = self.prev_pointer.unwrap_or(point);

        match self.canvas.mode() {
            Some(DrawingMode::Pen) => {
                if let Some(id) = self.active_curve {
                    self.canvas.extend_curve(id, point);
                }
            }
            Some(DrawingMode::Rectangle | DrawingMode::Ellipse) => {
                if let Some(obj) = self.canvas.selected_mut() {
                    obj.shape.resize(point);
                }
            }
            Some(DrawingMode::Select) | None => {
                if let Some(obj) = self.canvas.selected_mut() {
                    if modifiers.rotate {
                        obj.shape.rotate(point, prev);
                        self.moved = false;
                    } else if modifiers.resize {
                        obj.shape.resize(point);
                        self.resized = true;
                        self.moved = false;
                    } else {
                        obj.shape.translate(point, prev);
                        self.moved = true;
                    }
                }
            }
        }

        self.prev_pointer = Some(point);
    }

    /// Pointer released. Records what the gesture did to the selected shape.
    pub fn on_release(&mut self) {
        self.active_curve = None;
        let moved = std::mem::take(&mut self.moved);
        let resized = std::mem::take(&mut self.resized);
        let Some(mut snapshot) = self.snapshot.take() else {
            return;
        };
        let Some(obj) = self.canvas.get_shape(snapshot.id) else {
            return;
        };
        let shape = &obj.shape;

        // The creation drag belongs to the create command.
        if self.canvas.mode().is_some_and(|mode| mode.creates_shape()) {
            snapshot.width = shape.width();
            snapshot.height = shape.height();
        }

        let center = shape.center();
        let angle = shape.angle();
        let size = (shape.width(), shape.height());
        let id = snapshot.id;

        if center != snapshot.center && moved {
            self.record(DesignerCommand::Move(MoveShape {
                id,
                old_center: snapshot.center,
                new_center: center,
            }));
            return;
        }
        if angle != snapshot.angle {
            self.record(DesignerCommand::Rotate(RotateShape {
                id,
                old_angle: snapshot.angle,
                new_angle: angle,
            }));
        }
        if size != (snapshot.width, snapshot.height) && resized {
            self.record(DesignerCommand::Resize(ResizeShape {
                id,
                old_size: (snapshot.width, snapshot.height),
                new_size: size,
            }));
        }
    }
}
