//! Designer state manager for UI integration.
//! Owns the canvas and the history and turns pointer, keyboard and toolbar
//! intents into canvas mutations plus recorded commands.
//!
//! This module is split into submodules:
//! - `gesture`: Press/drag/release state machine
//! - `shapes`: Delete, fill and layering of the selected shape
//! - `file_io`: Save/load operations

mod file_io;
mod gesture;
mod shapes;

use std::path::PathBuf;

use sketchy_core::{Color, Point, StateError};
use sketchy_settings::EditorSettings;

use crate::canvas::{Canvas, DrawingMode};
use crate::commands::DesignerCommand;
use crate::history::History;

pub(crate) use gesture::GestureSnapshot;

/// Modifier keys held during a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Turn the selected shape around its center
    pub rotate: bool,
    /// Resize the selected shape about its center
    pub resize: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        rotate: false,
        resize: false,
    };
    pub const ROTATE: Modifiers = Modifiers {
        rotate: true,
        resize: false,
    };
    pub const RESIZE: Modifiers = Modifiers {
        rotate: false,
        resize: true,
    };
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub history: History,
    /// Fill color for new shapes and stroke color for new curves
    pub current_color: Color,
    stroke_width: f64,
    settings: EditorSettings,
    /// Curve being drawn by the pen tool
    active_curve: Option<u64>,
    prev_pointer: Option<Point>,
    snapshot: Option<GestureSnapshot>,
    moved: bool,
    resized: bool,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            canvas: Canvas::new(),
            history: History::new(settings.history_limit),
            current_color: settings.default_color,
            stroke_width: settings.clamp_stroke_width(settings.default_stroke_width),
            settings,
            active_curve: None,
            prev_pointer: None,
            snapshot: None,
            moved: false,
            resized: false,
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Chooses the active tool. Any gesture in progress is abandoned.
    pub fn set_tool(&mut self, mode: DrawingMode) {
        tracing::debug!("Tool set to {:?}", mode);
        self.canvas.set_mode(mode);
        self.active_curve = None;
    }

    pub fn tool(&self) -> Option<DrawingMode> {
        self.canvas.mode()
    }

    /// Sets the color used by the next shape, curve or fill.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Sets the stroke width for new curves, clamped into the configured
    /// range. Returns the width actually applied.
    pub fn set_stroke_width(&mut self, width: f64) -> f64 {
        let clamped = if width.is_nan() {
            self.settings.default_stroke_width
        } else {
            self.settings.clamp_stroke_width(width)
        };
        if clamped != width {
            tracing::warn!(
                "Stroke width {} outside {}..={}, using {}",
                width,
                self.settings.min_stroke_width,
                self.settings.max_stroke_width,
                clamped
            );
        }
        self.stroke_width = clamped;
        clamped
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Pushes a command that has already been performed on the canvas.
    pub(crate) fn record(&mut self, cmd: DesignerCommand) {
        self.history.record(cmd);
        self.is_modified = true;
    }

    /// Undo last change. Returns `Ok(false)` when there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, StateError> {
        self.end_gesture();
        let undone = self.history.undo(&mut self.canvas)?;
        if undone {
            self.is_modified = true;
        }
        Ok(undone)
    }

    /// Redo last undo. Returns `Ok(false)` when there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool, StateError> {
        self.end_gesture();
        let redone = self.history.redo(&mut self.canvas)?;
        if redone {
            self.is_modified = true;
        }
        Ok(redone)
    }

    /// Keyboard shortcuts: Ctrl+Z undoes, Ctrl+Y redoes. Returns whether the
    /// key was handled.
    pub fn on_key(&mut self, key: char, ctrl: bool) -> Result<bool, StateError> {
        if !ctrl {
            return Ok(false);
        }
        match key.to_ascii_lowercase() {
            'z' => self.undo().map(|_| true),
            'y' => self.redo().map(|_| true),
            _ => Ok(false),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Wipes the canvas and both history stacks. The tool is kept.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.history.clear();
        self.end_gesture();
        self.current_file_path = None;
        self.is_modified = false;
    }

    fn end_gesture(&mut self) {
        self.active_curve = None;
        self.snapshot = None;
        self.moved = false;
        self.resized = false;
    }
}
