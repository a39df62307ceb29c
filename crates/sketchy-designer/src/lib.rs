//! # Sketchy Designer
//!
//! Editor core for 2D vector drawings: rectangles, ellipses and freehand
//! curves that can be created, selected, moved, resized, rotated, filled and
//! layered, with full undo/redo and a plain token file format.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (intents: press, drag, release, keys, toolbar)
//!   ├── Canvas (object arena, display stack, shape order, selection)
//!   │     └── Shapes (rectangle, ellipse, curve)
//!   ├── History (undo/redo stacks of DesignerCommand)
//!   └── Serialization (drawing file codec)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sketchy_designer::{DesignerState, DrawingMode, Modifiers, Point};
//!
//! let mut state = DesignerState::new();
//! state.set_tool(DrawingMode::Rectangle);
//! state.on_press(Point::new(10.0, 10.0)).unwrap();
//! state.on_drag(Point::new(35.0, 25.0), Modifiers::NONE);
//! state.on_release();
//!
//! assert_eq!(state.canvas.shape_count(), 1);
//! state.undo().unwrap();
//! assert!(state.canvas.is_empty());
//! ```

pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod history;
pub mod model;
pub mod serialization;

pub use canvas::{Canvas, DrawingMode, DrawingObject, Placement};
pub use commands::DesignerCommand;
pub use designer_state::{DesignerState, Modifiers};
pub use history::History;
pub use model::{
    DesignCurve as Curve, DesignEllipse as Ellipse, DesignRectangle as Rectangle, DrawingShape,
    Shape, ShapeType,
};
pub use serialization::{DrawingFile, Record};
pub use sketchy_core::{Color, Point};
