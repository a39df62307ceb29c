//! # Sketchy
//!
//! A 2D vector sketching editor core with support for:
//! - Rectangles, ellipses and freehand curves
//! - Selection, moving, resizing, rotating, filling and layering
//! - Full undo/redo history
//! - A plain, whitespace-delimited drawing file format
//!
//! ## Architecture
//!
//! Sketchy is organized as a workspace with multiple crates:
//!
//! 1. **sketchy-core** - Geometry, colors and the error taxonomy
//! 2. **sketchy-settings** - Editor settings (defaults, limits, persistence)
//! 3. **sketchy-designer** - Canvas, shapes, commands, history, gestures, file codec
//! 4. **sketchy** - Logging setup and a headless front end that opens a drawing

mod types;

pub use sketchy_designer as designer;

pub use sketchy_core::{Color, Error, FormatError, Point, Result, StateError};
pub use sketchy_designer::{
    Canvas, DesignerCommand, DesignerState, DrawingFile, DrawingMode, DrawingObject, History,
    Modifiers, Shape, ShapeType,
};
pub use sketchy_settings::{EditorSettings, SettingsError};
pub use types::{CliArgs, DrawingSummary, USAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output (stderr) with target, level and line numbers
/// - RUST_LOG environment variable support, `info` by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
