//! Sketchy Settings Crate
//!
//! Handles editor configuration: drawing defaults, stroke width limits and
//! the undo history limit, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::EditorSettings;
pub use error::SettingsError;
