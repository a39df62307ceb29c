//! # Sketchy Core
//!
//! Core types shared by every Sketchy crate:
//! - Geometric primitives (points and the rotation used for hit-testing and resizing)
//! - RGB colors
//! - The error taxonomy for file decoding and history replay

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{Error, FormatError, Result, StateError};
pub use geometry::{rotate_point, Point};
