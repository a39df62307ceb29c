//! Error handling for Sketchy
//!
//! Two failure families exist in the editor core:
//! - Format errors, raised while decoding a drawing file
//! - State errors, raised when a recorded command no longer fits the canvas
//!   it is replayed on (the shape list / display stack invariant was broken)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drawing file decoding error.
///
/// `record` is the zero-based index of the record being decoded and `field`
/// names the value that could not be read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The stream ended in the middle of a record
    #[error("Unexpected end of data in record {record} while reading {field}")]
    UnexpectedEnd {
        /// The record being decoded.
        record: usize,
        /// The field that was expected next.
        field: &'static str,
    },

    /// A numeric field could not be parsed
    #[error("Invalid {field} in record {record}: '{token}'")]
    InvalidNumber {
        /// The record being decoded.
        record: usize,
        /// The field that failed to parse.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// A color channel is outside 0..=255
    #[error("Color channel {field} out of range in record {record}: {value}")]
    ChannelOutOfRange {
        /// The record being decoded.
        record: usize,
        /// The channel name.
        field: &'static str,
        /// The decoded value.
        value: i64,
    },

    /// A curve announced a negative or odd number of coordinates
    #[error("Invalid coordinate count {count} in record {record}")]
    InvalidCoordinateCount {
        /// The record being decoded.
        record: usize,
        /// The announced count.
        count: i64,
    },
}

/// Canvas state violation detected while replaying history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// No object with this id is on the canvas
    #[error("Object {id} is not on the canvas")]
    UnknownObject {
        /// The object id.
        id: u64,
    },

    /// The object is already on the canvas
    #[error("Object {id} is already on the canvas")]
    AlreadyAttached {
        /// The object id.
        id: u64,
    },

    /// A command expected to hold a detached object but holds none
    #[error("No detached object stored for {id}")]
    MissingObject {
        /// The object id.
        id: u64,
    },

    /// A captured index does not fit the current list
    #[error("Index {index} out of bounds for {view} of length {len} (object {id})")]
    IndexOutOfBounds {
        /// The object id.
        id: u64,
        /// Which ordering the index refers to.
        view: &'static str,
        /// The captured index.
        index: usize,
        /// The current length of the ordering.
        len: usize,
    },

    /// A curve was given a shape-list position, or a shape was not
    #[error("Placement kind does not match object {id}")]
    PlacementMismatch {
        /// The object id.
        id: u64,
    },

    /// The shape list, display stack and object arena disagree
    #[error("Canvas inconsistency: {reason}")]
    Inconsistent {
        /// Description of the violated invariant.
        reason: String,
    },
}

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Drawing file format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// History replay error
    #[error(transparent)]
    State(#[from] StateError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a file format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if this is a state error
    pub fn is_state_error(&self) -> bool {
        matches!(self, Error::State(_))
    }
}

/// Result type for Sketchy operations
pub type Result<T> = std::result::Result<T, Error>;
