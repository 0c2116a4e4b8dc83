//! Error types for sequence detection and formatting

use thiserror::Error;

/// Errors raised by the sequence engine
///
/// None of these are fatal to a scan: aggregation excludes the offending
/// item and keeps going, while formatting and parsing calls fail
/// all-or-nothing and leave their inputs untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// A frame number is already present in the sequence
    #[error("duplicate member: frame {frame} is already in the sequence")]
    DuplicateMember {
        /// The frame number that is already present
        frame: u64,
    },

    /// Strict padding is enabled and the item's digit width disagrees
    #[error("padding conflict: sequence pad is {expected}, item pad is {found}")]
    PaddingConflict {
        /// The pad width established by the sequence
        expected: usize,
        /// The pad width carried by the incoming item
        found: usize,
    },

    /// The item does not share the sequence's head/tail pair
    #[error("item '{name}' is not a member of this sequence")]
    NotSibling {
        /// The base name of the rejected item
        name: String,
    },

    /// A format template contains an unrecognized directive
    #[error("bad directive: %{directive}")]
    UnknownDirective {
        /// The directive character that was not recognized
        directive: char,
    },

    /// A formatted string does not align with its template
    #[error("format mismatch: {reason}")]
    FormatMismatch {
        /// Why the string could not be aligned
        reason: String,
    },

    /// A range list contains a token that is not an integer or `start-end`
    #[error("invalid range token: '{token}'")]
    InvalidRangeToken {
        /// The offending token
        token: String,
    },

    /// A user-supplied frame pattern failed to compile
    #[error("invalid frame pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A range separator that would be ambiguous to parse
    #[error("invalid range separator: '{separator}'")]
    InvalidSeparator {
        /// The rejected separator string
        separator: String,
    },

    /// Reindexing would move a frame below zero
    #[error("reindex underflow: frame {frame} with offset {offset}")]
    FrameUnderflow {
        /// The frame that would underflow
        frame: u64,
        /// The offset that was applied
        offset: i64,
    },
}

/// Result type for sequence engine operations
pub type Result<T> = std::result::Result<T, Error>;
