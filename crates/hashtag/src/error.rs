//! Error types for the hashtag library
//!
//! Dictionary loading is the only fallible surface: matching and
//! segmenting are pure in-memory computations and never fail, and mutating
//! a builder after `build()` is unrepresentable because `build` consumes
//! it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for hashtag operations.
#[derive(Error, Debug)]
pub enum HashtagError {
    /// A hex dictionary line that does not decode to bytes. Loading stops
    /// at the first malformed line.
    #[error("malformed pattern at {}:{}: {}", .path.display(), .line, .reason)]
    MalformedPattern {
        /// Dictionary file containing the bad line.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A dictionary source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for hashtag operations.
pub type Result<T> = std::result::Result<T, HashtagError>;
