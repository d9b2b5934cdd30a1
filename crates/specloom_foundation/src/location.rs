//! Source location tracking.
//!
//! `Location` records where a sentence came from in its specification
//! document, for error reporting.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The source position of a sentence node.
///
/// Every diagnostic produced by recognition or validation carries the
/// location of the sentence it refers to.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// Path of the document the sentence came from, when known.
    pub file_path: Option<String>,
}

impl Location {
    /// Creates a location without a file path.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            file_path: None,
        }
    }

    /// Sets the file path.
    #[must_use]
    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.file_path {
            write!(f, "{path}:")?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}
