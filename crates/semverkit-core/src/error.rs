//! Error types for the semverkit core library
//!
//! Two families live here. [`ErrorKind`] classifies a malformed identifier and
//! is always recoverable through the validation engine. [`Error`] is a hard
//! failure that an operation returns instead of a value.

use crate::fields::VersionPart;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for semverkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Text that does not match the version grammar at all
    #[error("Unparsable version '{input}': {reason}")]
    Unparsable { input: String, reason: String },

    /// A numeric part does not fit the width reserved for it in an integer code
    #[error("Build code overflow: {part} = {value} exceeds the limit of {limit}")]
    BuildCodeOverflow {
        part: VersionPart,
        value: u64,
        limit: u64,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unparsable-input error
    pub fn unparsable(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Unparsable {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Classification of a malformed identifier
///
/// The declaration order is also the reporting order within one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The identifier had no characters
    Empty,
    /// The identifier contained characters outside `[0-9A-Za-z-]`
    Invalid,
    /// A numeric pre-release identifier started with `0`
    LeadingZero,
}

impl ErrorKind {
    /// All kinds in reporting order
    pub const ALL: [ErrorKind; 3] = [ErrorKind::Empty, ErrorKind::Invalid, ErrorKind::LeadingZero];

    /// Fixed, user-facing message for this kind
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Empty => "Identifiers MUST NOT be empty.",
            ErrorKind::Invalid => {
                "Identifiers MUST comprise only ASCII alphanumerics and hyphens [0-9A-Za-z-]."
            }
            ErrorKind::LeadingZero => "Numeric identifiers MUST NOT include leading zeroes.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
