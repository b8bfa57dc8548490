//! Error types for the few fallible operations in the crate.
//!
//! URL matching itself never fails: an unrecognized URL is a `None`, not an
//! error. Errors only arise when configuration is supplied as text.

use thiserror::Error;

/// A resource kind name could not be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseKindError {
    /// The name does not correspond to any resource kind.
    #[error("unknown resource kind '{name}'")]
    Unknown {
        /// The name as supplied.
        name: String,
    },
}

impl ParseKindError {
    /// Creates an unknown kind error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown { name: name.into() }
    }

    /// Returns the name that failed to parse.
    pub fn name(&self) -> &str {
        match self {
            ParseKindError::Unknown { name } => name,
        }
    }
}
