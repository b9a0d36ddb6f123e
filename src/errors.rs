//! Error types for model construction, document loading and configuration.
//!
//! Classification itself never fails: every sort answers `true` or `false`.
//! Errors only arise while building the class model a classification runs
//! against, or while reading the files that describe it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for methodsort operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A type expression that could not be parsed
    #[error("Invalid type signature '{signature}': {reason}")]
    InvalidSignature { signature: String, reason: String },

    /// A type referenced by name that the class pool does not define
    #[error("Unknown type '{0}'")]
    UnknownType(String),

    /// Two definitions for the same binary name
    #[error("Type '{0}' is defined more than once")]
    DuplicateType(String),

    /// Two methods of one type with the same erased signature
    #[error("Type '{type_name}' declares '{signature}' more than once")]
    DuplicateMethod { type_name: String, signature: String },

    /// A super class reference that cannot be a super class
    #[error("Invalid super type for '{type_name}': {reason}")]
    InvalidSuperType { type_name: String, reason: String },

    /// Parameterized reference with the wrong number of type arguments
    #[error("Type '{type_name}' declares {expected} type parameter(s) but {found} were given")]
    TypeArgumentMismatch {
        type_name: String,
        expected: usize,
        found: usize,
    },

    /// The superclass chain of a type loops back onto itself
    #[error("Cyclic inheritance involving '{0}'")]
    CyclicHierarchy(String),

    /// A sort name that does not denote any method sort
    #[error("Unknown method sort '{0}'")]
    UnknownSort(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error for an I/O failure on `path`
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create an invalid signature error
    pub fn invalid_signature(signature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSignature {
            signature: signature.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid super type error
    pub fn invalid_super_type(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSuperType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
