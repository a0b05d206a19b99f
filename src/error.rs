//! Error types for the elogic front end.
//!
//! This module provides a unified error type [`ElogicError`] that covers
//! all error conditions that can occur while reading, parsing, and
//! flattening scheme descriptions.

use thiserror::Error;

/// Result type alias using [`ElogicError`].
pub type Result<T> = std::result::Result<T, ElogicError>;

/// Unified error type for all elogic operations.
#[derive(Error, Debug)]
pub enum ElogicError {
    // ============ Source Errors ============
    /// The input source could not be read; no parse is attempted
    #[error("Failed to read scheme file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ Parse Errors ============
    /// The token stream does not match the grammar. Unrecognized
    /// characters surface here too, at the point the parser next
    /// expects a specific token.
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Flatten Errors ============
    /// The scheme requested for flattening is not defined in the module
    #[error("Scheme '{name}' is not defined")]
    UndefinedScheme { name: String },

    /// An instruction binds a different number of ports than the scheme
    /// it references declares
    #[error("Instruction '{target}' in scheme '{scheme}' binds {found} {direction} port(s), expected {expected}")]
    PortCountMismatch {
        scheme: String,
        target: String,
        direction: &'static str,
        expected: usize,
        found: usize,
    },

    /// A scheme was reached again while it was still being expanded
    #[error("Recursive expansion of scheme '{name}'")]
    RecursiveScheme { name: String },
}

impl ElogicError {
    /// Create a syntax error
    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            column,
            message: message.into(),
        }
    }
}
