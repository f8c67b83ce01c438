//! Error types for the GINI servers.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the GINI servers.
#[derive(Error, Debug)]
pub enum Error {
    /// A layer name outside Infrastructure, Platform and Application.
    #[error("Unrecognized layer: {value}")]
    InvalidLayer {
        /// The rejected input.
        value: String,
    },

    /// No stanza carries the requested line number.
    #[error("Stanza not found: line {line}")]
    StanzaNotFound {
        /// The requested 1-based line number.
        line: usize,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if the error was caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLayer { .. } | Self::StanzaNotFound { .. }
        )
    }

    /// Creates an invalid layer error for the given input.
    #[must_use]
    pub fn invalid_layer(value: impl Into<String>) -> Self {
        Self::InvalidLayer {
            value: value.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
