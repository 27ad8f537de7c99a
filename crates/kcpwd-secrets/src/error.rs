//! Error types for secret access.

use thiserror::Error;

/// Errors that can occur below the facade.
///
/// Only [`SecretError::NotFound`] is ever returned to facade callers, from
/// the injection wrapper; everything else is logged and flattened into a
/// `false` or `None` result.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Password not found for key '{0}'")]
    NotFound(String),

    #[error("Keyring error: {0}")]
    Keyring(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for secret operations.
pub type Result<T> = std::result::Result<T, SecretError>;
