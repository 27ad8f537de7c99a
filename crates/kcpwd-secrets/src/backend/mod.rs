//! Credential storage backends.
//!
//! A [`CredentialBackend`] exposes the raw, fallible primitives of a
//! credential store. Error flattening happens one layer up, in
//! [`crate::store::SecretStore`].

mod keyring_store;
mod memory_store;

use std::sync::Arc;

use kcpwd_core::SecretString;

use crate::error::{Result, SecretError};

pub use keyring_store::KeyringBackend;
pub use memory_store::MemoryBackend;

/// Maximum allowed length for a key, in characters.
pub const MAX_KEY_LEN: usize = 256;

/// Fallible set/get/delete against a credential store.
pub trait CredentialBackend: Send + Sync {
    /// Store `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Read the value stored under `key`; `Ok(None)` when there is none.
    fn get(&self, key: &str) -> Result<Option<SecretString>>;

    /// Remove the value stored under `key`.
    ///
    /// Removing a key that does not exist is an error.
    fn delete(&self, key: &str) -> Result<()>;
}

impl<T: CredentialBackend + ?Sized> CredentialBackend for Arc<T> {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<SecretString>> {
        (**self).get(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

impl<T: CredentialBackend + ?Sized> CredentialBackend for Box<T> {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<SecretString>> {
        (**self).get(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

/// Validate that a key can be used as a credential account name.
///
/// Keys must be non-empty, at most [`MAX_KEY_LEN`] characters, and free of
/// control characters.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(SecretError::InvalidKey("key must not be empty".to_string()));
    }
    if key.chars().count() > MAX_KEY_LEN {
        return Err(SecretError::InvalidKey(format!(
            "key exceeds maximum length of {MAX_KEY_LEN} characters"
        )));
    }
    if key.chars().any(char::is_control) {
        return Err(SecretError::InvalidKey(
            "key must not contain control characters".to_string(),
        ));
    }
    Ok(())
}
