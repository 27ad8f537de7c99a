//! OS credential store backend.
//!
//! Uses the `keyring` crate, which maps to:
//! - macOS: Keychain (Security.framework generic passwords)
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use kcpwd_core::SecretString;
use tracing::debug;

use super::{validate_key, CredentialBackend};
use crate::error::{Result, SecretError};
use crate::SERVICE_NAME;

/// Credentials kept in the operating system's secure store.
///
/// Every entry is addressed by `(service, key)`; the service defaults to
/// [`SERVICE_NAME`].
#[derive(Debug, Clone)]
pub struct KeyringBackend {
    service: String,
}

impl KeyringBackend {
    /// Create a backend scoped to `service`.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// The namespace this backend writes under.
    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry> {
        validate_key(key)?;
        keyring::Entry::new(&self.service, key)
            .map_err(|e| SecretError::Keyring(format!("entry error: {e}")))
    }
}

impl Default for KeyringBackend {
    fn default() -> Self {
        Self::new(SERVICE_NAME)
    }
}

impl CredentialBackend for KeyringBackend {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(service = %self.service, key, "keyring set");
        self.entry(key)?
            .set_password(value)
            .map_err(|e| SecretError::Keyring(format!("set error: {e}")))
    }

    fn get(&self, key: &str) -> Result<Option<SecretString>> {
        debug!(service = %self.service, key, "keyring get");
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(SecretString::new(value))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretError::Keyring(format!("get error: {e}"))),
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        debug!(service = %self.service, key, "keyring delete");
        match self.entry(key)?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Err(SecretError::NotFound(key.to_string())),
            Err(e) => Err(SecretError::Keyring(format!("delete error: {e}"))),
        }
    }
}
