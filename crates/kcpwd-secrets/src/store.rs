//! Secret store adapter.
//!
//! [`SecretStore`] sits on top of a [`CredentialBackend`] and turns every
//! backend failure into a plain negative result. Callers learn whether an
//! operation worked and nothing else: a permission error, a locked keychain
//! and a missing entry all look the same from here up.

use kcpwd_core::SecretString;
use tracing::{debug, warn};

use crate::backend::{CredentialBackend, KeyringBackend};

/// Store/retrieve/delete with errors flattened to `bool` / `Option`.
pub struct SecretStore {
    backend: Box<dyn CredentialBackend>,
}

impl SecretStore {
    /// Wrap an arbitrary backend.
    pub fn new(backend: impl CredentialBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Adapter over the OS credential store under [`crate::SERVICE_NAME`].
    pub fn keyring() -> Self {
        Self::new(KeyringBackend::default())
    }

    /// Write or overwrite the value for `key`.
    pub fn store(&self, key: &str, value: &str) -> bool {
        match self.backend.set(key, value) {
            Ok(()) => {
                debug!(key, "secret stored");
                true
            }
            Err(e) => {
                warn!(key, "failed to store secret: {e}");
                false
            }
        }
    }

    /// Read the value for `key`.
    ///
    /// Returns `None` both when the key does not exist and when the backend
    /// failed.
    pub fn retrieve(&self, key: &str) -> Option<SecretString> {
        match self.backend.get(key) {
            Ok(Some(value)) => {
                debug!(key, "secret retrieved");
                Some(value)
            }
            Ok(None) => {
                debug!(key, "no secret stored");
                None
            }
            Err(e) => {
                warn!(key, "failed to retrieve secret: {e}");
                None
            }
        }
    }

    /// Delete the value for `key`.
    ///
    /// Returns `false` without touching the backend when nothing is stored.
    /// The existence check and the delete are separate backend calls, so a
    /// concurrent delete in between also ends up as `false`.
    pub fn delete(&self, key: &str) -> bool {
        if self.retrieve(key).is_none() {
            return false;
        }

        match self.backend.delete(key) {
            Ok(()) => {
                debug!(key, "secret deleted");
                true
            }
            Err(e) => {
                warn!(key, "failed to delete secret: {e}");
                false
            }
        }
    }
}
