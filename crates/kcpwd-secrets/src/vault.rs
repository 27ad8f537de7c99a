//! Secret access facade.
//!
//! [`Vault`] is the public store/retrieve/delete surface. It composes the
//! [`SecretStore`] adapter with a [`Clipboard`]; nothing that reaches a
//! caller from here is an error, only `bool` and `Option` results.
//!
//! The free functions [`set_password`], [`get_password`] and
//! [`delete_password`] build a fresh system vault per call, so no state
//! survives between them.

use std::sync::Arc;

use kcpwd_core::{Config, SecretString};
use tracing::debug;

use crate::backend::{CredentialBackend, KeyringBackend};
use crate::clipboard::{Clipboard, CommandClipboard};
use crate::store::SecretStore;

/// Store, retrieve and delete secrets, optionally copying to the clipboard.
pub struct Vault {
    store: SecretStore,
    clipboard: Arc<dyn Clipboard>,
}

impl Vault {
    /// Build a vault from an explicit backend and clipboard.
    pub fn new(
        backend: impl CredentialBackend + 'static,
        clipboard: impl Clipboard + 'static,
    ) -> Self {
        Self {
            store: SecretStore::new(backend),
            clipboard: Arc::new(clipboard),
        }
    }

    /// OS credential store plus the clipboard helper from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            KeyringBackend::default(),
            CommandClipboard::from_config(&config.clipboard),
        )
    }

    /// OS credential store plus the clipboard helper from the default
    /// configuration file, if any.
    pub fn system() -> Self {
        Self::from_config(&Config::load_or_default())
    }

    /// Store `value` under `key`, overwriting any previous value.
    pub fn set_secret(&self, key: &str, value: &str) -> bool {
        self.store.store(key, value)
    }

    /// Retrieve the value for `key`.
    ///
    /// With `copy_to_clipboard`, a found non-empty value is also handed to
    /// the clipboard. Whether that copy worked is not reported; the value is
    /// returned either way.
    pub fn get_secret(&self, key: &str, copy_to_clipboard: bool) -> Option<SecretString> {
        let value = self.store.retrieve(key)?;

        if copy_to_clipboard && !value.is_empty() {
            let copied = self.clipboard.copy(value.expose_secret());
            debug!(key, copied, "clipboard copy attempted");
        }

        Some(value)
    }

    /// Delete the value for `key`; `false` when nothing was stored.
    pub fn delete_secret(&self, key: &str) -> bool {
        self.store.delete(key)
    }
}

/// Store a password in the OS credential store.
///
/// ```no_run
/// assert!(kcpwd_secrets::set_password("my_db", "secret123"));
/// ```
pub fn set_password(key: &str, password: &str) -> bool {
    Vault::system().set_secret(key, password)
}

/// Retrieve a password from the OS credential store, optionally copying it
/// to the clipboard.
///
/// ```no_run
/// let password = kcpwd_secrets::get_password("my_db", true);
/// // the password is now on the clipboard as well
/// ```
pub fn get_password(key: &str, copy_to_clip: bool) -> Option<SecretString> {
    Vault::system().get_secret(key, copy_to_clip)
}

/// Delete a password from the OS credential store.
pub fn delete_password(key: &str) -> bool {
    Vault::system().delete_secret(key)
}
