//! Secret access for kcpwd.
//!
//! Stores, retrieves and deletes named secrets in the operating system's
//! credential store under the fixed [`SERVICE_NAME`] namespace, optionally
//! copying a retrieved secret to the clipboard.
//!
//! ```no_run
//! use kcpwd_secrets::{get_password, require_password, set_password, Kwargs};
//!
//! assert!(set_password("dbadmin", "asd123"));
//! let password = get_password("dbadmin", false).unwrap();
//! assert_eq!(password.expose_secret(), "asd123");
//!
//! let connect = require_password("dbadmin").wrap(|host: &str, kwargs: Kwargs| {
//!     format!("{host}:{}", kwargs.expose("password").unwrap_or_default())
//! });
//! let dsn = connect.call("db.local", Kwargs::new()).unwrap();
//! ```

pub mod backend;
pub mod clipboard;
pub mod error;
pub mod inject;
pub mod store;
pub mod vault;

pub use backend::{CredentialBackend, KeyringBackend, MemoryBackend};
pub use clipboard::{copy_to_clipboard, Clipboard, CommandClipboard};
pub use error::{Result, SecretError};
pub use inject::{
    require_password, Kwargs, RequireSecret, SecretSource, SystemSource, WithSecret,
    DEFAULT_PARAM,
};
pub use kcpwd_core::SecretString;
pub use store::SecretStore;
pub use vault::{delete_password, get_password, set_password, Vault};

/// Namespace for every entry kcpwd writes to the OS credential store.
pub const SERVICE_NAME: &str = "kcpwd";
