//! Secret injection for function calls.
//!
//! [`RequireSecret`] wraps a function so that each call receives a stored
//! secret as a named argument, unless the caller already passed one:
//!
//! ```no_run
//! use kcpwd_secrets::{require_password, Kwargs};
//!
//! let connect = require_password("dbadmin").wrap(|host: &str, kwargs: Kwargs| {
//!     format!("{host}:{}", kwargs.expose("password").unwrap_or_default())
//! });
//!
//! // resolved from the credential store
//! let dsn = connect.call("db.local", Kwargs::new())?;
//! // explicit value wins
//! let dsn = connect.call("db.local", Kwargs::new().with("password", "manual_pass"))?;
//! # Ok::<(), kcpwd_secrets::SecretError>(())
//! ```
//!
//! The secret is looked up again on every call, so a rotated value is picked
//! up without re-wrapping.

use std::collections::BTreeMap;
use std::sync::Arc;

use kcpwd_core::SecretString;
use tracing::debug;

use crate::error::{Result, SecretError};
use crate::vault::{get_password, Vault};

/// Argument name used when none is given.
pub const DEFAULT_PARAM: &str = "password";

/// Named arguments passed alongside a wrapped call.
#[derive(Debug, Clone, Default)]
pub struct Kwargs {
    values: BTreeMap<String, SecretString>,
}

impl Kwargs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SecretString>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SecretString>,
    ) -> Option<SecretString> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&SecretString> {
        self.values.get(name)
    }

    /// Plaintext of `name`, if set.
    pub fn expose(&self, name: &str) -> Option<&str> {
        self.get(name).map(SecretString::expose_secret)
    }

    pub fn remove(&mut self, name: &str) -> Option<SecretString> {
        self.values.remove(name)
    }

    /// True when `name` is set to a non-empty value.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Where injected secrets come from.
pub trait SecretSource {
    /// Look up `key` without side effects; `None` when unavailable.
    fn resolve(&self, key: &str) -> Option<SecretString>;
}

impl SecretSource for Vault {
    fn resolve(&self, key: &str) -> Option<SecretString> {
        self.get_secret(key, false)
    }
}

impl<T: SecretSource + ?Sized> SecretSource for &T {
    fn resolve(&self, key: &str) -> Option<SecretString> {
        (**self).resolve(key)
    }
}

impl<T: SecretSource + ?Sized> SecretSource for Arc<T> {
    fn resolve(&self, key: &str) -> Option<SecretString> {
        (**self).resolve(key)
    }
}

/// Resolves through the system vault, freshly built for each lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl SecretSource for SystemSource {
    fn resolve(&self, key: &str) -> Option<SecretString> {
        get_password(key, false)
    }
}

/// A secret requirement: which key to resolve and which argument receives it.
#[derive(Debug, Clone)]
pub struct RequireSecret<S> {
    source: S,
    key: String,
    param: String,
}

impl<S: SecretSource> RequireSecret<S> {
    /// Require `key` from `source`, injected as [`DEFAULT_PARAM`].
    pub fn new(source: S, key: impl Into<String>) -> Self {
        Self {
            source,
            key: key.into(),
            param: DEFAULT_PARAM.to_string(),
        }
    }

    /// Inject under `name` instead of [`DEFAULT_PARAM`].
    pub fn param_name(mut self, name: impl Into<String>) -> Self {
        self.param = name.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Wrap `inner` so each call gets the secret injected.
    pub fn wrap<F>(self, inner: F) -> WithSecret<S, F> {
        WithSecret {
            requirement: self,
            inner,
        }
    }

    /// Fill in the argument unless the caller supplied a non-empty one.
    fn inject(&self, kwargs: &mut Kwargs) -> Result<()> {
        if kwargs.has_value(&self.param) {
            debug!(key = %self.key, param = %self.param, "explicit argument supplied");
            return Ok(());
        }

        let value = self
            .source
            .resolve(&self.key)
            .ok_or_else(|| SecretError::NotFound(self.key.clone()))?;
        debug!(key = %self.key, param = %self.param, "injecting secret");
        kwargs.insert(self.param.clone(), value);
        Ok(())
    }
}

/// Require `key` from the system credential store, injected as `password`.
pub fn require_password(key: impl Into<String>) -> RequireSecret<SystemSource> {
    RequireSecret::new(SystemSource, key)
}

/// A function wrapped by [`RequireSecret::wrap`].
#[derive(Debug, Clone)]
pub struct WithSecret<S, F> {
    requirement: RequireSecret<S>,
    inner: F,
}

impl<S: SecretSource, F> WithSecret<S, F> {
    /// Call the wrapped function with positional `args` and named `kwargs`.
    ///
    /// Fails with [`SecretError::NotFound`] before running the function when
    /// the argument is missing and no secret is stored.
    pub fn call<A, R>(&self, args: A, mut kwargs: Kwargs) -> Result<R>
    where
        F: Fn(A, Kwargs) -> R,
    {
        self.requirement.inject(&mut kwargs)?;
        Ok((self.inner)(args, kwargs))
    }

    pub fn requirement(&self) -> &RequireSecret<S> {
        &self.requirement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::clipboard::Clipboard;
    use std::cell::Cell;

    struct NoClipboard;

    impl Clipboard for NoClipboard {
        fn copy(&self, _text: &str) -> bool {
            false
        }
    }

    fn test_vault() -> Vault {
        Vault::new(MemoryBackend::new(), NoClipboard)
    }

    #[test]
    fn test_injects_stored_secret() {
        let vault = test_vault();
        vault.set_secret("testkey", "testpass123");

        let wrapped = RequireSecret::new(&vault, "testkey").wrap(|arg1: &str, kwargs: Kwargs| {
            format!("{}:{}", arg1, kwargs.expose("password").unwrap_or("None"))
        });

        assert_eq!(wrapped.call("hello", Kwargs::new()).unwrap(), "hello:testpass123");
    }

    #[test]
    fn test_custom_param_name() {
        let vault = test_vault();
        vault.set_secret("testkey", "api_token_123");

        let wrapped = RequireSecret::new(&vault, "testkey")
            .param_name("api_key")
            .wrap(|arg1: &str, kwargs: Kwargs| {
                assert!(kwargs.get("password").is_none());
                format!("{}:{}", arg1, kwargs.expose("api_key").unwrap_or("None"))
            });

        assert_eq!(wrapped.requirement().param(), "api_key");
        assert_eq!(
            wrapped.call("endpoint", Kwargs::new()).unwrap(),
            "endpoint:api_token_123"
        );
    }

    #[test]
    fn test_explicit_argument_wins() {
        let vault = test_vault();
        vault.set_secret("testkey", "stored_pass");

        let wrapped = RequireSecret::new(&vault, "testkey")
            .wrap(|_: (), kwargs: Kwargs| kwargs.expose("password").map(str::to_string));

        let result = wrapped
            .call((), Kwargs::new().with("password", "manual_pass"))
            .unwrap();
        assert_eq!(result.as_deref(), Some("manual_pass"));
    }

    #[test]
    fn test_explicit_argument_skips_lookup() {
        // nothing stored: an explicit value must not trigger a lookup failure
        let vault = test_vault();
        let wrapped = RequireSecret::new(&vault, "nonexistent")
            .wrap(|_: (), kwargs: Kwargs| kwargs.expose("password").map(str::to_string));

        let result = wrapped.call((), Kwargs::new().with("password", "manual_pass"));
        assert_eq!(result.unwrap().as_deref(), Some("manual_pass"));
    }

    #[test]
    fn test_empty_argument_counts_as_missing() {
        let vault = test_vault();
        vault.set_secret("testkey", "testpass123");

        let wrapped = RequireSecret::new(&vault, "testkey")
            .wrap(|_: (), kwargs: Kwargs| kwargs.expose("password").map(str::to_string));

        let result = wrapped.call((), Kwargs::new().with("password", "")).unwrap();
        assert_eq!(result.as_deref(), Some("testpass123"));
    }

    #[test]
    fn test_missing_secret_fails_without_calling() {
        let vault = test_vault();
        let called = Cell::new(false);

        let wrapped = RequireSecret::new(&vault, "nonexistent").wrap(|_: (), _kwargs: Kwargs| {
            called.set(true);
        });

        let err = wrapped.call((), Kwargs::new()).unwrap_err();
        assert!(matches!(err, SecretError::NotFound(ref key) if key == "nonexistent"));
        assert!(err.to_string().contains("Password not found"));
        assert!(err.to_string().contains("nonexistent"));
        assert!(!called.get());
    }

    #[test]
    fn test_secret_resolved_on_every_call() {
        let vault = Arc::new(test_vault());
        vault.set_secret("rotating", "first");

        let wrapped = RequireSecret::new(Arc::clone(&vault), "rotating")
            .wrap(|_: (), kwargs: Kwargs| kwargs.expose("password").map(str::to_string));

        assert_eq!(wrapped.call((), Kwargs::new()).unwrap().as_deref(), Some("first"));

        vault.set_secret("rotating", "second");
        assert_eq!(wrapped.call((), Kwargs::new()).unwrap().as_deref(), Some("second"));

        vault.delete_secret("rotating");
        assert!(wrapped.call((), Kwargs::new()).is_err());
    }

    #[test]
    fn test_other_kwargs_pass_through() {
        let vault = test_vault();
        vault.set_secret("testkey", "testpass123");

        let wrapped = RequireSecret::new(&vault, "testkey").wrap(|_: (), kwargs: Kwargs| {
            (kwargs.len(), kwargs.expose("user").map(str::to_string))
        });

        let (len, user) = wrapped.call((), Kwargs::new().with("user", "admin")).unwrap();
        assert_eq!(len, 2);
        assert_eq!(user.as_deref(), Some("admin"));
    }

    #[test]
    fn test_require_password_defaults() {
        let requirement = require_password("dbadmin");
        assert_eq!(requirement.key(), "dbadmin");
        assert_eq!(requirement.param(), DEFAULT_PARAM);
    }

    #[test]
    fn test_kwargs_debug_is_redacted() {
        let kwargs = Kwargs::new().with("password", "hunter2");
        let debug = format!("{:?}", kwargs);
        assert!(debug.contains("password"));
        assert!(!debug.contains("hunter2"));
    }
}
