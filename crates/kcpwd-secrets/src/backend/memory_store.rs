use std::collections::HashMap;

use kcpwd_core::SecretString;
use parking_lot::Mutex;

use super::{validate_key, CredentialBackend};
use crate::error::{Result, SecretError};

/// Process-local credential store.
///
/// Has the same upsert and not-found semantics as the OS store, without
/// touching it. Useful for tests and for embedding kcpwd where no keychain
/// is available.
#[derive(Default)]
pub struct MemoryBackend {
    map: Mutex<HashMap<String, SecretString>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.lock().is_empty()
    }
}

impl CredentialBackend for MemoryBackend {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.map
            .lock()
            .insert(key.to_string(), SecretString::new(value));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<SecretString>> {
        validate_key(key)?;
        Ok(self.map.lock().get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.map
            .lock()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| SecretError::NotFound(key.to_string()))
    }
}
