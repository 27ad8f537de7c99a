//! Shared fixtures for the kcpwd integration tests.

use std::sync::Arc;

use kcpwd_secrets::{Clipboard, MemoryBackend, Vault};
use parking_lot::Mutex;

/// Clipboard stub that remembers every copied value.
#[derive(Default)]
pub struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> bool {
        self.copied.lock().push(text.to_string());
        true
    }
}

/// A vault over an in-memory store, plus a handle on what it copied.
pub fn memory_vault() -> (Vault, Arc<RecordingClipboard>) {
    let clipboard = Arc::new(RecordingClipboard::default());
    let vault = Vault::new(MemoryBackend::new(), Arc::clone(&clipboard));
    (vault, clipboard)
}
