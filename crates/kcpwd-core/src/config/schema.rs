//! Configuration schema definitions.

use serde::Deserialize;

/// Main kcpwd configuration.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Clipboard helper settings.
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Clipboard helper configuration.
///
/// When `command` is unset the platform default helper is used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClipboardConfig {
    /// Program that reads text on stdin and places it on the clipboard.
    #[serde(default)]
    pub command: Option<String>,

    /// Arguments passed to `command`.
    #[serde(default)]
    pub args: Vec<String>,
}
