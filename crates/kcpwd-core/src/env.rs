//! Environment variable handling.

use std::env;

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Split a command-line style variable into program and arguments.
///
/// Splitting is on whitespace only; quoting is not interpreted.
pub fn get_command(name: &str) -> Option<(String, Vec<String>)> {
    let value = get_var(name)?;
    let mut parts = value.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Environment variable names read by kcpwd.
pub mod vars {
    /// kcpwd home directory override.
    pub const KCPWD_HOME: &str = "KCPWD_HOME";

    /// kcpwd config file override.
    pub const KCPWD_CONFIG: &str = "KCPWD_CONFIG";

    /// Clipboard helper override, e.g. `xsel --clipboard --input`.
    pub const KCPWD_CLIPBOARD_CMD: &str = "KCPWD_CLIPBOARD_CMD";

    /// Set by Wayland compositors; selects `wl-copy` on Linux.
    pub const WAYLAND_DISPLAY: &str = "WAYLAND_DISPLAY";
}
