//! Clipboard bridge.
//!
//! Hands text to an external clipboard helper (`pbcopy`, `wl-copy`, `xclip`,
//! `clip`) over stdin. This is best effort: the result only says whether the
//! helper could be run, not whether the clipboard actually changed.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Arc;

use kcpwd_core::config::ClipboardConfig;
use kcpwd_core::{env, Config};
use tracing::{debug, warn};

use crate::error::{Result, SecretError};

/// Something that can put text on the system clipboard.
pub trait Clipboard: Send + Sync {
    /// Copy `text`; `false` when the copy could not be attempted.
    fn copy(&self, text: &str) -> bool;
}

impl<T: Clipboard + ?Sized> Clipboard for Arc<T> {
    fn copy(&self, text: &str) -> bool {
        (**self).copy(text)
    }
}

/// Clipboard backed by a helper process that reads UTF-8 text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The helper for the current platform.
    pub fn platform_default() -> Self {
        let (program, args) = platform_helper();
        Self::new(program, args.iter().map(|a| a.to_string()).collect())
    }

    /// Resolve the helper: `KCPWD_CLIPBOARD_CMD`, then the configured
    /// command, then the platform default.
    pub fn from_config(config: &ClipboardConfig) -> Self {
        if let Some((program, args)) = env::get_command(env::vars::KCPWD_CLIPBOARD_CMD) {
            return Self::new(program, args);
        }
        match &config.command {
            Some(program) => Self::new(program.clone(), config.args.clone()),
            None => Self::platform_default(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the helper with `text` on stdin and wait for it to exit.
    fn run(&self, text: &str) -> Result<ExitStatus> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                SecretError::Clipboard(format!("failed to start '{}': {e}", self.program))
            })?;

        // stdin is closed when the handle drops, which lets the helper finish.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        match written {
            // the helper exited without reading all of its input
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!(program = %self.program, "clipboard helper closed stdin early");
            }
            other => other?,
        }
        Ok(status)
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> bool {
        match self.run(text) {
            Ok(status) => {
                if status.success() {
                    debug!(program = %self.program, "copied to clipboard");
                } else {
                    warn!(program = %self.program, %status, "clipboard helper exited with failure");
                }
                true
            }
            Err(e) => {
                warn!("clipboard copy failed: {e}");
                false
            }
        }
    }
}

/// Copy `text` with the configured clipboard helper.
pub fn copy_to_clipboard(text: &str) -> bool {
    CommandClipboard::from_config(&Config::load_or_default().clipboard).copy(text)
}

#[cfg(target_os = "macos")]
fn platform_helper() -> (&'static str, &'static [&'static str]) {
    ("pbcopy", &[])
}

#[cfg(windows)]
fn platform_helper() -> (&'static str, &'static [&'static str]) {
    ("clip", &[])
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_helper() -> (&'static str, &'static [&'static str]) {
    if env::get_var(env::vars::WAYLAND_DISPLAY).is_some() {
        ("wl-copy", &[])
    } else {
        ("xclip", &["-selection", "clipboard"])
    }
}
