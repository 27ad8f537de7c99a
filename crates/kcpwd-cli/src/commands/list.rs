//! `kcpwd list`.
//!
//! The OS credential stores offer no portable way to enumerate entries for a
//! service, so this only points at the native tools.

use kcpwd_secrets::SERVICE_NAME;

use crate::Terminal;

/// Print where to browse stored keys.
pub fn run(term: &mut Terminal<'_>) -> anyhow::Result<()> {
    let out = term.out();
    for line in instructions() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn instructions() -> Vec<String> {
    vec![
        "To view all stored keys, open Keychain Access app:".to_string(),
        format!("  Search for: {SERVICE_NAME}"),
        String::new(),
        format!("Alternatively, use: security find-generic-password -s {SERVICE_NAME}"),
    ]
}

#[cfg(windows)]
fn instructions() -> Vec<String> {
    vec![
        "To view all stored keys, open Credential Manager (Windows Credentials):".to_string(),
        format!("  Look for entries containing: {SERVICE_NAME}"),
        String::new(),
        "Alternatively, use: cmdkey /list".to_string(),
    ]
}

#[cfg(not(any(target_os = "macos", windows)))]
fn instructions() -> Vec<String> {
    vec![
        "To view all stored keys, open your keyring manager (e.g. Seahorse or KWalletManager):"
            .to_string(),
        format!("  Search for: {SERVICE_NAME}"),
        String::new(),
        format!("Alternatively, use: secret-tool search --all service {SERVICE_NAME}"),
    ]
}
