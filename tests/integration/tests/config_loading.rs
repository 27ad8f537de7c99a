//! Config loading integration tests.
//!
//! These tests verify that configuration files written on disk load back
//! into the expected values and feed the clipboard bridge.

use kcpwd_core::config::Config;
use kcpwd_secrets::{Clipboard, CommandClipboard};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_config_load_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kcpwd.json5");
    std::fs::write(&path, "").unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, Config::default());
    assert!(loaded.clipboard.command.is_none());
}

#[test]
fn test_config_modify_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kcpwd.json5");

    std::fs::write(&path, r#"{ clipboard: { command: "xclip" } }"#).unwrap();
    assert_eq!(
        Config::load(&path).unwrap().clipboard.command.as_deref(),
        Some("xclip")
    );

    std::fs::write(
        &path,
        r#"{ clipboard: { command: "xsel", args: ["--clipboard", "--input"] } }"#,
    )
    .unwrap();
    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.clipboard.command.as_deref(), Some("xsel"));
    assert_eq!(loaded.clipboard.args, vec!["--clipboard", "--input"]);
}

#[test]
fn test_config_load_nonexistent() {
    let result = Config::load(Path::new("/nonexistent/kcpwd.json5"));
    assert!(result.is_err());
    assert!(Config::load_optional(Path::new("/nonexistent/kcpwd.json5")).is_ok());
}

#[test]
fn test_config_parse_invalid() {
    let result = Config::parse("not valid json");
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_configured_clipboard_helper_receives_text() {
    if kcpwd_core::env::get_var(kcpwd_core::env::vars::KCPWD_CLIPBOARD_CMD).is_some() {
        return;
    }
    let dir = TempDir::new().unwrap();
    let sink = dir.path().join("clipboard.txt");
    let path = dir.path().join("kcpwd.json5");
    std::fs::write(
        &path,
        format!(
            r#"{{ clipboard: {{ command: "sh", args: ["-c", "cat > '{}'"] }} }}"#,
            sink.display()
        ),
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    let clipboard = CommandClipboard::from_config(&config.clipboard);
    assert!(clipboard.copy("asd123"));
    assert_eq!(std::fs::read_to_string(&sink).unwrap(), "asd123");
}
