//! End-to-end secret lifecycle through the public library API.
//!
//! Uses an in-memory backend so the OS credential store is never touched.

use kcpwd_integration_tests::memory_vault;
use kcpwd_secrets::{Kwargs, RequireSecret, SecretError};

#[test]
fn test_dbadmin_scenario() {
    let (vault, _) = memory_vault();

    assert!(vault.set_secret("dbadmin", "asd123"));
    assert_eq!(
        vault.get_secret("dbadmin", false).unwrap().expose_secret(),
        "asd123"
    );
    assert!(vault.delete_secret("dbadmin"));
    assert!(vault.get_secret("dbadmin", false).is_none());
    assert!(!vault.delete_secret("dbadmin"));
}

#[test]
fn test_get_with_clipboard() {
    let (vault, clipboard) = memory_vault();
    vault.set_secret("testkey", "testpass123");

    let value = vault.get_secret("testkey", true).unwrap();
    assert_eq!(value.expose_secret(), "testpass123");
    assert_eq!(clipboard.copied(), vec!["testpass123".to_string()]);
}

#[test]
fn test_keys_are_independent() {
    let (vault, _) = memory_vault();
    vault.set_secret("a", "1");
    vault.set_secret("b", "2");

    assert!(vault.delete_secret("a"));
    assert_eq!(vault.get_secret("b", false).unwrap().expose_secret(), "2");
}

#[test]
fn test_injection_through_vault() {
    let (vault, clipboard) = memory_vault();
    vault.set_secret("testkey", "testpass123");

    let connect = RequireSecret::new(&vault, "testkey").wrap(|arg1: &str, kwargs: Kwargs| {
        format!("{}:{}", arg1, kwargs.expose("password").unwrap_or("None"))
    });

    assert_eq!(connect.call("hello", Kwargs::new()).unwrap(), "hello:testpass123");
    assert_eq!(
        connect
            .call("hello", Kwargs::new().with("password", "manual_pass"))
            .unwrap(),
        "hello:manual_pass"
    );
    // injection never copies to the clipboard
    assert!(clipboard.copied().is_empty());
}

#[test]
fn test_injection_missing_secret() {
    let (vault, _) = memory_vault();
    let wrapped = RequireSecret::new(&vault, "nonexistent")
        .param_name("api_key")
        .wrap(|_: (), kwargs: Kwargs| kwargs.len());

    match wrapped.call((), Kwargs::new()) {
        Err(SecretError::NotFound(key)) => assert_eq!(key, "nonexistent"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
