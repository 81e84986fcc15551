//! Overwrite/clear semantics of the password store

use std::sync::Arc;

use xl_accounts::{
    AccountIdentity, KeyringBackend, MemoryBackend, SecretAddress, SecretBackend, SecretError,
    SecretStore,
};

fn store() -> SecretStore<MemoryBackend> {
    SecretStore::with_backend(MemoryBackend::new())
}

#[test]
fn test_round_trip() {
    let store = store();
    store.set("player", Some("p")).unwrap();

    let password = store.get("player").unwrap().unwrap();
    assert_eq!(password.expose_secret(), "p");
}

#[test]
fn test_get_missing_is_none() {
    let store = store();
    assert!(store.get("nobody").unwrap().is_none());
}

#[test]
fn test_overwrite_keeps_latest() {
    let store = store();
    store.set("player", Some("first")).unwrap();
    store.set("player", Some("second")).unwrap();

    assert_eq!(store.get("player").unwrap().unwrap().expose_secret(), "second");
    assert_eq!(store.backend().len(), 1);
}

#[test]
fn test_set_without_prior_entry() {
    let store = store();
    assert!(store.set("fresh", Some("secret")).is_ok());
}

#[test]
fn test_empty_secret_clears() {
    let store = store();
    store.set("player", Some("p")).unwrap();
    store.set("player", Some("")).unwrap();
    assert!(store.get("player").unwrap().is_none());

    store.set("player", Some("p")).unwrap();
    store.set("player", None).unwrap();
    assert!(store.get("player").unwrap().is_none());
    assert!(store.backend().is_empty());
}

#[test]
fn test_clear_missing_is_fine() {
    let store = store();
    assert!(store.clear("nobody").is_ok());
}

#[test]
fn test_delete_failure_propagates() {
    let store = store();
    store.set("player", Some("old")).unwrap();
    store.backend().deny_deletes(true);

    let err = store.set("player", Some("new")).unwrap_err();
    assert!(matches!(err, SecretError::Failure { .. }));
    // Nothing was overwritten
    assert_eq!(store.get("player").unwrap().unwrap().expose_secret(), "old");
}

#[test]
fn test_write_failure_propagates() {
    let store = store();
    store.backend().deny_writes(true);
    assert!(store.set("player", Some("secret")).is_err());
    assert!(store.get("player").unwrap().is_none());
}

#[test]
fn test_errors_never_contain_secret() {
    let store = store();
    store.set("player", Some("hunter2")).unwrap();
    store.backend().deny_deletes(true);

    let err = store.set("player", Some("hunter3")).unwrap_err();
    let message = format!("{err} {err:?}");
    assert!(message.contains("player"));
    assert!(!message.contains("hunter2"));
    assert!(!message.contains("hunter3"));
}

#[test]
fn test_password_debug_is_redacted() {
    let store = store();
    store.set("player", Some("hunter2")).unwrap();
    let password = store.get("player").unwrap().unwrap();

    let debug_output = format!("{password:?}");
    assert!(!debug_output.contains("hunter2"));
    assert!(debug_output.contains("<redacted>"));
}

#[test]
fn test_addresses_are_separate() {
    let backend = Arc::new(MemoryBackend::new());
    let other = SecretAddress {
        package: "com.example.other".to_owned(),
        service: "SEID".to_owned(),
    };
    let launcher = SecretStore::with_backend(Arc::clone(&backend));
    let other_store = SecretStore::new(Arc::clone(&backend), other.clone());

    launcher.set("player", Some("p")).unwrap();
    assert!(other_store.get("player").unwrap().is_none());

    other_store.set("player", Some("q")).unwrap();
    assert_eq!(backend.len(), 2);
    assert_eq!(launcher.get("player").unwrap().unwrap().expose_secret(), "p");
    assert_eq!(other.to_string(), "com.example.other/SEID");
}

#[test]
fn test_secret_survives_flag_changes() {
    let store = store();
    let mut account = AccountIdentity::new("Player");
    account.set_password(&store, Some("p")).unwrap();

    account.set_use_otp(true);
    account.set_use_steam_service_account(true);

    let password = account.password(&store).unwrap().unwrap();
    assert_eq!(password.expose_secret(), "p");
    // Keyed by the lower-cased user name
    assert!(store.get("player").unwrap().is_some());
}

#[test]
fn test_account_password_cleared() {
    let store = store();
    let account = AccountIdentity::new("player");
    account.set_password(&store, Some("p")).unwrap();
    account.set_password(&store, None).unwrap();
    assert!(account.password(&store).unwrap().is_none());
}

#[test]
fn test_clear_is_logged_without_secret() {
    xl_core::print::set_print(false);
    let store = store();
    store.set("logged_user", Some("topsecret")).unwrap();
    store.clear("logged_user").unwrap();

    let logs = xl_core::print::get_logs();
    assert!(logs.iter().any(|(line, _)| line.contains("logged_user")));
    assert!(logs.iter().all(|(line, _)| !line.contains("topsecret")));
}

#[test]
fn test_keyring_backend_missing_entries() {
    // keyring's mock store: every `Entry` starts out empty
    keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
    let address = SecretAddress::default();

    assert!(KeyringBackend.get(&address, "nobody").unwrap().is_none());
    assert!(matches!(
        KeyringBackend.delete(&address, "nobody"),
        Err(SecretError::NotFound { .. })
    ));

    let store = SecretStore::system();
    assert!(store.get("nobody").unwrap().is_none());
    assert!(store.set("nobody", Some("x")).is_ok());
    assert!(store.clear("nobody").is_ok());
}
