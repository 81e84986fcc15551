//! Account identity, account list and config files

use std::time::Duration;

use xl_accounts::{AccountIdentity, AccountList, AccountsConfig};

#[test]
fn test_user_name_lowercased() {
    for name in ["Player", "PLAYER", "player", "MiXeD.Case@Mail"] {
        assert_eq!(AccountIdentity::new(name).user_name(), name.to_lowercase());
    }
}

#[test]
fn test_id_format() {
    let mut account = AccountIdentity::new("Player");
    assert_eq!(account.id(), "player-False-False");

    account.set_use_otp(true);
    assert_eq!(account.id(), "player-True-False");

    account.set_use_steam_service_account(true);
    assert_eq!(account.id(), "player-True-True");
    assert_eq!(account.to_string(), account.id());
}

#[test]
fn test_id_ignores_other_fields() {
    let mut a = AccountIdentity::new("player");
    let mut b = AccountIdentity::new("player");
    a.set_chosen_character("Foo Bar", "Gaia");
    b.set_chosen_character("Someone Else", "Tonberry");
    b.set_save_password(true);
    b.set_thumbnail_url(Some("https://img/x.jpg".to_owned()));
    assert_eq!(a.id(), b.id());
}

#[test]
fn test_serialized_form() {
    let mut account = AccountIdentity::new("Player");
    account.set_save_password(true);
    account.set_chosen_character("Foo Bar", "Tonberry");
    account.set_last_successful_otp(Some("123456".to_owned()));

    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(json["UserName"], "player");
    assert_eq!(json["SavePassword"], true);
    assert_eq!(json["ChosenCharacterWorld"], "Tonberry");
    assert!(json.get("Password").is_none());
    assert!(json.get("Id").is_none());
}

#[test]
fn test_deserialize_lowercases_and_defaults() {
    let account: AccountIdentity =
        serde_json::from_str(r#"{"UserName": "OldEntry", "UseOtp": true}"#).unwrap();
    assert_eq!(account.user_name(), "oldentry");
    assert!(account.use_otp());
    assert!(!account.save_password());
    assert!(account.chosen_character_name().is_none());
}

#[tokio::test]
async fn test_account_list_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accountsList.json");

    let mut list = AccountList::load_from(&path).unwrap();
    assert!(list.is_empty());

    let mut account = AccountIdentity::new("One");
    account.set_chosen_character("Foo Bar", "Gaia");
    list.add_account(account);
    list.add_account(AccountIdentity::new("Two"));
    list.save().await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("\"Password\""));

    let loaded = AccountList::load_from(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    let one = loaded.find("one-False-False").unwrap();
    assert_eq!(one.chosen_character_world(), Some("Gaia"));
}

#[test]
fn test_account_list_keeps_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = AccountList::empty(dir.path().join("accountsList.json"));

    list.add_account(AccountIdentity::new("same"));
    list.add_account(AccountIdentity::new("SAME"));
    assert_eq!(list.len(), 2);

    if let Some(account) = list.find_mut("same-False-False") {
        account.set_use_otp(true);
    }
    assert_eq!(list.accounts()[0].id(), "same-True-False");

    assert_eq!(list.remove_account("same-False-False"), 1);
    assert_eq!(list.remove_account("nobody-False-False"), 0);
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_account_list_save_to_other_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = AccountList::empty(dir.path().join("accountsList.json"));
    list.add_account(AccountIdentity::new("Exported"));

    let export = dir.path().join("export.json");
    list.save_to(&export).await.unwrap();
    assert!(!list.path().exists());

    let loaded = AccountList::load_from(&export).unwrap();
    assert_eq!(loaded.accounts()[0].user_name(), "exported");
    assert_eq!(loaded.path(), export.as_path());
}

#[tokio::test]
async fn test_current_account_selection() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = AccountList::empty(dir.path().join("accountsList.json"));
    list.add_account(AccountIdentity::new("one"));
    list.add_account(AccountIdentity::new("two"));
    assert!(list.current_account().is_none());

    assert!(list.set_current_account("two-False-False"));
    assert_eq!(list.current_account().unwrap().user_name(), "two");

    assert!(!list.set_current_account("three-False-False"));
    assert_eq!(list.current_account_id(), Some("two-False-False"));

    // Not written to the accounts file
    list.save().await.unwrap();
    let loaded = AccountList::load_from(list.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.current_account_id().is_none());

    list.remove_account("two-False-False");
    assert!(list.current_account().is_none());
    assert!(list.current_account_id().is_none());

    assert!(list.set_current_account("one-False-False"));
    list.clear_current_account();
    assert!(list.current_account().is_none());
}

#[test]
fn test_corrupt_account_list_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accountsList.json");
    std::fs::write(&path, "[{ not json").unwrap();

    let list = AccountList::load_from(&path).unwrap();
    assert!(list.is_empty());
    assert!(dir.path().join("accountsList.json.bak").exists());
}

#[tokio::test]
async fn test_config_defaults_and_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts_config.json");

    let config = AccountsConfig::load_from(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.c_directory_url(), "https://xivapi.com/");
    assert_eq!(config.c_lookup_timeout(), Duration::from_secs(10));

    let config = AccountsConfig {
        directory_url: Some("http://localhost:9000".to_owned()),
        lookup_timeout_secs: Some(3),
    };
    config.save_to(&path).await.unwrap();

    let loaded = AccountsConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.c_lookup_timeout(), Duration::from_secs(3));
}

#[test]
fn test_corrupt_config_resets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts_config.json");
    std::fs::write(&path, "not json at all").unwrap();

    let config = AccountsConfig::load_from(&path).unwrap();
    assert_eq!(config, AccountsConfig::default());
    assert!(dir.path().join("accounts_config.json.bak").exists());
}
