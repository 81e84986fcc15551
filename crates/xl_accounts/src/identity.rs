use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    directory::DirectoryClient,
    secret::{Password, SecretBackend, SecretError, SecretStore},
    thumbnail::ThumbnailResolver,
};

/// A game service login configured in the launcher.
///
/// Holds no password. That lives in the [`SecretStore`],
/// keyed by [`AccountIdentity::user_name`].
///
/// Serializes with the field names the launcher's
/// `accountsList.json` has always used (`UserName`, `UseOtp`, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AccountIdentity {
    #[serde(deserialize_with = "lowercase")]
    user_name: String,

    #[serde(default)]
    save_password: bool,
    #[serde(default)]
    use_steam_service_account: bool,
    #[serde(default)]
    use_otp: bool,

    #[serde(default)]
    chosen_character_name: Option<String>,
    #[serde(default)]
    chosen_character_world: Option<String>,

    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    last_successful_otp: Option<String>,
}

fn lowercase<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|n| n.to_lowercase())
}

impl AccountIdentity {
    /// The user name is lower-cased; nothing else is normalized.
    #[must_use]
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_lowercase(),
            save_password: false,
            use_steam_service_account: false,
            use_otp: false,
            chosen_character_name: None,
            chosen_character_world: None,
            thumbnail_url: None,
            last_successful_otp: None,
        }
    }

    /// `"{user_name}-{use_otp}-{use_steam_service_account}"`,
    /// with the flags written as `True`/`False`.
    ///
    /// Used for display and to tell accounts apart in lists.
    /// Two accounts with the same user name and flags get the same id.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}-{}-{}",
            self.user_name,
            bool_name(self.use_otp),
            bool_name(self.use_steam_service_account)
        )
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    #[must_use]
    pub fn save_password(&self) -> bool {
        self.save_password
    }

    pub fn set_save_password(&mut self, save_password: bool) {
        self.save_password = save_password;
    }

    #[must_use]
    pub fn use_otp(&self) -> bool {
        self.use_otp
    }

    pub fn set_use_otp(&mut self, use_otp: bool) {
        self.use_otp = use_otp;
    }

    #[must_use]
    pub fn use_steam_service_account(&self) -> bool {
        self.use_steam_service_account
    }

    pub fn set_use_steam_service_account(&mut self, use_steam_service_account: bool) {
        self.use_steam_service_account = use_steam_service_account;
    }

    #[must_use]
    pub fn chosen_character_name(&self) -> Option<&str> {
        self.chosen_character_name.as_deref()
    }

    #[must_use]
    pub fn chosen_character_world(&self) -> Option<&str> {
        self.chosen_character_world.as_deref()
    }

    pub fn set_chosen_character(&mut self, name: impl Into<String>, world: impl Into<String>) {
        self.chosen_character_name = Some(name.into());
        self.chosen_character_world = Some(world.into());
    }

    pub fn clear_chosen_character(&mut self) {
        self.chosen_character_name = None;
        self.chosen_character_world = None;
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn set_thumbnail_url(&mut self, thumbnail_url: Option<String>) {
        self.thumbnail_url = thumbnail_url;
    }

    #[must_use]
    pub fn last_successful_otp(&self) -> Option<&str> {
        self.last_successful_otp.as_deref()
    }

    pub fn set_last_successful_otp(&mut self, otp: Option<String>) {
        self.last_successful_otp = otp;
    }

    /// The saved password for this account, if any.
    ///
    /// # Errors
    /// If the secret store couldn't be read.
    pub fn password<B: SecretBackend>(
        &self,
        store: &SecretStore<B>,
    ) -> Result<Option<Password>, SecretError> {
        store.get(&self.user_name)
    }

    /// Replace (or with `None`/`""`, forget) the saved password.
    ///
    /// # Errors
    /// See [`SecretStore::set`].
    pub fn set_password<B: SecretBackend>(
        &self,
        store: &SecretStore<B>,
        password: Option<&str>,
    ) -> Result<(), SecretError> {
        store.set(&self.user_name, password)
    }

    /// Look up the avatar of the chosen character.
    ///
    /// `None` if no character is chosen or the lookup failed.
    /// Doesn't update [`AccountIdentity::thumbnail_url`] by itself.
    pub async fn find_character_thumb<C: DirectoryClient>(
        &self,
        resolver: &ThumbnailResolver<C>,
    ) -> Option<String> {
        resolver
            .resolve(
                self.chosen_character_name.as_deref(),
                self.chosen_character_world.as_deref(),
            )
            .await
    }
}

impl std::fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

fn bool_name(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
