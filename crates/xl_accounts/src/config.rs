use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use xl_core::{err, IntoIoError, IntoJsonError, JsonFileError, LAUNCHER_DIR};

use crate::{directory::DEFAULT_DIRECTORY_URL, thumbnail::DEFAULT_LOOKUP_TIMEOUT};

const CONFIG_FILE: &str = "accounts_config.json";

/// Settings for the account features, stored in
/// `accounts_config.json` in the launcher directory.
///
/// Fields are `Option`s so older or hand-edited files still load;
/// the `c_*` accessors fill in the defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountsConfig {
    /// Base URL of the character directory.
    ///
    /// Default: [`DEFAULT_DIRECTORY_URL`]
    pub directory_url: Option<String>,
    /// How long a character search may take, in seconds.
    ///
    /// Default: 10
    pub lookup_timeout_secs: Option<u64>,
}

impl AccountsConfig {
    #[must_use]
    pub fn default_path() -> PathBuf {
        LAUNCHER_DIR.join(CONFIG_FILE)
    }

    /// Load from the launcher directory.
    ///
    /// # Errors
    /// See [`AccountsConfig::load_from`].
    pub fn load_s() -> Result<Self, JsonFileError> {
        Self::load_from(&Self::default_path())
    }

    /// Load the config at `path`.
    ///
    /// A missing file is created with defaults. A corrupted one is
    /// backed up to `*.bak` and replaced with defaults.
    ///
    /// # Errors
    /// If the file couldn't be read or written.
    pub fn load_from(path: &Path) -> Result<Self, JsonFileError> {
        if !path.exists() {
            return Self::create(path);
        }

        let config = std::fs::read_to_string(path).path(path)?;
        match serde_json::from_str(&config) {
            Ok(config) => Ok(config),
            Err(error) => {
                err!("Invalid accounts config, resetting it!\nError: {error}");
                _ = std::fs::copy(path, path.with_extension("json.bak"));
                Self::create(path)
            }
        }
    }

    /// # Errors
    /// If the file couldn't be written.
    pub async fn save_to(&self, path: &Path) -> Result<(), JsonFileError> {
        let config = serde_json::to_string_pretty(self).json_to()?;
        tokio::fs::write(path, config.as_bytes()).await.path(path)?;
        Ok(())
    }

    fn create(path: &Path) -> Result<Self, JsonFileError> {
        let config = Self::default();
        std::fs::write(path, serde_json::to_string_pretty(&config).json_to()?.as_bytes())
            .path(path)?;
        Ok(config)
    }

    #[must_use]
    pub fn c_directory_url(&self) -> &str {
        self.directory_url
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_DIRECTORY_URL)
    }

    #[must_use]
    pub fn c_lookup_timeout(&self) -> Duration {
        self.lookup_timeout_secs
            .filter(|n| *n > 0)
            .map_or(DEFAULT_LOOKUP_TIMEOUT, Duration::from_secs)
    }
}
