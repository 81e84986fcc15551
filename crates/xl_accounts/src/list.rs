use std::path::{Path, PathBuf};

use xl_core::{err, info, IntoIoError, IntoJsonError, JsonFileError, LAUNCHER_DIR};

use crate::identity::AccountIdentity;

const ACCOUNTS_FILE: &str = "accountsList.json";

/// The accounts configured in the launcher, persisted as a JSON array
/// in `accountsList.json`.
///
/// Only the non-secret fields of each account are written.
/// Entries are kept in insertion order and are not de-duplicated:
/// two accounts may share an [`AccountIdentity::id`].
///
/// The selected account is kept alongside but isn't part of the file
/// (the launcher remembers it in its own settings).
#[derive(Debug, Clone)]
pub struct AccountList {
    accounts: Vec<AccountIdentity>,
    current_account_id: Option<String>,
    path: PathBuf,
}

impl AccountList {
    /// An empty list that will be saved to `path`.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            accounts: Vec::new(),
            current_account_id: None,
            path: path.into(),
        }
    }

    /// Load `accountsList.json` from the launcher directory.
    ///
    /// # Errors
    /// See [`AccountList::load_from`].
    pub fn load_s() -> Result<Self, JsonFileError> {
        Self::load_from(LAUNCHER_DIR.join(ACCOUNTS_FILE))
    }

    /// Load the list at `path`.
    ///
    /// A missing file gives an empty list. A corrupted one is backed up
    /// to `*.bak` and also gives an empty list.
    ///
    /// # Errors
    /// If the file exists but couldn't be read.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, JsonFileError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::empty(path));
        }

        let text = std::fs::read_to_string(&path).path(&path)?;
        if text.trim().is_empty() {
            return Ok(Self::empty(path));
        }

        match serde_json::from_str::<Vec<AccountIdentity>>(&text) {
            Ok(accounts) => {
                info!("Loaded {} account(s)", accounts.len());
                Ok(Self {
                    accounts,
                    current_account_id: None,
                    path,
                })
            }
            Err(error) => {
                err!("Invalid account list, starting with an empty one!\nError: {error}");
                _ = std::fs::copy(&path, path.with_extension("json.bak"));
                Ok(Self::empty(path))
            }
        }
    }

    /// Write back to the file this list was loaded from.
    ///
    /// # Errors
    /// If the file couldn't be written.
    pub async fn save(&self) -> Result<(), JsonFileError> {
        self.save_to(&self.path).await
    }

    /// # Errors
    /// If the file couldn't be written.
    pub async fn save_to(&self, path: &Path) -> Result<(), JsonFileError> {
        let text = serde_json::to_string_pretty(&self.accounts).json_to()?;
        tokio::fs::write(path, text.as_bytes()).await.path(path)?;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn accounts(&self) -> &[AccountIdentity] {
        &self.accounts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn add_account(&mut self, account: AccountIdentity) {
        self.accounts.push(account);
    }

    /// Remove every account with this id, returning how many were removed.
    ///
    /// Saved passwords are left alone; use
    /// [`SecretStore::clear`](crate::SecretStore::clear) for that.
    pub fn remove_account(&mut self, id: &str) -> usize {
        let before = self.accounts.len();
        self.accounts.retain(|n| n.id() != id);
        if self.current_account_id.as_deref() == Some(id) {
            self.current_account_id = None;
        }
        before - self.accounts.len()
    }

    #[must_use]
    pub fn current_account_id(&self) -> Option<&str> {
        self.current_account_id.as_deref()
    }

    /// The selected account, if it's still in the list.
    #[must_use]
    pub fn current_account(&self) -> Option<&AccountIdentity> {
        self.find(self.current_account_id.as_deref()?)
    }

    /// Select the account with this id.
    ///
    /// Returns `false` (and keeps the old selection)
    /// if no account has that id.
    pub fn set_current_account(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.current_account_id = Some(id.to_owned());
        true
    }

    pub fn clear_current_account(&mut self) {
        self.current_account_id = None;
    }

    /// The first account with this id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&AccountIdentity> {
        self.accounts.iter().find(|n| n.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut AccountIdentity> {
        self.accounts.iter_mut().find(|n| n.id() == id)
    }
}
