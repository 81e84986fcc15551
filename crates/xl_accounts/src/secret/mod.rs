//! Password storage.
//!
//! [`SecretStore`] sits on top of a [`SecretBackend`]
//! (the OS vault through [`KeyringBackend`], or [`MemoryBackend`] in tests)
//! and gives it overwrite semantics:
//! every write first deletes whatever is stored, then inserts
//! the new secret only if it's non-empty.
//!
//! Secrets are keyed by `(package, service, user name)`, **not** by
//! [`AccountIdentity::id`](crate::AccountIdentity::id), so toggling the
//! OTP/Steam flags on an account keeps its saved password.

use xl_core::pt;

mod keyring_backend;
mod memory;
mod password;

pub use keyring_backend::{KeyringBackend, KeyringError};
pub use memory::MemoryBackend;
pub use password::Password;

/// Package identifier the launcher stores its passwords under.
pub const PACKAGE: &str = "com.goatsoft.xivlauncher";
/// Service name the launcher stores its passwords under.
pub const SERVICE: &str = "SEID";

/// The fixed part of a secret's key. The account user name is the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretAddress {
    pub package: String,
    pub service: String,
}

impl Default for SecretAddress {
    fn default() -> Self {
        Self {
            package: PACKAGE.to_owned(),
            service: SERVICE.to_owned(),
        }
    }
}

impl std::fmt::Display for SecretAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.package, self.service)
    }
}

/// Errors from the secret store.
///
/// None of these carry the secret itself, only the account it belongs to.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("no saved password for account {account}")]
    NotFound { account: String },
    #[error(transparent)]
    Keyring(#[from] KeyringError),
    #[error("password store failure for account {account}: {reason}")]
    Failure { account: String, reason: String },
}

/// A platform secret vault.
///
/// Implementations must report a missing entry on [`delete`](Self::delete)
/// as [`SecretError::NotFound`], and on [`get`](Self::get) as `Ok(None)`.
pub trait SecretBackend: Send + Sync {
    /// # Errors
    /// If the vault couldn't be read. A missing entry is `Ok(None)`.
    fn get(&self, address: &SecretAddress, account: &str) -> Result<Option<Password>, SecretError>;

    /// Insert or replace an entry.
    ///
    /// # Errors
    /// If the vault couldn't be written.
    fn set(&self, address: &SecretAddress, account: &str, secret: &str) -> Result<(), SecretError>;

    /// # Errors
    /// [`SecretError::NotFound`] if there was nothing to delete,
    /// anything else if the vault refused.
    fn delete(&self, address: &SecretAddress, account: &str) -> Result<(), SecretError>;
}

impl<T: SecretBackend + ?Sized> SecretBackend for std::sync::Arc<T> {
    fn get(&self, address: &SecretAddress, account: &str) -> Result<Option<Password>, SecretError> {
        (**self).get(address, account)
    }

    fn set(&self, address: &SecretAddress, account: &str, secret: &str) -> Result<(), SecretError> {
        (**self).set(address, account, secret)
    }

    fn delete(&self, address: &SecretAddress, account: &str) -> Result<(), SecretError> {
        (**self).delete(address, account)
    }
}

/// Saved passwords, one per account user name.
pub struct SecretStore<B = KeyringBackend> {
    backend: B,
    address: SecretAddress,
}

impl SecretStore<KeyringBackend> {
    /// The OS vault, under the launcher's [`PACKAGE`] and [`SERVICE`].
    #[must_use]
    pub fn system() -> Self {
        Self::with_backend(KeyringBackend)
    }
}

impl<B: SecretBackend> SecretStore<B> {
    #[must_use]
    pub fn new(backend: B, address: SecretAddress) -> Self {
        Self { backend, address }
    }

    /// Use `backend` under the launcher's default address.
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self::new(backend, SecretAddress::default())
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn address(&self) -> &SecretAddress {
        &self.address
    }

    /// Read the saved password for `account`.
    ///
    /// Returns `Ok(None)` if nothing is saved (or an empty value is).
    ///
    /// # Errors
    /// If the vault itself failed.
    pub fn get(&self, account: &str) -> Result<Option<Password>, SecretError> {
        Ok(self
            .backend
            .get(&self.address, account)?
            .filter(|n| !n.is_empty()))
    }

    /// Replace the saved password for `account`.
    ///
    /// The old entry is deleted first (a missing entry is fine).
    /// `None` or an empty string leaves the account with no saved password.
    ///
    /// # Errors
    /// If deleting the old entry failed for any reason other than
    /// it not existing, or if writing the new one failed.
    pub fn set(&self, account: &str, secret: Option<&str>) -> Result<(), SecretError> {
        match self.backend.delete(&self.address, account) {
            Ok(()) | Err(SecretError::NotFound { .. }) => {}
            Err(err) => return Err(err),
        }

        match secret.filter(|n| !n.is_empty()) {
            Some(secret) => self.backend.set(&self.address, account, secret),
            None => {
                pt!("Cleared saved password for {account}");
                Ok(())
            }
        }
    }

    /// Forget the saved password for `account`, if any.
    ///
    /// # Errors
    /// Same as [`SecretStore::set`].
    pub fn clear(&self, account: &str) -> Result<(), SecretError> {
        self.set(account, None)
    }
}
