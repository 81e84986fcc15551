use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, PoisonError,
    },
};

use super::{Password, SecretAddress, SecretBackend, SecretError};

type Key = (SecretAddress, String);

/// An in-process vault, for tests and for platforms without one.
///
/// Can be told to refuse deletes or writes, to exercise
/// the failure paths of [`SecretStore`](super::SecretStore).
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<Key, Password>>,
    deny_deletes: AtomicBool,
    deny_writes: AtomicBool,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following delete fail with a permission error.
    pub fn deny_deletes(&self, deny: bool) {
        self.deny_deletes.store(deny, Ordering::SeqCst);
    }

    /// Make every following write fail with a permission error.
    pub fn deny_writes(&self, deny: bool) {
        self.deny_writes.store(deny, Ordering::SeqCst);
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Key, Password>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn permission_denied(account: &str) -> SecretError {
    SecretError::Failure {
        account: account.to_owned(),
        reason: "permission denied".to_owned(),
    }
}

impl SecretBackend for MemoryBackend {
    fn get(&self, address: &SecretAddress, account: &str) -> Result<Option<Password>, SecretError> {
        Ok(self.lock().get(&(address.clone(), account.to_owned())).cloned())
    }

    fn set(&self, address: &SecretAddress, account: &str, secret: &str) -> Result<(), SecretError> {
        if self.deny_writes.load(Ordering::SeqCst) {
            return Err(permission_denied(account));
        }
        self.lock()
            .insert((address.clone(), account.to_owned()), Password::new(secret));
        Ok(())
    }

    fn delete(&self, address: &SecretAddress, account: &str) -> Result<(), SecretError> {
        if self.deny_deletes.load(Ordering::SeqCst) {
            return Err(permission_denied(account));
        }
        match self.lock().remove(&(address.clone(), account.to_owned())) {
            Some(_) => Ok(()),
            None => Err(SecretError::NotFound {
                account: account.to_owned(),
            }),
        }
    }
}
