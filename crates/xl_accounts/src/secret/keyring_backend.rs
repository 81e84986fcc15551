use std::fmt::Display;

use super::{Password, SecretAddress, SecretBackend, SecretError};

/// The OS secret vault: Windows Credential Manager,
/// macOS Keychain or the Linux Secret Service.
///
/// Entries are stored with service `"{package}/{service}"`
/// and the account user name as the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyringBackend;

impl KeyringBackend {
    fn entry(address: &SecretAddress, account: &str) -> Result<keyring::Entry, SecretError> {
        keyring::Entry::new(&address.to_string(), account).map_err(|err| map_error(err, account))
    }
}

impl SecretBackend for KeyringBackend {
    fn get(&self, address: &SecretAddress, account: &str) -> Result<Option<Password>, SecretError> {
        match Self::entry(address, account)?.get_password() {
            Ok(secret) => Ok(Some(Password::from(secret))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(map_error(err, account)),
        }
    }

    fn set(&self, address: &SecretAddress, account: &str, secret: &str) -> Result<(), SecretError> {
        Self::entry(address, account)?
            .set_password(secret)
            .map_err(|err| map_error(err, account))
    }

    fn delete(&self, address: &SecretAddress, account: &str) -> Result<(), SecretError> {
        Self::entry(address, account)?
            .delete_credential()
            .map_err(|err| map_error(err, account))
    }
}

fn map_error(err: keyring::Error, account: &str) -> SecretError {
    match err {
        keyring::Error::NoEntry => SecretError::NotFound {
            account: account.to_owned(),
        },
        err => SecretError::Keyring(KeyringError(err)),
    }
}

#[derive(Debug, thiserror::Error)]
pub struct KeyringError(pub keyring::Error);

impl Display for KeyringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Password keyring error:")?;
        match &self.0 {
            #[cfg(target_os = "linux")]
            keyring::Error::PlatformFailure(error)
                if error.to_string().contains("The name is not activatable") =>
            {
                write!(f, "{error}\n\nNo secret service is running.\nInstall gnome-keyring (or KWallet with its Secret Service bridge)\nand the libsecret package for your distro.")
            }
            #[cfg(target_os = "linux")]
            keyring::Error::NoStorageAccess(error)
                if error.to_string().contains("no result found") =>
            {
                write!(
                    f,
                    r#"{error}

There is no default keyring to save passwords in.
Open your keyring manager (for example "seahorse"),
create a "Password Keyring" called "Login"
and set it as the default."#
                )
            }
            keyring::Error::NoStorageAccess(error) => {
                write!(f, "the keyring is locked or access was denied: {error}")
            }
            _ => write!(f, "{}", self.0),
        }
    }
}
