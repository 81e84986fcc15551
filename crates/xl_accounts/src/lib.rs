//! # Launcher accounts
//!
//! Game service login identities for the launcher, the passwords that go
//! with them, and the avatar picture of each account's chosen character.
//!
//! - [`AccountIdentity`]: user name, login flags, chosen character.
//!   Never holds the password.
//! - [`SecretStore`]: saved passwords in the OS vault ([`KeyringBackend`]),
//!   or in memory ([`MemoryBackend`]).
//! - [`DirectoryClient`] / [`XivApiClient`]: character search.
//! - [`ThumbnailResolver`]: picks one avatar out of the search results,
//!   never failing loudly.
//! - [`AccountList`] / [`AccountsConfig`]: files in the launcher directory.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use xl_accounts::{AccountIdentity, AccountsConfig, SecretStore, ThumbnailResolver};
//!
//! let store = SecretStore::system();
//! let mut account = AccountIdentity::new("MyLogin");
//! account.set_password(&store, Some("hunter2"))?;
//!
//! account.set_chosen_character("Foo Bar", "Tonberry");
//! let resolver = ThumbnailResolver::from_config(&AccountsConfig::load_s()?);
//! let thumb = account.find_character_thumb(&resolver).await;
//! account.set_thumbnail_url(thumb);
//! # Ok(())
//! # }
//! ```

mod config;
pub mod directory;
mod identity;
mod list;
pub mod secret;
pub mod thumbnail;

pub use config::AccountsConfig;
pub use directory::{CharacterCandidate, DirectoryClient, LookupError, XivApiClient};
pub use identity::AccountIdentity;
pub use list::AccountList;
pub use secret::{
    KeyringBackend, MemoryBackend, Password, SecretAddress, SecretBackend, SecretError,
    SecretStore,
};
pub use thumbnail::{select_avatar, ThumbnailResolver};
