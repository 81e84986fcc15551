//! # Shared plumbing for the launcher account crates
//!
//! **Not recommended to use in your own projects!**
//!
//! This crate contains:
//! - Logging macros ([`info!`], [`pt!`], [`err!`]) that redact
//!   credentials before printing or writing anything
//! - The shared HTTP [`CLIENT`]
//! - The launcher directory ([`LAUNCHER_DIR`])
//! - Error types for requests and JSON files, with
//!   extension traits to attach context ([`IntoJsonError`], [`IntoIoError`])

use std::sync::LazyLock;

mod error;
pub mod file_utils;
pub mod print;

pub use error::{
    IntoIoError, IntoJsonError, IoError, JsonError, JsonFileError, RequestError,
};
pub use file_utils::LAUNCHER_DIR;

#[doc(hidden)]
pub use owo_colors as __owo_colors;

pub const LAUNCHER_VERSION_NAME: &str = "0.1.0";

/// The shared HTTP client.
///
/// Building a `reqwest::Client` sets up a connection pool
/// and TLS config, so everything reuses this one.
pub static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .user_agent(format!("xl_accounts/{LAUNCHER_VERSION_NAME}"))
        .build()
        .expect("couldn't build the HTTP client (TLS backend failed to initialize)")
});
