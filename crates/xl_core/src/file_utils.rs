use std::{path::PathBuf, sync::LazyLock};

use crate::RequestError;

/// Directory holding launcher files (account list, config, logs).
///
/// - Windows: `%APPDATA%/XIVLauncher`
/// - Linux: `~/.local/share/XIVLauncher`
/// - macOS: `~/Library/Application Support/XIVLauncher`
///
/// Can be overridden with the `XL_LAUNCHER_DIR` environment variable.
/// Falls back to the current directory if no data dir can be found.
pub static LAUNCHER_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    let dir = get_launcher_dir();
    _ = std::fs::create_dir_all(&dir);
    dir
});

fn get_launcher_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("XL_LAUNCHER_DIR").filter(|n| !n.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|n| n.join("XIVLauncher"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Fails with [`RequestError::DownloadError`] on a non-2xx response.
///
/// # Errors
/// If the server didn't report success.
pub fn check_for_success(response: &reqwest::Response) -> Result<(), RequestError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(RequestError::DownloadError {
            code: response.status(),
            url: response.url().clone(),
        })
    }
}
