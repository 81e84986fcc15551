use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("could not send request: download error with code {code}, url {url}")]
    DownloadError {
        code: reqwest::StatusCode,
        url: reqwest::Url,
    },
    #[error("could not send request: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// A JSON (de)serialization failure.
///
/// Keeps a (truncated) copy of the offending text when reading,
/// so a broken response can be diagnosed from the logs.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("could not parse JSON: {error}\n\nJSON: {}", truncate(.json))]
    From {
        error: serde_json::Error,
        json: String,
    },
    #[error("could not convert to JSON: {error}")]
    To { error: serde_json::Error },
}

const JSON_PREVIEW_LEN: usize = 500;

fn truncate(json: &str) -> &str {
    match json.char_indices().nth(JSON_PREVIEW_LEN) {
        Some((idx, _)) => &json[..idx],
        None => json,
    }
}

pub trait IntoJsonError<T> {
    /// Attach the source text to a deserialization error.
    #[allow(clippy::missing_errors_doc)]
    fn json(self, text: String) -> Result<T, JsonError>;
    /// Mark a serialization error.
    #[allow(clippy::missing_errors_doc)]
    fn json_to(self) -> Result<T, JsonError>;
}

impl<T> IntoJsonError<T> for Result<T, serde_json::Error> {
    fn json(self, text: String) -> Result<T, JsonError> {
        self.map_err(|error| JsonError::From { error, json: text })
    }

    fn json_to(self) -> Result<T, JsonError> {
        self.map_err(|error| JsonError::To { error })
    }
}

#[derive(Debug, Error)]
#[error("at path {path:?}: {error}")]
pub struct IoError {
    pub error: std::io::Error,
    pub path: PathBuf,
}

pub trait IntoIoError<T> {
    /// Attach the path that was being accessed.
    #[allow(clippy::missing_errors_doc)]
    fn path(self, path: impl AsRef<Path>) -> Result<T, IoError>;
}

impl<T> IntoIoError<T> for std::io::Result<T> {
    fn path(self, path: impl AsRef<Path>) -> Result<T, IoError> {
        self.map_err(|error| IoError {
            error,
            path: path.as_ref().to_owned(),
        })
    }
}

/// Errors from reading or writing a JSON file on disk.
#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("JSON file error: {0}")]
    Json(#[from] JsonError),
    #[error("JSON file error: {0}")]
    Io(#[from] IoError),
}
