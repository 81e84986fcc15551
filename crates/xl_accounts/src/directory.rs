//! Character search against the public game-data directory.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use xl_core::{file_utils::check_for_success, pt, IntoJsonError, JsonError, RequestError, CLIENT};

/// Where [`XivApiClient`] searches by default.
pub const DEFAULT_DIRECTORY_URL: &str = "https://xivapi.com/";

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCandidate {
    pub name: String,
    /// Usually `"World [DataCenter]"`.
    pub world: String,
    pub avatar_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("character search failed: {0}")]
    Request(#[from] RequestError),
    #[error("character search returned an unexpected response: {0}")]
    Json(#[from] JsonError),
    #[error("character search timed out after {0:?}")]
    Timeout(Duration),
    #[error("character search was cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for LookupError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(RequestError::ReqwestError(value))
    }
}

/// Something that can search for characters by name and world.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Run one search. An empty list is a valid answer.
    ///
    /// # Errors
    /// On any network, HTTP status or parsing failure.
    async fn search_character(
        &self,
        name: &str,
        world: &str,
    ) -> Result<Vec<CharacterCandidate>, LookupError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResponse {
    results: Vec<SearchEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchEntry {
    name: String,
    server: String,
    avatar: String,
}

impl From<SearchEntry> for CharacterCandidate {
    fn from(value: SearchEntry) -> Self {
        Self {
            name: value.name,
            world: value.server,
            avatar_url: value.avatar,
        }
    }
}

/// Parse a `character/search` response body.
///
/// Only `Results[].Name`, `Results[].Server` and `Results[].Avatar`
/// are read; everything else is ignored.
///
/// # Errors
/// If `Results` is missing or any entry lacks one of those
/// three string fields.
pub fn parse_search_response(text: String) -> Result<Vec<CharacterCandidate>, LookupError> {
    let response = serde_json::from_str::<SearchResponse>(&text).json(text)?;
    Ok(response.results.into_iter().map(Into::into).collect())
}

/// [`DirectoryClient`] talking to XIVAPI over HTTP.
#[derive(Debug, Clone)]
pub struct XivApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for XivApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY_URL)
    }
}

impl XivApiClient {
    /// Search against `base_url` using the shared [`CLIENT`].
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(CLIENT.clone(), base_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/character/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl DirectoryClient for XivApiClient {
    async fn search_character(
        &self,
        name: &str,
        world: &str,
    ) -> Result<Vec<CharacterCandidate>, LookupError> {
        pt!("Searching for character {name} @ {world}");
        let response = self
            .client
            .get(self.search_url())
            .query(&[("name", name), ("server", world)])
            .send()
            .await?;
        check_for_success(&response)?;
        let text = response.text().await?;
        parse_search_response(text)
    }
}
