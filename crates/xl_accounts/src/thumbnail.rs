use std::time::Duration;

use tokio_util::sync::CancellationToken;
use xl_core::info;

use crate::{
    config::AccountsConfig,
    directory::{CharacterCandidate, DirectoryClient, LookupError, XivApiClient},
};

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Finds the avatar picture for an account's chosen character.
///
/// Best effort: any failure (network, bad response, timeout, cancellation)
/// is logged and turned into `None`. Nothing is cached, so every call
/// makes its own request.
pub struct ThumbnailResolver<C> {
    client: C,
    timeout: Duration,
}

impl ThumbnailResolver<XivApiClient> {
    /// Resolver against the configured directory URL and timeout.
    #[must_use]
    pub fn from_config(config: &AccountsConfig) -> Self {
        Self::new(XivApiClient::new(config.c_directory_url())).with_timeout(config.c_lookup_timeout())
    }
}

impl<C: DirectoryClient> ThumbnailResolver<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Look up the avatar for `name` on `world`.
    ///
    /// Returns `None` without making a request if either is missing or empty.
    pub async fn resolve(&self, name: Option<&str>, world: Option<&str>) -> Option<String> {
        self.resolve_with_cancel(name, world, &CancellationToken::new())
            .await
    }

    /// Like [`ThumbnailResolver::resolve`], but gives up
    /// as soon as `cancel` is triggered.
    pub async fn resolve_with_cancel(
        &self,
        name: Option<&str>,
        world: Option<&str>,
        cancel: &CancellationToken,
    ) -> Option<String> {
        let name = name.filter(|n| !n.is_empty())?;
        let world = world.filter(|n| !n.is_empty())?;

        match self.lookup(name, world, cancel).await {
            Ok(candidates) => select_avatar(&candidates, name, world).map(str::to_owned),
            Err(err) => {
                info!("Couldn't download character search ({name} @ {world}): {err}");
                None
            }
        }
    }

    async fn lookup(
        &self,
        name: &str,
        world: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<CharacterCandidate>, LookupError> {
        tokio::select! {
            () = cancel.cancelled() => Err(LookupError::Cancelled),
            result = tokio::time::timeout(self.timeout, self.client.search_character(name, world)) => {
                result.map_err(|_| LookupError::Timeout(self.timeout))?
            }
        }
    }
}

/// Pick one avatar out of the search results.
///
/// With several results, the first one whose name equals `name` and whose
/// world contains `world` (both ignoring case) wins. The world is matched by
/// containment because the directory appends the data center, as in
/// `"Tonberry [Elemental]"`.
///
/// Otherwise (one result, or nothing matched) the first result is used.
#[must_use]
pub fn select_avatar<'a>(
    candidates: &'a [CharacterCandidate],
    name: &str,
    world: &str,
) -> Option<&'a str> {
    let first = candidates.first()?;

    if candidates.len() > 1 {
        let name = name.to_lowercase();
        let world = world.to_lowercase();
        if let Some(found) = candidates
            .iter()
            .find(|c| c.name.to_lowercase() == name && c.world.to_lowercase().contains(&world))
        {
            return Some(&found.avatar_url);
        }
    }

    Some(&first.avatar_url)
}
