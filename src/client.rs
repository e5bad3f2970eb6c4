use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::instrument;

use crate::coc_api;
use crate::error::{CwlError, Result};
use crate::model::{ClanInfo, LeagueGroup, WarRecord};
use crate::tag::Tag;

/// The API calls the report pipeline depends on.
#[async_trait]
pub trait CwlApi {
    /// The league group the clan is currently placed in.
    async fn league_group(&self, clan: &Tag) -> Result<LeagueGroup>;

    /// A single league war by war tag.
    async fn war(&self, war: &Tag) -> Result<WarRecord>;

    /// Basic clan profile.
    async fn clan(&self, clan: &Tag) -> Result<ClanInfo>;
}

/// Client for the Clash of Clans API.
///
/// Wraps a [`reqwest::Client`] carrying the bearer token and a per-request
/// timeout. Requests are never retried.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cwl_stats::Result<()> {
/// use cwl_stats::{CocClient, CwlApi, Tag};
///
/// let client = CocClient::new("my-token", std::time::Duration::from_secs(10))?;
/// let clan = Tag::clan("#2PP0JLY8")?;
/// let group = client.league_group(&clan).await?;
/// println!("{} rounds", group.rounds.len());
/// # Ok(())
/// # }
/// ```
pub struct CocClient {
    http: reqwest::Client,
    base_url: String,
}

impl CocClient {
    /// Create a client against the public API endpoint.
    pub fn new(token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| CwlError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(CwlError::ClientBuild)?;
        Ok(Self::with_client(http))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// The client must already send the `Authorization` header.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: coc_api::BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

}

#[async_trait]
impl CwlApi for CocClient {
    #[instrument(skip(self))]
    async fn league_group(&self, clan: &Tag) -> Result<LeagueGroup> {
        coc_api::clans::get_league_group(&self.http, &self.base_url, clan).await
    }

    #[instrument(skip(self))]
    async fn war(&self, war: &Tag) -> Result<WarRecord> {
        coc_api::wars::get_war(&self.http, &self.base_url, war).await
    }

    #[instrument(skip(self))]
    async fn clan(&self, clan: &Tag) -> Result<ClanInfo> {
        coc_api::clans::get_clan(&self.http, &self.base_url, clan).await
    }
}
