//! REST client for the RAWG HTTP endpoints.
//!
//! Wraps `/games` (filtered listing) and `/games/{id}` (details) using
//! [`reqwest`]. Every failure is returned as a [`CatalogError`]; nothing is
//! retried.

use std::time::Duration;

use gametracker_core::catalog::CatalogQuery;
use gametracker_core::types::GameId;
use serde::de::DeserializeOwned;

use crate::models::{RawgGame, RawgPage};

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Public RAWG API root.
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest upstream error body kept in a [`CatalogError::ApiError`].
const MAX_ERROR_BODY_LEN: usize = 512;

/* --------------------------------------------------------------------------
Config
-------------------------------------------------------------------------- */

/// Connection settings for the RAWG API.
#[derive(Debug, Clone)]
pub struct RawgConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// API root without a trailing slash.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for RawgConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RawgConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var             | Default                   |
    /// |---------------------|---------------------------|
    /// | `RAWG_API_KEY`      | unset                     |
    /// | `RAWG_BASE_URL`     | `https://api.rawg.io/api` |
    /// | `RAWG_TIMEOUT_SECS` | `30`                      |
    ///
    /// # Panics
    ///
    /// Panics if `RAWG_TIMEOUT_SECS` is not a valid u64.
    pub fn from_env() -> Self {
        let api_key = std::env::var("RAWG_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url = std::env::var("RAWG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("RAWG_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("RAWG_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/* --------------------------------------------------------------------------
Errors
-------------------------------------------------------------------------- */

/// Errors from the RAWG REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// No complete response within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// RAWG returned a non-2xx status code.
    #[error("RAWG API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether the upstream reported the requested resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ApiError { status: 404, .. })
    }
}

/* --------------------------------------------------------------------------
Client
-------------------------------------------------------------------------- */

/// HTTP client for the RAWG catalog.
pub struct RawgApi {
    client: reqwest::Client,
    config: RawgConfig,
}

impl RawgApi {
    /// Build a client with the configured timeout.
    pub fn new(config: RawgConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::Request)?;

        if config.api_key.is_none() {
            tracing::warn!("RAWG_API_KEY is not set; upstream requests will likely be rejected");
        }

        Ok(Self { client, config })
    }

    /// Fetch one page of games.
    ///
    /// Sends `GET /games` with the key, paging, ordering and whichever
    /// filters the query resolves to.
    pub async fn fetch_games(&self, query: &CatalogQuery) -> Result<RawgPage<RawgGame>, CatalogError> {
        let params = query.upstream_params();
        tracing::debug!(?params, "Fetching games from RAWG");

        let response = self
            .client
            .get(format!("{}/games", self.config.base_url))
            .query(&self.key_param())
            .query(&params)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        self.parse_response(response).await
    }

    /// Fetch details for a single game via `GET /games/{id}`.
    pub async fn fetch_game(&self, game_id: GameId) -> Result<RawgGame, CatalogError> {
        tracing::debug!(game_id, "Fetching game details from RAWG");

        let response = self
            .client
            .get(format!("{}/games/{game_id}", self.config.base_url))
            .query(&self.key_param())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        self.parse_response(response).await
    }

    // ---- private helpers ----

    fn key_param(&self) -> Vec<(&'static str, &str)> {
        self.config
            .api_key
            .as_deref()
            .map(|key| vec![("key", key)])
            .unwrap_or_default()
    }

    /// Map a transport error, stripping the URL so the key never reaches
    /// logs or error messages.
    fn classify(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout(self.config.timeout)
        } else {
            CatalogError::Request(err.without_url())
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let mut body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            truncate_at_char_boundary(&mut body, MAX_ERROR_BODY_LEN);
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn truncate_at_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
