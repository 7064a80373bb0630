//! Upstream payload types.
//!
//! Records are passed through to API clients, so they serialize back out
//! with the same field names they were read with.

use gametracker_core::types::GameId;
use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by `/games`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawgPage<T> {
    #[serde(default)]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawgPlatform {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// List rows nest each platform one level down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawgPlatformEntry {
    pub platform: RawgPlatform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawgGenre {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A game as returned by `/games` (list rows) or `/games/{id}` (details).
///
/// `description_raw` is only populated by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawgGame {
    pub id: GameId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub tba: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_top: Option<i64>,
    #[serde(default)]
    pub ratings_count: Option<i64>,
    #[serde(default)]
    pub metacritic: Option<i64>,
    #[serde(default)]
    pub platforms: Option<Vec<RawgPlatformEntry>>,
    #[serde(default)]
    pub genres: Option<Vec<RawgGenre>>,
    #[serde(default)]
    pub short_screenshots: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub esrb_rating: Option<serde_json::Value>,
    #[serde(default)]
    pub description_raw: Option<String>,
}
