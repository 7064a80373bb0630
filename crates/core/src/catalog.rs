//! Catalog query model and the name -> upstream id lookup tables.
//!
//! The upstream catalog filters platforms and genres by numeric id. Names the
//! tables do not know (including the UI's "All Platforms" / "All Genres"
//! sentinels) are dropped from the filter rather than rejected.

use serde::{Deserialize, Serialize};
use validator::Validate;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Default ordering key sent upstream.
pub const DEFAULT_ORDERING: &str = "released";

/// Default page number (1-based).
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of games per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size the upstream accepts.
pub const MAX_PAGE_SIZE: u32 = 40;

/// Platform display name -> upstream platform id.
const PLATFORM_IDS: &[(&str, i64)] = &[
    ("PC", 4),
    ("PlayStation 5", 187),
    ("Xbox Series S/X", 186),
    ("Nintendo Switch", 7),
    ("PlayStation 4", 18),
    ("Xbox One", 1),
    ("iOS", 3),
    ("Android", 21),
];

/// Genre display name -> upstream genre id. "FPS" and "Shooter" share an id.
const GENRE_IDS: &[(&str, i64)] = &[
    ("Action", 4),
    ("Adventure", 3),
    ("RPG", 5),
    ("FPS", 2),
    ("Platformer", 83),
    ("Racing", 1),
    ("Sports", 15),
    ("Strategy", 10),
    ("Simulation", 14),
    ("Puzzle", 7),
    ("Arcade", 11),
    ("Fighting", 6),
    ("Shooter", 2),
    ("Casual", 40),
];

/* --------------------------------------------------------------------------
Lookups
-------------------------------------------------------------------------- */

/// Upstream id for a platform display name, if known.
pub fn platform_id(name: &str) -> Option<i64> {
    lookup(PLATFORM_IDS, name)
}

/// Upstream id for a genre display name, if known.
pub fn genre_id(name: &str) -> Option<i64> {
    lookup(GENRE_IDS, name)
}

fn lookup(table: &[(&str, i64)], name: &str) -> Option<i64> {
    table
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, id)| *id)
}

/* --------------------------------------------------------------------------
Query
-------------------------------------------------------------------------- */

/// A filtered, paginated catalog request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub platform: Option<String>,
    pub genre: Option<String>,
    /// Date range `YYYY-MM-DD,YYYY-MM-DD`, passed through as-is.
    pub dates: Option<String>,
    pub ordering: String,
    #[validate(range(min = 1))]
    pub page: u32,
    #[validate(range(min = 1, max = 40))]
    pub page_size: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: None,
            platform: None,
            genre: None,
            dates: None,
            ordering: DEFAULT_ORDERING.to_string(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogQuery {
    /// Query parameters for the upstream `/games` endpoint, minus the API key.
    ///
    /// Blank search strings and unrecognized platform/genre names are omitted.
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page_size", self.page_size.to_string()),
            ("page", self.page.to_string()),
            ("ordering", self.ordering.clone()),
        ];

        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(id) = self.platform.as_deref().and_then(platform_id) {
            params.push(("platforms", id.to_string()));
        }
        if let Some(id) = self.genre.as_deref().and_then(genre_id) {
            params.push(("genres", id.to_string()));
        }
        if let Some(dates) = self.dates.as_deref().filter(|d| !d.is_empty()) {
            params.push(("dates", dates.to_string()));
        }

        params
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
