//! Shared query parameter types for API handlers.

use gametracker_core::catalog::{CatalogQuery, DEFAULT_ORDERING, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use gametracker_core::error::CoreError;
use gametracker_core::types::ANONYMOUS_USER;
use gametracker_core::validation::validate_user_id;
use serde::Deserialize;

/// Optional `?user_id=`; requests without one act as the anonymous user.
#[derive(Debug, Default, Deserialize)]
pub struct UserParams {
    pub user_id: Option<String>,
}

impl UserParams {
    /// The effective, validated user id.
    pub fn user_id(&self) -> Result<&str, CoreError> {
        resolve_user(self.user_id.as_deref())
    }
}

/// Mandatory `?user_id=`.
#[derive(Debug, Deserialize)]
pub struct RequiredUserParams {
    pub user_id: String,
}

/// `GET /api/games` filters.
#[derive(Debug, Default, Deserialize)]
pub struct GamesParams {
    pub search: Option<String>,
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub dates: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub user_id: Option<String>,
}

impl GamesParams {
    pub fn user_id(&self) -> Result<&str, CoreError> {
        resolve_user(self.user_id.as_deref())
    }

    /// Upstream query with defaults applied. Not yet validated.
    pub fn to_catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            platform: self.platform.clone(),
            genre: self.genre.clone(),
            dates: self.dates.clone(),
            ordering: self
                .ordering
                .clone()
                .filter(|o| !o.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ORDERING.to_string()),
            page: self.page.unwrap_or(DEFAULT_PAGE),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// `GET /api/games/upcoming` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct UpcomingParams {
    pub user_id: Option<String>,
    pub days_ahead: Option<u64>,
    pub year: Option<String>,
}

impl UpcomingParams {
    pub fn user_id(&self) -> Result<&str, CoreError> {
        resolve_user(self.user_id.as_deref())
    }
}

fn resolve_user(user_id: Option<&str>) -> Result<&str, CoreError> {
    let user_id = user_id.unwrap_or(ANONYMOUS_USER);
    validate_user_id(user_id)?;
    Ok(user_id)
}
