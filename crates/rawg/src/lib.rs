//! Client for the RAWG game catalog.
//!
//! [`RawgApi`] talks to the upstream over HTTP; the rest of the backend only
//! depends on the [`CatalogSource`] trait so tests can substitute a fixed
//! catalog.

pub mod api;
pub mod models;

use async_trait::async_trait;
use gametracker_core::catalog::CatalogQuery;
use gametracker_core::types::GameId;

pub use api::{CatalogError, RawgApi, RawgConfig};
pub use models::{RawgGame, RawgGenre, RawgPage, RawgPlatform, RawgPlatformEntry};

/// A source of catalog records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// One page of games matching `query`.
    async fn fetch_games(&self, query: &CatalogQuery) -> Result<RawgPage<RawgGame>, CatalogError>;

    /// A single game with its detail fields.
    async fn fetch_game(&self, game_id: GameId) -> Result<RawgGame, CatalogError>;
}

#[async_trait]
impl CatalogSource for RawgApi {
    async fn fetch_games(&self, query: &CatalogQuery) -> Result<RawgPage<RawgGame>, CatalogError> {
        RawgApi::fetch_games(self, query).await
    }

    async fn fetch_game(&self, game_id: GameId) -> Result<RawgGame, CatalogError> {
        RawgApi::fetch_game(self, game_id).await
    }
}
