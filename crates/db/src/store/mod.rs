//! Store traits over favorites, votes and vote aggregates.
//!
//! The HTTP layer and the enrichment engine only see `dyn Store`, so the
//! Postgres backend ([`PgStore`]) and the in-process backend
//! ([`MemoryStore`]) are interchangeable.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use gametracker_core::types::GameId;
use gametracker_core::vote::VoteKind;

use crate::models::favorite::{CreateFavorite, Favorite};
use crate::models::game_stats::GameStats;
use crate::models::vote::{Vote, VoteOutcome};

pub mod aggregates;
pub mod memory;
pub mod postgres;

pub use aggregates::VoteAggregates;
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors surfaced by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Per-user favorite games. At most one favorite per `(user_id, game_id)`.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Add a favorite; an existing one is returned unchanged.
    async fn add_favorite(&self, input: &CreateFavorite) -> Result<Favorite, StoreError>;

    /// Remove a favorite. `false` when there was nothing to remove.
    async fn remove_favorite(&self, user_id: &str, game_id: GameId) -> Result<bool, StoreError>;

    /// A user's favorites in the order they were added.
    async fn list_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, StoreError>;

    /// Ids of the games a user has favorited.
    async fn favorite_ids(&self, user_id: &str) -> Result<HashSet<GameId>, StoreError>;
}

/// Per-user votes. At most one vote per `(user_id, game_id)`.
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Apply the vote toggle and recompute the game's aggregate before returning.
    async fn cast_vote(
        &self,
        user_id: &str,
        game_id: GameId,
        kind: VoteKind,
    ) -> Result<VoteOutcome, StoreError>;

    /// The current vote for a `(user_id, game_id)` pair.
    async fn find_vote(&self, user_id: &str, game_id: GameId) -> Result<Option<Vote>, StoreError>;

    /// A user's votes keyed by game id.
    async fn votes_by_user(&self, user_id: &str) -> Result<HashMap<GameId, VoteKind>, StoreError>;
}

/// Persisted vote aggregates.
#[async_trait]
pub trait GameStatsStore: Send + Sync {
    /// Recount votes for `game_id` and persist the aggregate.
    async fn recompute_stats(&self, game_id: GameId) -> Result<GameStats, StoreError>;

    /// Stored aggregates for the given games; games never voted on are absent.
    async fn stored_stats(&self, game_ids: &[GameId]) -> Result<Vec<GameStats>, StoreError>;
}

/// A complete store backend.
#[async_trait]
pub trait Store: FavoriteStore + VoteStore + GameStatsStore {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Confirm the backend can serve requests.
    async fn health_check(&self) -> Result<(), StoreError>;
}
