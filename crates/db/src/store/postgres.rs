//! Postgres-backed store delegating to the repositories.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use gametracker_core::types::GameId;
use gametracker_core::vote::VoteKind;

use crate::models::favorite::{CreateFavorite, Favorite};
use crate::models::game_stats::GameStats;
use crate::models::vote::{Vote, VoteOutcome};
use crate::repositories::{FavoriteRepo, GameStatsRepo, VoteRepo};
use crate::store::{FavoriteStore, GameStatsStore, Store, StoreError, VoteStore};
use crate::DbPool;

/// Store backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteStore for PgStore {
    async fn add_favorite(&self, input: &CreateFavorite) -> Result<Favorite, StoreError> {
        Ok(FavoriteRepo::add(&self.pool, input).await?)
    }

    async fn remove_favorite(&self, user_id: &str, game_id: GameId) -> Result<bool, StoreError> {
        Ok(FavoriteRepo::remove(&self.pool, user_id, game_id).await?)
    }

    async fn list_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, StoreError> {
        Ok(FavoriteRepo::list_by_user(&self.pool, user_id).await?)
    }

    async fn favorite_ids(&self, user_id: &str) -> Result<HashSet<GameId>, StoreError> {
        let ids = FavoriteRepo::game_ids_by_user(&self.pool, user_id).await?;
        Ok(ids.into_iter().collect())
    }
}

#[async_trait]
impl VoteStore for PgStore {
    async fn cast_vote(
        &self,
        user_id: &str,
        game_id: GameId,
        kind: VoteKind,
    ) -> Result<VoteOutcome, StoreError> {
        let (outcome, stats) = VoteRepo::cast(&self.pool, user_id, game_id, kind).await?;
        tracing::debug!(
            game_id,
            upvotes = stats.upvotes,
            downvotes = stats.downvotes,
            "Vote aggregate recomputed",
        );
        Ok(outcome)
    }

    async fn find_vote(&self, user_id: &str, game_id: GameId) -> Result<Option<Vote>, StoreError> {
        Ok(VoteRepo::find(&self.pool, user_id, game_id).await?)
    }

    async fn votes_by_user(&self, user_id: &str) -> Result<HashMap<GameId, VoteKind>, StoreError> {
        let votes = VoteRepo::list_by_user(&self.pool, user_id).await?;
        Ok(votes.into_iter().map(|v| (v.game_id, v.vote_type)).collect())
    }
}

#[async_trait]
impl GameStatsStore for PgStore {
    async fn recompute_stats(&self, game_id: GameId) -> Result<GameStats, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(GameStatsRepo::recompute(&mut *conn, game_id).await?)
    }

    async fn stored_stats(&self, game_ids: &[GameId]) -> Result<Vec<GameStats>, StoreError> {
        Ok(GameStatsRepo::find_many(&self.pool, game_ids).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
