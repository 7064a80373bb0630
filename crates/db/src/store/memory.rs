//! In-process store used when no database is configured, and in tests.
//!
//! All state sits behind one async mutex, so every operation (including the
//! vote toggle and its recount) is atomic with respect to the others.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use gametracker_core::types::GameId;
use gametracker_core::vote::{resolve_vote, VoteKind, VoteTransition};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::favorite::{CreateFavorite, Favorite};
use crate::models::game_stats::GameStats;
use crate::models::vote::{Vote, VoteOutcome};
use crate::store::{FavoriteStore, GameStatsStore, Store, StoreError, VoteStore};

#[derive(Default)]
struct Tables {
    favorites: Vec<Favorite>,
    votes: Vec<Vote>,
    game_stats: HashMap<GameId, GameStats>,
}

impl Tables {
    fn recompute(&mut self, game_id: GameId) -> GameStats {
        let (upvotes, downvotes) = self
            .votes
            .iter()
            .filter(|v| v.game_id == game_id)
            .fold((0, 0), |(up, down), v| match v.vote_type {
                VoteKind::Upvote => (up + 1, down),
                VoteKind::Downvote => (up, down + 1),
            });

        let stats = GameStats {
            game_id,
            upvotes,
            downvotes,
            total_votes: upvotes + downvotes,
            updated_at: Some(Utc::now()),
        };
        self.game_stats.insert(game_id, stats.clone());
        stats
    }

    fn insert_vote(&mut self, user_id: &str, game_id: GameId, kind: VoteKind) -> Vote {
        let now = Utc::now();
        let vote = Vote {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            game_id,
            vote_type: kind,
            created_at: now,
            updated_at: now,
        };
        self.votes.push(vote.clone());
        vote
    }

    /// Switch the kind in place; `id` and `created_at` are kept.
    fn flip_vote(&mut self, index: usize, kind: VoteKind) -> Vote {
        let vote = &mut self.votes[index];
        vote.vote_type = kind;
        vote.updated_at = Utc::now();
        vote.clone()
    }

    fn vote_index(&self, user_id: &str, game_id: GameId) -> Option<usize> {
        self.votes
            .iter()
            .position(|v| v.user_id == user_id && v.game_id == game_id)
    }
}

/// Store holding everything in process memory. Contents are lost on exit.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteStore for MemoryStore {
    async fn add_favorite(&self, input: &CreateFavorite) -> Result<Favorite, StoreError> {
        let mut tables = self.tables.lock().await;

        if let Some(existing) = tables
            .favorites
            .iter()
            .find(|f| f.user_id == input.user_id && f.game_id == input.game_id)
        {
            return Ok(existing.clone());
        }

        let favorite = Favorite {
            id: Uuid::new_v4(),
            user_id: input.user_id.clone(),
            game_id: input.game_id,
            game_name: input.game_name.clone(),
            created_at: Utc::now(),
        };
        tables.favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn remove_favorite(&self, user_id: &str, game_id: GameId) -> Result<bool, StoreError> {
        let mut tables = self.tables.lock().await;
        let before = tables.favorites.len();
        tables
            .favorites
            .retain(|f| !(f.user_id == user_id && f.game_id == game_id));
        Ok(tables.favorites.len() < before)
    }

    async fn list_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn favorite_ids(&self, user_id: &str) -> Result<HashSet<GameId>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.game_id)
            .collect())
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn cast_vote(
        &self,
        user_id: &str,
        game_id: GameId,
        kind: VoteKind,
    ) -> Result<VoteOutcome, StoreError> {
        let mut tables = self.tables.lock().await;
        let index = tables.vote_index(user_id, game_id);
        let existing = index.map(|i| tables.votes[i].vote_type);

        let outcome = match resolve_vote(existing, kind) {
            VoteTransition::Create(next) => {
                VoteOutcome::Recorded(tables.insert_vote(user_id, game_id, next))
            }
            VoteTransition::Remove => {
                if let Some(i) = index {
                    tables.votes.remove(i);
                }
                VoteOutcome::Removed
            }
            VoteTransition::Flip(next) => match index {
                Some(i) => VoteOutcome::Recorded(tables.flip_vote(i, next)),
                None => VoteOutcome::Recorded(tables.insert_vote(user_id, game_id, next)),
            },
        };

        tables.recompute(game_id);
        Ok(outcome)
    }

    async fn find_vote(&self, user_id: &str, game_id: GameId) -> Result<Option<Vote>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .vote_index(user_id, game_id)
            .map(|i| tables.votes[i].clone()))
    }

    async fn votes_by_user(&self, user_id: &str) -> Result<HashMap<GameId, VoteKind>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .votes
            .iter()
            .filter(|v| v.user_id == user_id)
            .map(|v| (v.game_id, v.vote_type))
            .collect())
    }
}

#[async_trait]
impl GameStatsStore for MemoryStore {
    async fn recompute_stats(&self, game_id: GameId) -> Result<GameStats, StoreError> {
        Ok(self.tables.lock().await.recompute(game_id))
    }

    async fn stored_stats(&self, game_ids: &[GameId]) -> Result<Vec<GameStats>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(game_ids
            .iter()
            .filter_map(|id| tables.game_stats.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
