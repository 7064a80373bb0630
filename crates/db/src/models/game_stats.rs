//! Vote aggregate model.

use gametracker_core::baseline::BaselineCounts;
use gametracker_core::types::{GameId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `game_stats` table, or a synthesized baseline for a game
/// that has never been voted on.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GameStats {
    pub game_id: GameId,
    pub upvotes: i64,
    pub downvotes: i64,
    pub total_votes: i64,
    /// When the stored row was last recounted; `None` for a baseline.
    pub updated_at: Option<Timestamp>,
}

impl GameStats {
    /// Build an aggregate from baseline counts. Never persisted.
    pub fn from_baseline(game_id: GameId, counts: BaselineCounts) -> Self {
        Self {
            game_id,
            upvotes: counts.upvotes,
            downvotes: counts.downvotes,
            total_votes: counts.total(),
            updated_at: None,
        }
    }
}
