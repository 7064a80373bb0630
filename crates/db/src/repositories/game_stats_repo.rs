//! Repository for the `game_stats` table.

use gametracker_core::types::GameId;
use sqlx::{PgConnection, PgPool};

use crate::models::game_stats::GameStats;

/// Column list for `game_stats` queries.
const COLUMNS: &str = "game_id, upvotes, downvotes, total_votes, updated_at";

/// Reads and recomputes per-game vote aggregates.
pub struct GameStatsRepo;

impl GameStatsRepo {
    /// Recount the votes for `game_id` and upsert the aggregate row.
    ///
    /// A full recount, so running it again for the same state is harmless.
    /// Takes a connection so it can run inside the caller's transaction.
    pub async fn recompute(conn: &mut PgConnection, game_id: GameId) -> Result<GameStats, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_stats (game_id, upvotes, downvotes, total_votes, updated_at) \
             SELECT $1::BIGINT, \
                    COUNT(*) FILTER (WHERE vote_type = 'upvote'), \
                    COUNT(*) FILTER (WHERE vote_type = 'downvote'), \
                    COUNT(*) FILTER (WHERE vote_type IN ('upvote', 'downvote')), \
                    NOW() \
             FROM votes WHERE game_id = $1::BIGINT \
             ON CONFLICT (game_id) DO UPDATE SET \
                 upvotes = EXCLUDED.upvotes, \
                 downvotes = EXCLUDED.downvotes, \
                 total_votes = EXCLUDED.total_votes, \
                 updated_at = EXCLUDED.updated_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameStats>(&query)
            .bind(game_id)
            .fetch_one(conn)
            .await
    }

    /// Stored aggregates for the given games. Games without a row are absent.
    pub async fn find_many(pool: &PgPool, game_ids: &[GameId]) -> Result<Vec<GameStats>, sqlx::Error> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM game_stats WHERE game_id = ANY($1)");
        sqlx::query_as::<_, GameStats>(&query)
            .bind(game_ids)
            .fetch_all(pool)
            .await
    }
}
