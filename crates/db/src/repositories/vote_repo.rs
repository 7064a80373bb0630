//! Repository for the `votes` table.
//!
//! Casting a vote is a read-modify-write followed by an aggregate recount.
//! Both run in one transaction that first takes a transaction-scoped
//! advisory lock keyed on the game id, so concurrent casts for the same game
//! (including a double-click by the same user) are applied one at a time.

use gametracker_core::types::GameId;
use gametracker_core::vote::{resolve_vote, VoteKind, VoteTransition};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::game_stats::GameStats;
use crate::models::vote::{Vote, VoteOutcome};
use crate::repositories::GameStatsRepo;

/// Column list for `votes` queries.
const COLUMNS: &str = "id, user_id, game_id, vote_type, created_at, updated_at";

/// Provides vote casting and lookups.
pub struct VoteRepo;

impl VoteRepo {
    /// Apply the vote toggle for `(user_id, game_id)` and recompute the
    /// game's aggregate before committing.
    pub async fn cast(
        pool: &PgPool,
        user_id: &str,
        game_id: GameId,
        kind: VoteKind,
    ) -> Result<(VoteOutcome, GameStats), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(game_id)
            .execute(&mut *tx)
            .await?;

        let existing = Self::find_on(&mut *tx, user_id, game_id).await?;

        let outcome = match resolve_vote(existing.as_ref().map(|v| v.vote_type), kind) {
            VoteTransition::Create(next) => {
                VoteOutcome::Recorded(Self::insert(&mut *tx, user_id, game_id, next).await?)
            }
            VoteTransition::Remove => {
                if let Some(current) = &existing {
                    sqlx::query("DELETE FROM votes WHERE id = $1")
                        .bind(current.id)
                        .execute(&mut *tx)
                        .await?;
                }
                VoteOutcome::Removed
            }
            VoteTransition::Flip(next) => match &existing {
                Some(current) => {
                    VoteOutcome::Recorded(Self::set_kind(&mut *tx, current.id, next).await?)
                }
                None => VoteOutcome::Recorded(Self::insert(&mut *tx, user_id, game_id, next).await?),
            },
        };

        let stats = GameStatsRepo::recompute(&mut *tx, game_id).await?;

        tx.commit().await?;
        Ok((outcome, stats))
    }

    /// Find the vote for a `(user_id, game_id)` pair.
    pub async fn find(pool: &PgPool, user_id: &str, game_id: GameId) -> Result<Option<Vote>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::find_on(&mut *conn, user_id, game_id).await
    }

    /// All votes cast by a user.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE user_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    // ---- private helpers ----

    async fn find_on(
        conn: &mut PgConnection,
        user_id: &str,
        game_id: GameId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE user_id = $1 AND game_id = $2");
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(game_id)
            .fetch_optional(conn)
            .await
    }

    async fn insert(
        conn: &mut PgConnection,
        user_id: &str,
        game_id: GameId,
        kind: VoteKind,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (id, user_id, game_id, vote_type) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(game_id)
            .bind(kind.as_str())
            .fetch_one(conn)
            .await
    }

    /// Flip the kind in place; `id` and `created_at` are untouched.
    async fn set_kind(conn: &mut PgConnection, id: Uuid, kind: VoteKind) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "UPDATE votes SET vote_type = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .bind(kind.as_str())
            .fetch_one(conn)
            .await
    }
}
