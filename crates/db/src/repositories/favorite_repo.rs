//! Repository for the `favorites` table.

use gametracker_core::types::GameId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::favorite::{CreateFavorite, Favorite};

/// Column list for `favorites` queries.
const COLUMNS: &str = "id, user_id, game_id, game_name, created_at";

/// Provides add/remove/list operations for user favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Add a favorite, or return the existing one for the same `(user_id, game_id)`.
    ///
    /// The no-op `DO UPDATE` makes `RETURNING` yield the existing row, so a
    /// repeated add keeps the original `id`, `game_name` and `created_at`.
    pub async fn add(pool: &PgPool, input: &CreateFavorite) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (id, user_id, game_id, game_name) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, game_id) DO UPDATE SET user_id = favorites.user_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.user_id)
            .bind(input.game_id)
            .bind(&input.game_name)
            .fetch_one(pool)
            .await
    }

    /// Remove a favorite. Returns `true` if a row was deleted.
    pub async fn remove(pool: &PgPool, user_id: &str, game_id: GameId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND game_id = $2")
            .bind(user_id)
            .bind(game_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's favorites in the order they were added.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Game ids a user has favorited.
    pub async fn game_ids_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<GameId>, sqlx::Error> {
        sqlx::query_scalar::<_, GameId>("SELECT game_id FROM favorites WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
