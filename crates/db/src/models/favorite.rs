//! Favorite model and DTOs.

use gametracker_core::types::{GameId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A row from the `favorites` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: String,
    pub game_id: GameId,
    pub game_name: String,
    pub created_at: Timestamp,
}

/// DTO for adding a favorite.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFavorite {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub game_id: GameId,
    #[validate(length(min = 1, max = 512))]
    pub game_name: String,
}
