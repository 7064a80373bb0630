//! Handlers for per-user favorites.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gametracker_core::error::CoreError;
use gametracker_core::types::GameId;
use gametracker_core::validation::validate_user_id;
use gametracker_db::models::favorite::{CreateFavorite, Favorite};
use serde::Serialize;
use validator::Validate;

use super::record_request;
use crate::error::{AppError, AppResult};
use crate::query::RequiredUserParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FavoriteAdded {
    pub message: &'static str,
    pub favorite: Favorite,
}

#[derive(Debug, Serialize)]
pub struct FavoriteRemoved {
    pub message: &'static str,
}

/// POST /api/favorites
///
/// Adding a game that is already a favorite returns the existing record.
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(input): Json<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    record_request("add_favorite", Some(&input.user_id), Some(input.game_id));
    input.validate()?;
    validate_user_id(&input.user_id)?;

    let favorite = state.store.add_favorite(&input).await?;

    tracing::info!(
        user_id = %favorite.user_id,
        game_id = favorite.game_id,
        "Favorite added",
    );

    Ok(Json(DataResponse {
        data: FavoriteAdded {
            message: "Game added to favorites",
            favorite,
        },
    }))
}

/// DELETE /api/favorites/{game_id}?user_id=
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Query(params): Query<RequiredUserParams>,
) -> AppResult<impl IntoResponse> {
    record_request("remove_favorite", Some(&params.user_id), Some(game_id));
    validate_user_id(&params.user_id)?;

    let removed = state.store.remove_favorite(&params.user_id, game_id).await?;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: game_id,
        }));
    }

    tracing::info!(user_id = %params.user_id, game_id, "Favorite removed");

    Ok(Json(DataResponse {
        data: FavoriteRemoved {
            message: "Game removed from favorites",
        },
    }))
}

/// GET /api/favorites?user_id=
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(params): Query<RequiredUserParams>,
) -> AppResult<impl IntoResponse> {
    record_request("list_favorites", Some(&params.user_id), None);
    validate_user_id(&params.user_id)?;

    let favorites = state.store.list_favorites(&params.user_id).await?;

    Ok(Json(DataResponse { data: favorites }))
}
