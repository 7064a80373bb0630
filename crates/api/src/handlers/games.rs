//! Handlers for catalog browsing and vote statistics.
//!
//! Every catalog response is enriched for the requesting user; requests
//! without a `user_id` are served as the anonymous user.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use gametracker_core::types::GameId;
use gametracker_core::upcoming::UpcomingWindow;
use validator::Validate;

use super::record_request;
use crate::error::AppResult;
use crate::query::{GamesParams, UpcomingParams, UserParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/games
///
/// One page of the catalog, filtered by search/platform/genre/dates.
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<GamesParams>,
) -> AppResult<impl IntoResponse> {
    record_request("list_games", params.user_id.as_deref(), None);
    let user_id = params.user_id()?;
    let query = params.to_catalog_query();
    query.validate()?;

    let games = state.engine.enrich(&query, user_id).await?;

    tracing::debug!(user_id, page = query.page, count = games.len(), "Listed games");

    Ok(Json(DataResponse { data: games }))
}

/// GET /api/games/upcoming
///
/// Games releasing in the requested window: `year=YYYY`, `year=both`, or
/// the next `days_ahead` days.
pub async fn upcoming_games(
    State(state): State<AppState>,
    Query(params): Query<UpcomingParams>,
) -> AppResult<impl IntoResponse> {
    record_request("upcoming_games", params.user_id.as_deref(), None);
    let user_id = params.user_id()?;
    let window = UpcomingWindow::from_params(params.year.as_deref(), params.days_ahead)?;
    let today = Utc::now().date_naive();

    let games = state.engine.upcoming_games(window, user_id, today).await?;

    tracing::debug!(user_id, ?window, count = games.len(), "Listed upcoming games");

    Ok(Json(DataResponse { data: games }))
}

/// GET /api/games/{game_id}
pub async fn game_details(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Query(params): Query<UserParams>,
) -> AppResult<impl IntoResponse> {
    record_request("game_details", params.user_id.as_deref(), Some(game_id));
    let user_id = params.user_id()?;
    let game = state.engine.game_details(game_id, user_id).await?;

    Ok(Json(DataResponse { data: game }))
}

/// GET /api/games/{game_id}/stats
///
/// Stored vote counts, or the baseline for a game nobody has voted on.
pub async fn game_stats(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> AppResult<impl IntoResponse> {
    record_request("game_stats", None, Some(game_id));
    let stats = state.engine.aggregates().get_one(game_id).await?;

    Ok(Json(DataResponse { data: stats }))
}
