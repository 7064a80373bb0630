//! Route definitions for catalog browsing.

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /                    -> list_games
/// GET    /upcoming            -> upcoming_games
/// GET    /{game_id}           -> game_details
/// GET    /{game_id}/stats     -> game_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_games))
        .route("/upcoming", get(games::upcoming_games))
        .route("/{game_id}", get(games::game_details))
        .route("/{game_id}/stats", get(games::game_stats))
}
