//! Route definitions for favorites.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /                    -> list_favorites (?user_id=)
/// POST   /                    -> add_favorite
/// DELETE /{game_id}           -> remove_favorite (?user_id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/{game_id}", delete(favorites::remove_favorite))
}
