pub mod favorites;
pub mod games;
pub mod health;
pub mod votes;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                  service banner
///
/// /games                             list (filters + user_id)
/// /games/upcoming                    upcoming releases
/// /games/{game_id}                   enriched details
/// /games/{game_id}/stats             vote aggregate
///
/// /favorites                         list (GET), add (POST)
/// /favorites/{game_id}               remove (DELETE, ?user_id=)
///
/// /votes                             cast (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::banner))
        .nest("/games", games::router())
        .nest("/favorites", favorites::router())
        .nest("/votes", votes::router())
}
