use axum::routing::post;
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Routes mounted at `/votes`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(votes::cast_vote))
}
