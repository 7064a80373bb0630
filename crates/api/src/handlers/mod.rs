pub mod favorites;
pub mod games;
pub mod votes;

use gametracker_core::types::GameId;

/// Tag the current request span with what is being served and for whom.
fn record_request(operation: &'static str, user_id: Option<&str>, game_id: Option<GameId>) {
    let span = tracing::Span::current();
    span.record("operation", operation);
    if let Some(user_id) = user_id {
        span.record("user_id", user_id);
    }
    if let Some(game_id) = game_id {
        span.record("game_id", game_id);
    }
}
