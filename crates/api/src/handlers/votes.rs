//! Handler for casting votes.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gametracker_core::validation::validate_user_id;
use gametracker_core::vote::VoteKind;
use gametracker_db::models::vote::{CastVote, Vote, VoteOutcome};
use serde::Serialize;
use validator::Validate;

use super::record_request;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VoteResult {
    pub message: &'static str,
    /// The stored vote, or `null` when the cast removed it.
    pub vote: Option<Vote>,
}

/// POST /api/votes
///
/// Casting the same kind twice removes the vote; casting the opposite kind
/// flips it. The game's aggregate is recomputed before this returns.
pub async fn cast_vote(
    State(state): State<AppState>,
    Json(input): Json<CastVote>,
) -> AppResult<impl IntoResponse> {
    record_request("cast_vote", Some(&input.user_id), Some(input.game_id));
    input.validate()?;
    validate_user_id(&input.user_id)?;
    let kind: VoteKind = input.vote_type.parse()?;

    let outcome = state
        .store
        .cast_vote(&input.user_id, input.game_id, kind)
        .await?;

    let (message, vote) = match outcome {
        VoteOutcome::Recorded(vote) => ("Vote recorded", Some(vote)),
        VoteOutcome::Removed => ("Vote removed", None),
    };

    tracing::info!(
        user_id = %input.user_id,
        game_id = input.game_id,
        vote_type = %kind,
        outcome = message,
        "Vote cast",
    );

    Ok(Json(DataResponse {
        data: VoteResult { message, vote },
    }))
}
