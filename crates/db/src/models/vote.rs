//! Vote model, DTOs and the cast outcome.

use gametracker_core::types::{GameId, Timestamp};
use gametracker_core::vote::VoteKind;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A row from the `votes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Vote {
    pub id: Uuid,
    pub user_id: String,
    pub game_id: GameId,
    #[sqlx(try_from = "String")]
    pub vote_type: VoteKind,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for casting a vote.
///
/// `vote_type` stays a string here so that an unknown value is reported as a
/// validation error rather than a body deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CastVote {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub game_id: GameId,
    pub vote_type: String,
}

/// Result of casting a vote.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// A vote was created or flipped; carries the stored vote.
    Recorded(Vote),
    /// The same kind was cast again and the vote was deleted.
    Removed,
}

impl VoteOutcome {
    /// The stored vote, if one remains.
    pub fn vote(&self) -> Option<&Vote> {
        match self {
            VoteOutcome::Recorded(vote) => Some(vote),
            VoteOutcome::Removed => None,
        }
    }
}
