//! Vote kinds and the per-user toggle rule.
//!
//! A user holds at most one vote per game. Casting a vote moves through a
//! three-state toggle: none -> kind, kind -> none (same kind repeated),
//! kind -> other kind (opposite kind cast).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Wire value for an upvote.
pub const UPVOTE: &str = "upvote";

/// Wire value for a downvote.
pub const DOWNVOTE: &str = "downvote";

/// The two accepted vote values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Upvote,
    Downvote,
}

impl VoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VoteKind::Upvote => UPVOTE,
            VoteKind::Downvote => DOWNVOTE,
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UPVOTE => Ok(VoteKind::Upvote),
            DOWNVOTE => Ok(VoteKind::Downvote),
            other => Err(CoreError::Validation(format!(
                "Vote type must be '{UPVOTE}' or '{DOWNVOTE}' (got '{other}')"
            ))),
        }
    }
}

impl TryFrom<String> for VoteKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What a cast vote does to the stored vote for one `(user, game)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// No vote existed: insert one with the cast kind.
    Create(VoteKind),
    /// The same kind was cast again: delete the stored vote.
    Remove,
    /// The opposite kind was cast: flip in place, keeping id and `created_at`.
    Flip(VoteKind),
}

/// Decide the transition for `cast` given the currently stored kind.
pub fn resolve_vote(existing: Option<VoteKind>, cast: VoteKind) -> VoteTransition {
    match existing {
        None => VoteTransition::Create(cast),
        Some(current) if current == cast => VoteTransition::Remove,
        Some(_) => VoteTransition::Flip(cast),
    }
}
