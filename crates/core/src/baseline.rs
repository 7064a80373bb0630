//! Baseline vote counts for games nobody has voted on yet.
//!
//! A game without a stored aggregate is shown with a plausible, non-zero
//! baseline instead of all zeros. The baseline is derived from the game id
//! alone, so every request (and every process) sees the same numbers until a
//! real vote is recorded and the stored aggregate takes over.

use sha2::{Digest, Sha256};

use crate::types::GameId;

/// Upvote baseline lower bound.
const BASE_UPVOTES_MIN: u64 = 10;

/// Width of the upvote baseline range (10..=59).
const BASE_UPVOTES_SPAN: u64 = 50;

/// Downvote baseline lower bound.
const BASE_DOWNVOTES_MIN: u64 = 2;

/// Width of the downvote baseline range (2..=16).
const BASE_DOWNVOTES_SPAN: u64 = 15;

/// Offset applied to the id before hashing the downvote baseline, so the two
/// counts are not derived from the same digest.
const DOWNVOTE_SALT: GameId = 1000;

/// Synthesized up/down counts for a game with no stored aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BaselineCounts {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl BaselineCounts {
    pub fn total(&self) -> i64 {
        self.upvotes + self.downvotes
    }
}

/// Source of baseline counts for unvoted games.
pub trait BaselineStatsGenerator: Send + Sync {
    /// Baseline for `game_id`. Must return the same value for the same id.
    fn baseline(&self, game_id: GameId) -> BaselineCounts;
}

/// Digest-derived baseline: upvotes in 10..=59, downvotes in 2..=16.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedBaseline;

impl BaselineStatsGenerator for HashedBaseline {
    fn baseline(&self, game_id: GameId) -> BaselineCounts {
        let up = digest_u64(game_id) % BASE_UPVOTES_SPAN + BASE_UPVOTES_MIN;
        let down = digest_u64(game_id.saturating_add(DOWNVOTE_SALT)) % BASE_DOWNVOTES_SPAN
            + BASE_DOWNVOTES_MIN;

        BaselineCounts {
            upvotes: up as i64,
            downvotes: down as i64,
        }
    }
}

/// Baseline disabled: unvoted games report zero votes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBaseline;

impl BaselineStatsGenerator for NoBaseline {
    fn baseline(&self, _game_id: GameId) -> BaselineCounts {
        BaselineCounts::default()
    }
}

/// First eight bytes (big-endian) of the SHA-256 of the decimal id.
fn digest_u64(value: GameId) -> u64 {
    let digest = Sha256::digest(value.to_string().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
