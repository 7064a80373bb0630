//! Read side of the vote aggregates.
//!
//! Stored aggregates win; any game without one gets a baseline from the
//! configured [`BaselineStatsGenerator`]. Baselines are never written back.

use std::collections::HashMap;
use std::sync::Arc;

use gametracker_core::baseline::BaselineStatsGenerator;
use gametracker_core::types::GameId;

use crate::models::game_stats::GameStats;
use crate::store::{Store, StoreError};

/// Batched aggregate lookups with baseline synthesis.
#[derive(Clone)]
pub struct VoteAggregates {
    store: Arc<dyn Store>,
    baseline: Arc<dyn BaselineStatsGenerator>,
}

impl VoteAggregates {
    pub fn new(store: Arc<dyn Store>, baseline: Arc<dyn BaselineStatsGenerator>) -> Self {
        Self { store, baseline }
    }

    /// Aggregates for every id in `game_ids`, in one store round trip.
    pub async fn get_many(&self, game_ids: &[GameId]) -> Result<HashMap<GameId, GameStats>, StoreError> {
        let stored = self.store.stored_stats(game_ids).await?;
        Ok(merge_with_baseline(stored, game_ids, self.baseline.as_ref()))
    }

    /// Aggregate for a single game.
    pub async fn get_one(&self, game_id: GameId) -> Result<GameStats, StoreError> {
        let mut stats = self.get_many(&[game_id]).await?;
        Ok(stats
            .remove(&game_id)
            .unwrap_or_else(|| self.synthesize(game_id)))
    }

    /// Baseline aggregate for a game with no stored counts.
    pub fn synthesize(&self, game_id: GameId) -> GameStats {
        GameStats::from_baseline(game_id, self.baseline.baseline(game_id))
    }
}

/// Key stored aggregates by game id and synthesize the missing ones.
pub fn merge_with_baseline(
    stored: Vec<GameStats>,
    game_ids: &[GameId],
    baseline: &dyn BaselineStatsGenerator,
) -> HashMap<GameId, GameStats> {
    let mut stats: HashMap<GameId, GameStats> =
        stored.into_iter().map(|s| (s.game_id, s)).collect();

    for &game_id in game_ids {
        stats
            .entry(game_id)
            .or_insert_with(|| GameStats::from_baseline(game_id, baseline.baseline(game_id)));
    }

    stats
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use gametracker_core::baseline::{HashedBaseline, NoBaseline};

    use super::*;

    fn stored(game_id: GameId, up: i64, down: i64) -> GameStats {
        GameStats {
            game_id,
            upvotes: up,
            downvotes: down,
            total_votes: up + down,
            updated_at: Some(Utc::now()),
        }
    }

    #[test]
    fn stored_aggregates_take_precedence() {
        let merged = merge_with_baseline(vec![stored(7, 1, 0)], &[7, 8], &HashedBaseline);

        assert_eq!(merged[&7].upvotes, 1);
        assert_eq!(merged[&7].total_votes, 1);
        assert!(merged[&7].updated_at.is_some());

        let synthesized = &merged[&8];
        assert!(synthesized.upvotes >= 10);
        assert_eq!(synthesized.updated_at, None);
    }

    #[test]
    fn zero_stored_aggregate_is_not_replaced_by_baseline() {
        let merged = merge_with_baseline(vec![stored(9, 0, 0)], &[9], &HashedBaseline);
        assert_eq!(merged[&9].total_votes, 0);
    }

    #[test]
    fn disabled_baseline_synthesizes_zeros() {
        let merged = merge_with_baseline(Vec::new(), &[1, 2], &NoBaseline);
        assert_eq!(merged.len(), 2);
        assert!(merged.values().all(|s| s.total_votes == 0));
    }

    #[test]
    fn synthesized_aggregate_is_identical_across_calls() {
        let first = merge_with_baseline(Vec::new(), &[77], &HashedBaseline);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = merge_with_baseline(Vec::new(), &[77], &HashedBaseline);
        assert_eq!(first, second);
    }
}
