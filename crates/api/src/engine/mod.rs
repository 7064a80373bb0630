//! Enrichment engine.
//!
//! Merges catalog pages from the upstream with the caller's favorites, votes
//! and the per-game vote aggregates.

pub mod enrichment;

pub use enrichment::{EnrichError, EnrichmentEngine, GameWithUserData};
