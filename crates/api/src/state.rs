use std::sync::Arc;

use gametracker_core::baseline::{BaselineStatsGenerator, HashedBaseline, NoBaseline};
use gametracker_db::store::{Store, VoteAggregates};
use gametracker_rawg::CatalogSource;

use crate::config::ServerConfig;
use crate::engine::EnrichmentEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Favorites, votes and aggregates.
    pub store: Arc<dyn Store>,
    /// Catalog lookups merged with per-user state.
    pub engine: Arc<EnrichmentEngine>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the engine and aggregates over an already-built store and catalog.
    pub fn new(
        store: Arc<dyn Store>,
        catalog: Arc<dyn CatalogSource>,
        config: ServerConfig,
    ) -> Self {
        let baseline: Arc<dyn BaselineStatsGenerator> = if config.baseline_stats {
            Arc::new(HashedBaseline)
        } else {
            Arc::new(NoBaseline)
        };
        let aggregates = VoteAggregates::new(Arc::clone(&store), baseline);
        let engine = EnrichmentEngine::new(catalog, Arc::clone(&store), aggregates);

        Self {
            store,
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}
