use std::sync::Arc;

use chrono::NaiveDate;
use gametracker_core::catalog::{CatalogQuery, DEFAULT_ORDERING, MAX_PAGE_SIZE};
use gametracker_core::types::GameId;
use gametracker_core::upcoming::{is_upcoming, UpcomingWindow};
use gametracker_core::vote::VoteKind;
use gametracker_db::models::game_stats::GameStats;
use gametracker_db::store::{Store, StoreError, VoteAggregates};
use gametracker_rawg::{CatalogError, CatalogSource, RawgGame};
use serde::Serialize;

/// A catalog record plus the caller's view of it.
#[derive(Debug, Clone, Serialize)]
pub struct GameWithUserData {
    #[serde(flatten)]
    pub game: RawgGame,
    pub is_favorite: bool,
    pub user_vote: Option<VoteKind>,
    pub vote_stats: GameStats,
}

/// Failures while building enriched views.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The upstream has no game with this id.
    #[error("Game {0} not found upstream")]
    GameNotFound(GameId),
}

/// Composes catalog results with per-user state and vote aggregates.
#[derive(Clone)]
pub struct EnrichmentEngine {
    catalog: Arc<dyn CatalogSource>,
    store: Arc<dyn Store>,
    aggregates: VoteAggregates,
}

impl EnrichmentEngine {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        store: Arc<dyn Store>,
        aggregates: VoteAggregates,
    ) -> Self {
        Self {
            catalog,
            store,
            aggregates,
        }
    }

    pub fn aggregates(&self) -> &VoteAggregates {
        &self.aggregates
    }

    /// One catalog page, enriched for `user_id`, in upstream order.
    #[tracing::instrument(skip(self, query), fields(page = query.page))]
    pub async fn enrich(
        &self,
        query: &CatalogQuery,
        user_id: &str,
    ) -> Result<Vec<GameWithUserData>, EnrichError> {
        let page = self.catalog.fetch_games(query).await?;
        self.enrich_records(page.results, user_id).await
    }

    /// Games releasing within `window`, enriched for `user_id`.
    ///
    /// The upstream is asked for the window's date range, then anything
    /// without a parsable release date on or after `today` is discarded.
    #[tracing::instrument(skip(self))]
    pub async fn upcoming_games(
        &self,
        window: UpcomingWindow,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<GameWithUserData>, EnrichError> {
        let Some(range) = window.date_range(today) else {
            tracing::debug!(?window, %today, "Upcoming window lies in the past");
            return Ok(Vec::new());
        };

        let query = CatalogQuery {
            dates: Some(range.to_param()),
            ordering: DEFAULT_ORDERING.to_string(),
            page_size: MAX_PAGE_SIZE,
            ..CatalogQuery::default()
        };

        let page = self.catalog.fetch_games(&query).await?;
        let fetched = page.results.len();
        let upcoming: Vec<RawgGame> = page
            .results
            .into_iter()
            .filter(|game| is_upcoming(game.released.as_deref(), today))
            .collect();

        tracing::debug!(
            dates = %range.to_param(),
            fetched,
            kept = upcoming.len(),
            "Filtered upcoming games",
        );

        self.enrich_records(upcoming, user_id).await
    }

    /// Details for one game, enriched for `user_id`.
    #[tracing::instrument(skip(self))]
    pub async fn game_details(
        &self,
        game_id: GameId,
        user_id: &str,
    ) -> Result<GameWithUserData, EnrichError> {
        let game = self.catalog.fetch_game(game_id).await.map_err(|e| {
            if e.is_not_found() {
                EnrichError::GameNotFound(game_id)
            } else {
                EnrichError::Catalog(e)
            }
        })?;

        let mut views = self.enrich_records(vec![game], user_id).await?;
        views.pop().ok_or(EnrichError::GameNotFound(game_id))
    }

    // ---- private helpers ----

    /// Two user-scoped lookups plus one batched aggregate lookup, then a
    /// merge that keeps `games` in the order given.
    async fn enrich_records(
        &self,
        games: Vec<RawgGame>,
        user_id: &str,
    ) -> Result<Vec<GameWithUserData>, EnrichError> {
        if games.is_empty() {
            return Ok(Vec::new());
        }

        let favorites = self.store.favorite_ids(user_id).await?;
        let votes = self.store.votes_by_user(user_id).await?;

        let game_ids: Vec<GameId> = games.iter().map(|g| g.id).collect();
        let stats = self.aggregates.get_many(&game_ids).await?;

        let views = games
            .into_iter()
            .map(|game| {
                let vote_stats = stats
                    .get(&game.id)
                    .cloned()
                    .unwrap_or_else(|| self.aggregates.synthesize(game.id));
                GameWithUserData {
                    is_favorite: favorites.contains(&game.id),
                    user_vote: votes.get(&game.id).copied(),
                    vote_stats,
                    game,
                }
            })
            .collect();

        Ok(views)
    }
}
