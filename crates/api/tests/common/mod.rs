//! Shared setup for the HTTP integration tests.
//!
//! Apps are built with the production router and middleware stack over an
//! in-memory store and a stub catalog, so no database or network is needed.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Days, Utc};
use gametracker_api::config::ServerConfig;
use gametracker_api::router::build_app_router;
use gametracker_api::state::AppState;
use gametracker_core::catalog::CatalogQuery;
use gametracker_core::types::GameId;
use gametracker_core::vote::VoteKind;
use gametracker_db::models::favorite::{CreateFavorite, Favorite};
use gametracker_db::models::game_stats::GameStats;
use gametracker_db::models::vote::{Vote, VoteOutcome};
use gametracker_db::store::{
    FavoriteStore, GameStatsStore, MemoryStore, Store, StoreError, VoteStore,
};
use gametracker_rawg::{CatalogError, CatalogSource, RawgConfig, RawgGame, RawgPage};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Stub catalog
// ---------------------------------------------------------------------------

/// Serves a fixed list of games, or fails every request.
pub struct StubCatalog {
    games: Vec<RawgGame>,
    fail_with_status: Option<u16>,
    /// Every list query received, in order.
    pub seen: Mutex<Vec<CatalogQuery>>,
}

impl StubCatalog {
    pub fn with_games(games: Vec<RawgGame>) -> Self {
        Self {
            games,
            fail_with_status: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            games: Vec::new(),
            fail_with_status: Some(status),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failure(&self) -> Option<CatalogError> {
        self.fail_with_status.map(|status| CatalogError::ApiError {
            status,
            body: "upstream exploded".into(),
        })
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    async fn fetch_games(&self, query: &CatalogQuery) -> Result<RawgPage<RawgGame>, CatalogError> {
        self.seen.lock().unwrap().push(query.clone());
        if let Some(err) = self.failure() {
            return Err(err);
        }
        Ok(RawgPage {
            count: self.games.len() as u64,
            next: None,
            previous: None,
            results: self.games.clone(),
        })
    }

    async fn fetch_game(&self, game_id: GameId) -> Result<RawgGame, CatalogError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.games
            .iter()
            .find(|g| g.id == game_id)
            .cloned()
            .ok_or(CatalogError::ApiError {
                status: 404,
                body: "{\"detail\":\"Not found.\"}".into(),
            })
    }
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every operation fails as if the pool were exhausted.
pub struct FailingStore;

fn pool_timeout() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl FavoriteStore for FailingStore {
    async fn add_favorite(&self, _input: &CreateFavorite) -> Result<Favorite, StoreError> {
        Err(pool_timeout())
    }

    async fn remove_favorite(&self, _user_id: &str, _game_id: GameId) -> Result<bool, StoreError> {
        Err(pool_timeout())
    }

    async fn list_favorites(&self, _user_id: &str) -> Result<Vec<Favorite>, StoreError> {
        Err(pool_timeout())
    }

    async fn favorite_ids(&self, _user_id: &str) -> Result<HashSet<GameId>, StoreError> {
        Err(pool_timeout())
    }
}

#[async_trait]
impl VoteStore for FailingStore {
    async fn cast_vote(
        &self,
        _user_id: &str,
        _game_id: GameId,
        _kind: VoteKind,
    ) -> Result<VoteOutcome, StoreError> {
        Err(pool_timeout())
    }

    async fn find_vote(&self, _user_id: &str, _game_id: GameId) -> Result<Option<Vote>, StoreError> {
        Err(pool_timeout())
    }

    async fn votes_by_user(&self, _user_id: &str) -> Result<HashMap<GameId, VoteKind>, StoreError> {
        Err(pool_timeout())
    }
}

#[async_trait]
impl GameStatsStore for FailingStore {
    async fn recompute_stats(&self, _game_id: GameId) -> Result<GameStats, StoreError> {
        Err(pool_timeout())
    }

    async fn stored_stats(&self, _game_ids: &[GameId]) -> Result<Vec<GameStats>, StoreError> {
        Err(pool_timeout())
    }
}

#[async_trait]
impl Store for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(pool_timeout())
    }
}

pub fn game(id: GameId, name: &str, released: Option<&str>) -> RawgGame {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "released": released,
        "background_image": format!("https://media.rawg.io/{id}.jpg"),
        "rating": 4.2,
        "platforms": [{ "platform": { "id": 4, "name": "PC", "slug": "pc" } }],
        "genres": [{ "id": 4, "name": "Action", "slug": "action" }]
    }))
    .unwrap()
}

/// `today + days` as `YYYY-MM-DD`; negative values go into the past.
pub fn days_from_today(days: i64) -> String {
    let today = Utc::now().date_naive();
    let date = if days >= 0 {
        today.checked_add_days(Days::new(days as u64))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    date.unwrap().format("%Y-%m-%d").to_string()
}

/// The default catalog: two released games and a mix of upcoming ones.
pub fn default_games() -> Vec<RawgGame> {
    vec![
        game(3498, "Grand Theft Auto V", Some("2013-09-17")),
        game(4200, "Portal 2", Some("2011-04-18")),
        game(9001, "Future Quest", Some(&days_from_today(30))),
        game(9002, "Yesterday Saga", Some(&days_from_today(-1))),
        game(9003, "Someday", None),
    ]
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        baseline_stats: true,
        rawg: RawgConfig {
            api_key: Some("test-key".into()),
            base_url: "http://rawg.invalid".into(),
            timeout: Duration::from_secs(1),
        },
    }
}

/// Build the full application router over the given catalog.
pub fn build_app_with(catalog: Arc<StubCatalog>, config: ServerConfig) -> Router {
    build_app_over(Arc::new(MemoryStore::new()), catalog, config)
}

/// Build the full application router over the given store and catalog.
pub fn build_app_over(
    store: Arc<dyn Store>,
    catalog: Arc<StubCatalog>,
    config: ServerConfig,
) -> Router {
    let state = AppState::new(store, catalog, config.clone());
    build_app_router(state, &config)
}

/// The default catalog served over a store that always fails.
pub fn build_failing_store_app() -> Router {
    build_app_over(
        Arc::new(FailingStore),
        Arc::new(StubCatalog::with_games(default_games())),
        test_config(),
    )
}

/// Build the full application router over the default catalog.
pub fn build_test_app() -> Router {
    build_app_with(
        Arc::new(StubCatalog::with_games(default_games())),
        test_config(),
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
