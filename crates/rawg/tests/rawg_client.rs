//! Integration tests for the RAWG client against a local stand-in upstream.

use std::collections::HashMap;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use gametracker_core::catalog::CatalogQuery;
use gametracker_rawg::{CatalogError, CatalogSource, RawgApi, RawgConfig};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Echo the received query string back inside the first result's name so
/// tests can assert on what was sent.
async fn list_games(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if params.get("key").map(String::as_str) != Some("test-key") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "The key parameter is not provided" })),
        );
    }

    let mut keys: Vec<_> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    keys.sort();

    (
        StatusCode::OK,
        Json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{ "id": 1, "name": keys.join("&"), "slug": "echo" }]
        })),
    )
}

async fn game_detail(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    match id {
        3498 => (
            StatusCode::OK,
            Json(json!({
                "id": 3498,
                "name": "Grand Theft Auto V",
                "slug": "grand-theft-auto-v",
                "released": "2013-09-17",
                "description_raw": "Rockstar Games went bigger."
            })),
        ),
        13 => (StatusCode::OK, Json(json!({ "unexpected": true }))),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))),
    }
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "count": 0, "results": [] }))
}

/// Serve a stand-in upstream on an ephemeral port and return its base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/games", get(list_games))
        .route("/games/{id}", get(game_detail))
        .route("/slow/games", get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String, api_key: Option<&str>) -> RawgApi {
    RawgApi::new(RawgConfig {
        api_key: api_key.map(str::to_string),
        base_url,
        timeout: Duration::from_millis(500),
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_games_sends_key_paging_and_filters() {
    let api = client(spawn_upstream().await, Some("test-key"));
    let query = CatalogQuery {
        search: Some("zelda".into()),
        platform: Some("Nintendo Switch".into()),
        genre: Some("All Genres".into()),
        ..CatalogQuery::default()
    };

    let page = api.fetch_games(&query).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(
        page.results[0].name,
        "key=test-key&ordering=released&page=1&page_size=20&platforms=7&search=zelda"
    );
}

#[tokio::test]
async fn missing_key_surfaces_upstream_rejection() {
    let api = client(spawn_upstream().await, None);

    let err = api.fetch_games(&CatalogQuery::default()).await.unwrap_err();

    assert_matches!(err, CatalogError::ApiError { status: 401, ref body } if body.contains("key"));
}

#[tokio::test]
async fn fetch_game_returns_details() {
    let api = client(spawn_upstream().await, Some("test-key"));

    let game = CatalogSource::fetch_game(&api, 3498).await.unwrap();

    assert_eq!(game.slug, "grand-theft-auto-v");
    assert_eq!(game.description_raw.as_deref(), Some("Rockstar Games went bigger."));
}

#[tokio::test]
async fn unknown_game_is_not_found() {
    let api = client(spawn_upstream().await, Some("test-key"));

    let err = api.fetch_game(99).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let api = client(spawn_upstream().await, Some("test-key"));

    let err = api.fetch_game(13).await.unwrap_err();

    assert_matches!(err, CatalogError::Decode(_));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let api = client(format!("{}/slow", spawn_upstream().await), Some("test-key"));

    let err = api.fetch_games(&CatalogQuery::default()).await.unwrap_err();

    assert_matches!(err, CatalogError::Timeout(d) if d == Duration::from_millis(500));
}

#[tokio::test]
async fn unreachable_upstream_is_a_request_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(format!("http://{addr}"), Some("test-key"));
    let err = api.fetch_games(&CatalogQuery::default()).await.unwrap_err();

    assert_matches!(err, CatalogError::Request(_));
    assert!(!err.to_string().contains("test-key"));
}
