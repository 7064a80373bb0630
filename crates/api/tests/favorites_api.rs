//! Integration tests for the favorites endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;

#[tokio::test]
async fn add_favorite_is_idempotent() {
    let app = common::build_test_app();
    let body = json!({ "user_id": "u1", "game_id": 42, "game_name": "X" });

    let first = post_json(app.clone(), "/api/favorites", body.clone()).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;
    assert_eq!(first["data"]["message"], "Game added to favorites");

    let second = body_json(post_json(app.clone(), "/api/favorites", body).await).await;
    assert_eq!(
        first["data"]["favorite"]["id"],
        second["data"]["favorite"]["id"]
    );

    let list = body_json(get(app, "/api/favorites?user_id=u1").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn remove_favorite_then_remove_again_is_404() {
    let app = common::build_test_app();
    post_json(
        app.clone(),
        "/api/favorites",
        json!({ "user_id": "u1", "game_id": 42, "game_name": "X" }),
    )
    .await;

    let removed = delete(app.clone(), "/api/favorites/42?user_id=u1").await;
    assert_eq!(removed.status(), StatusCode::OK);
    assert_eq!(
        body_json(removed).await["data"]["message"],
        "Game removed from favorites"
    );

    let again = delete(app, "/api/favorites/42?user_id=u1").await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    let json = body_json(again).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Favorite with id 42 not found");
}

#[tokio::test]
async fn favorites_are_listed_per_user_in_creation_order() {
    let app = common::build_test_app();
    for (user, game) in [("u1", 1), ("u2", 2), ("u1", 3)] {
        post_json(
            app.clone(),
            "/api/favorites",
            json!({ "user_id": user, "game_id": game, "game_name": format!("Game {game}") }),
        )
        .await;
    }

    let json = body_json(get(app, "/api/favorites?user_id=u1").await).await;
    let games: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["game_id"].as_i64().unwrap())
        .collect();
    assert_eq!(games, vec![1, 3]);
}

#[tokio::test]
async fn blank_user_id_is_rejected() {
    let app = common::build_test_app();

    let response = post_json(
        app.clone(),
        "/api/favorites",
        json!({ "user_id": "   ", "game_id": 1, "game_name": "X" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        app,
        "/api/favorites",
        json!({ "user_id": "u1", "game_id": 1, "game_name": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_requires_user_id() {
    let response = get(common::build_test_app(), "/api/favorites").await;

    assert!(response.status().is_client_error());
}
