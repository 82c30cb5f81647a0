//! HTTP-level integration tests for the watchlist endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, post_json};
use sqlx::PgPool;

fn fight_club() -> serde_json::Value {
    serde_json::json!({
        "tmdb_id": 550,
        "media_type": true,
        "title": "Fight Club",
    })
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_check_remove_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/watchlist", fight_club()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert!(json["created_at"].is_string());
    assert_eq!(json["tmdb_id"], 550);
    assert_eq!(json["media_type"], true);
    assert_eq!(json["title"], "Fight Club");
    assert!(json["overview"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/watchlist", fight_club()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE_KEY");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/watchlist/550").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"in_watchlist": true}));

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/watchlist/550").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/watchlist/550").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/watchlist/550").await;
    assert_eq!(body_json(response).await, serde_json::json!({"in_watchlist": false}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_unknown_id_is_false(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/watchlist/999999").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["in_watchlist"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_round_trips_optional_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let genres = r#"[{"id":18,"name":"Drama"},{"id":10765,"name":"Sci-Fi & Fantasy"}]"#;
    let response = post_json(
        app,
        "/api/watchlist",
        serde_json::json!({
            "tmdb_id": 1399,
            "media_type": false,
            "title": "Game of Thrones",
            "original_title": "Game of Thrones",
            "overview": "Seven noble families fight for control of the mythical land of Westeros.",
            "poster_path": "/1XS1oqL89opfnbLl8WnZY1O1uJx.jpg",
            "backdrop_path": "/2OMB0ynKlyIenMJWI2Dy9IWT4c.jpg",
            "vote_average": 8.4,
            "vote_count": 21000,
            "release_date": "2011-04-17",
            "genres": genres,
            "number_of_seasons": 8,
            "number_of_episodes": 73,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["media_type"], false);
    assert_eq!(json["genres"], genres);
    assert_eq!(json["vote_average"], 8.4);
    assert_eq!(json["number_of_seasons"], 8);
    assert_eq!(json["number_of_episodes"], 73);
    assert!(json["runtime"].is_null());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/watchlist").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_newest_first(pool: PgPool) {
    for (tmdb_id, title) in [(550, "Fight Club"), (680, "Pulp Fiction"), (13, "Forrest Gump")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/watchlist",
            serde_json::json!({"tmdb_id": tmdb_id, "media_type": true, "title": title}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/watchlist").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Forrest Gump", "Pulp Fiction", "Fight Club"]);
}

// ---------------------------------------------------------------------------
// Input rejection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overlong_title_is_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/watchlist",
        serde_json::json!({"tmdb_id": 550, "media_type": true, "title": "x".repeat(501)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/watchlist/550").await;
    assert_eq!(body_json(response).await["in_watchlist"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/watchlist",
        serde_json::json!({
            "tmdb_id": 550,
            "media_type": true,
            "title": "Fight Club",
            "created_at": "1999-10-15T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("created_at"));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/watchlist").await;
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_title_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/watchlist",
        serde_json::json!({"tmdb_id": 550, "media_type": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::send(
        app,
        axum::http::Method::POST,
        "/api/watchlist",
        axum::body::Body::from("{\"tmdb_id\": 550,"),
        Some("application/json"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_tmdb_id_in_path_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/watchlist/fight-club").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("fight-club"));

    let response = delete(app, "/api/watchlist/fight-club").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
