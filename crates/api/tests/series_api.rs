//! Integration tests for the `/api/v1/series` CRUD surface.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send, send_json};
use serde_json::json;
use sqlx::PgPool;

fn series_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "series_type": "podcast",
        "category": "Tech",
        "language": "en",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn series_crud_flow(pool: PgPool) {
    // Create.
    let response = send_json(
        common::build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/series",
        &series_body("Tech Talk"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["title"], "Tech Talk");
    assert_eq!(created["description"], "");
    assert_eq!(created["is_published"], false);

    // Read, with the (empty) episode collection resolved.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/series/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["title"], "Tech Talk");
    assert_eq!(fetched["episodes"], json!([]));

    // Partial update: untouched fields keep their values.
    let response = send_json(
        common::build_test_app(pool.clone()),
        Method::PUT,
        &format!("/api/v1/series/{id}"),
        &json!({ "title": "Tech Talk Weekly", "is_published": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Tech Talk Weekly");
    assert_eq!(updated["category"], "Tech");
    assert_eq!(updated["is_published"], true);

    // Delete, then the id is gone.
    let response = send(
        common::build_test_app(pool.clone()),
        Method::DELETE,
        &format!("/api/v1/series/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/series/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn series_create_rejects_blank_title(pool: PgPool) {
    let response = send_json(
        common::build_test_app(pool),
        Method::POST,
        "/api/v1/series",
        &series_body("   "),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn series_create_rejects_unknown_type(pool: PgPool) {
    let body = json!({
        "title": "Tech Talk",
        "series_type": "movie",
        "category": "Tech",
        "language": "en",
    });
    let response = send_json(
        common::build_test_app(pool),
        Method::POST,
        "/api/v1/series",
        &body,
    )
    .await;

    // Serde rejects the enum value before the handler runs.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn series_list_supports_type_filter(pool: PgPool) {
    for (title, series_type) in [("Pod", "podcast"), ("Doc", "documentary")] {
        let body = json!({
            "title": title,
            "series_type": series_type,
            "category": "Tech",
            "language": "en",
        });
        let response = send_json(
            common::build_test_app(pool.clone()),
            Method::POST,
            "/api/v1/series",
            &body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all = body_json(get(common::build_test_app(pool.clone()), "/api/v1/series").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let docs = body_json(
        get(
            common::build_test_app(pool),
            "/api/v1/series?type=documentary",
        )
        .await,
    )
    .await;
    assert_eq!(docs.as_array().unwrap().len(), 1);
    assert_eq!(docs[0]["title"], "Doc");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn series_nested_episode_listing(pool: PgPool) {
    let created = body_json(
        send_json(
            common::build_test_app(pool.clone()),
            Method::POST,
            "/api/v1/series",
            &series_body("Tech Talk"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    for (title, number, season) in [("S1E1", 1, 1), ("S1E2", 2, 1), ("S2E1", 1, 2)] {
        let body = json!({
            "series_id": id,
            "title": title,
            "video_url": "https://cdn.example.com/e.mp4",
            "episode_number": number,
            "season_number": season,
        });
        let response = send_json(
            common::build_test_app(pool.clone()),
            Method::POST,
            "/api/v1/episodes",
            &body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/series/{id}/episodes"),
        )
        .await,
    )
    .await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let season_two = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/series/{id}/episodes?season=2"),
        )
        .await,
    )
    .await;
    assert_eq!(season_two.as_array().unwrap().len(), 1);
    assert_eq!(season_two[0]["title"], "S2E1");
}
