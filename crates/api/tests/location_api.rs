//! HTTP-level integration tests for the `/locations` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_location_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/locations/create",
        serde_json::json!({"name": "Springfield", "lat": 44.05, "lng": -123.02}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Springfield");
    assert_eq!(json["lat"], 44.05);
    assert_eq!(json["lng"], -123.02);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_location_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/locations/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_location_replaces_coordinates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/locations/create",
            serde_json::json!({"name": "Old Town", "lat": 1.0, "lng": 2.0}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/locations/{id}/update"),
        serde_json::json!({"name": "New Town", "lat": 3.5, "lng": 4.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "New Town");
    assert_eq!(json["lat"], 3.5);
    assert_eq!(json["lng"], 4.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_location_overlong_name_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/locations/create",
            serde_json::json!({"name": "Town", "lat": 0.0, "lng": 0.0}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/locations/{id}/update"),
        serde_json::json!({"name": "x".repeat(201), "lat": 0.0, "lng": 0.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["name"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_location_cascades_to_referencing_rows(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let user = body_json(
        post_json(
            app,
            "/users/create",
            serde_json::json!({
                "first_name": "Ann",
                "username": "ann",
                "password": "pw",
                "age": 28,
                "location_name": "Doomed",
            }),
        )
        .await,
    )
    .await;
    let author_id = user["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/ads/create",
        serde_json::json!({
            "name": "Bike",
            "price": 50,
            "author_id": author_id,
            "location_name": "Doomed",
            "categories": [],
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let locations = body_json(get(app, "/locations").await).await;
    let location_id = locations["items"][0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/locations/{location_id}/delete")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Both the user and the ad referenced the location and cascade away.
    let app = common::build_test_app(pool.clone());
    assert_eq!(body_json(get(app, "/users").await).await["total"], 0);
    let app = common::build_test_app(pool);
    assert_eq!(body_json(get(app, "/ads").await).await["total"], 0);
}
