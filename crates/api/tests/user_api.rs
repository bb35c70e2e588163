//! HTTP-level integration tests for the `/users` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_defaults_role_to_member(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/users/create",
        serde_json::json!({
            "first_name": "Ann",
            "username": "ann",
            "password": "secret",
            "age": 28,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["role"], "member");
    assert_eq!(json["last_name"], serde_json::Value::Null);
    assert_eq!(json["location_name"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_resolves_location_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/users/create",
            serde_json::json!({
                "first_name": "Bob",
                "username": "bob",
                "password": "secret",
                "role": "moderator",
                "age": 41,
                "location_name": "Shelbyville",
            }),
        )
        .await,
    )
    .await;
    assert_eq!(json["role"], "moderator");
    assert_eq!(json["location_name"], "Shelbyville");

    let app = common::build_test_app(pool);
    let locations = body_json(get(app, "/locations").await).await;
    assert_eq!(locations["total"], 1);
    assert_eq!(locations["items"][0]["name"], "Shelbyville");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_sorted_ascending_by_username(pool: PgPool) {
    for username in ["walt", "ann", "mike"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/users/create",
            serde_json::json!({
                "first_name": "X",
                "username": username,
                "password": "pw",
                "age": 20,
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/users").await).await;
    let usernames: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["ann", "mike", "walt"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_user_replaces_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/users/create",
            serde_json::json!({
                "first_name": "Ann",
                "username": "ann",
                "password": "old-pw",
                "age": 28,
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/users/{id}/update"),
        serde_json::json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "username": "ann",
            "password": "new-pw",
            "role": "admin",
            "age": 29,
            "location_name": "Springfield",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["password"], "new-pw");
    assert_eq!(json["role"], "admin");
    assert_eq!(json["age"], 29);
    assert_eq!(json["location_name"], "Springfield");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_user_unknown_role_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/users/create",
            serde_json::json!({
                "first_name": "Ann",
                "username": "ann",
                "password": "pw",
                "age": 28,
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/users/{id}/update"),
        serde_json::json!({
            "first_name": "Ann",
            "username": "ann",
            "password": "pw",
            "role": "superuser",
            "age": 28,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["role"].is_array());

    // The stored role is untouched.
    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/users/{id}")).await).await;
    assert_eq!(fetched["role"], "member");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_user_negative_age_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/users/create",
            serde_json::json!({
                "first_name": "Ann",
                "username": "ann",
                "password": "pw",
                "age": 28,
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/users/{id}/update"),
        serde_json::json!({
            "first_name": "Ann",
            "username": "ann",
            "password": "pw",
            "role": "member",
            "age": -1,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["age"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_user_cascades_to_authored_ads(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let author = body_json(
        post_json(
            app,
            "/users/create",
            serde_json::json!({
                "first_name": "Ann",
                "username": "ann",
                "password": "pw",
                "age": 28,
            }),
        )
        .await,
    )
    .await;
    let author_id = author["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/ads/create",
        serde_json::json!({
            "name": "Bike",
            "price": 50,
            "author_id": author_id,
            "location_name": "Springfield",
            "categories": ["Sport"],
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/users/{author_id}/delete")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let ads = body_json(get(app, "/ads").await).await;
    assert_eq!(ads["total"], 0);
}
