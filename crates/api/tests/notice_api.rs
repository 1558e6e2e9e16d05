//! Integration tests for the notice board over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

use gasbook_core::roles::{ROLE_ADMIN, ROLE_USER};

fn notice_body() -> serde_json::Value {
    json!({
        "title": "Price revision",
        "body": "Cylinder price changes from next month.",
    })
}

#[sqlx::test(migrations = "../../migrations")]
async fn admin_publishes_and_users_read_notices(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, user_token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;

    let created = post_json(&app, "/api/v1/admin/notices", Some(&admin_token), notice_body()).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = body_json(get_auth(&app, "/api/v1/notices", &user_token).await).await;
    let notices = listed.as_array().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["title"], "Price revision");
}

#[sqlx::test(migrations = "../../migrations")]
async fn notice_publishing_is_admin_only(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, user_token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;

    let response = post_json(&app, "/api/v1/admin/notices", Some(&user_token), notice_body()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../migrations")]
async fn notice_listing_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(&app, "/api/v1/notices").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn any_admin_may_delete_any_notice(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_author, author_token) = seed_user(&pool, "author@example.com", ROLE_ADMIN).await;
    let (_other, other_token) = seed_user(&pool, "other@example.com", ROLE_ADMIN).await;

    let created = body_json(
        post_json(&app, "/api/v1/admin/notices", Some(&author_token), notice_body()).await,
    )
    .await;
    let notice_id = created["id"].as_i64().unwrap();

    // Deleted by a different admin than the one who published it.
    let deleted = delete_auth(
        &app,
        &format!("/api/v1/admin/notices/{notice_id}"),
        &other_token,
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_unknown_notice_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;

    let response = delete_auth(&app, "/api/v1/admin/notices/424242", &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../migrations")]
async fn notice_validation_rejects_short_titles(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;

    let response = post_json(
        &app,
        "/api/v1/admin/notices",
        Some(&admin_token),
        json!({ "title": "Hi", "body": "Too short a title above." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
