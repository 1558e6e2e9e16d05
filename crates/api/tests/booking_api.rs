//! Integration tests for the booking flow over HTTP.
//!
//! Covers the customer side (create, history) and the admin side (listing,
//! review, delivery), including role enforcement and the allocation
//! failure modes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

use gasbook_core::roles::{ROLE_ADMIN, ROLE_USER};
use gasbook_db::repositories::LedgerRepo;

fn booking_body() -> serde_json::Value {
    json!({ "payment_method": "cash-on-delivery", "notes": "Leave at the gate" })
}

// ---------------------------------------------------------------------------
// Customer side
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_booking_consumes_allocation_and_snapshots_contact(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    LedgerRepo::adjust_allocation(&pool, user.id, 1)
        .await
        .expect("grant should succeed");

    let response = post_json(&app, "/api/v1/bookings", Some(&token), booking_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let booking = body_json(response).await;
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["user_name"], "Test Person");
    assert_eq!(booking["user_address"], "12 Gasworks Road");

    let profile = body_json(get_auth(&app, "/api/v1/profile", &token).await).await;
    assert_eq!(profile["cylinders_remaining"], 0);
    assert_eq!(profile["cylinders_allocated"], 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_booking_fails_with_409_when_allocation_empty(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;

    let response = post_json(&app, "/api/v1/bookings", Some(&token), booking_body()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INSUFFICIENT_ALLOCATION");
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_booking_rejects_unknown_payment_method(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    LedgerRepo::adjust_allocation(&pool, user.id, 1)
        .await
        .expect("grant should succeed");

    let response = post_json(
        &app,
        "/api/v1/bookings",
        Some(&token),
        json!({ "payment_method": "barter" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_booking_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(&app, "/api/v1/bookings", None, booking_body()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn booking_history_is_scoped_to_the_caller(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (first, first_token) = seed_user(&pool, "a@example.com", ROLE_USER).await;
    let (second, second_token) = seed_user(&pool, "b@example.com", ROLE_USER).await;
    for user in [&first, &second] {
        LedgerRepo::adjust_allocation(&pool, user.id, 1)
            .await
            .expect("grant should succeed");
    }

    post_json(&app, "/api/v1/bookings", Some(&first_token), booking_body()).await;

    let own = body_json(get_auth(&app, "/api/v1/bookings", &first_token).await).await;
    assert_eq!(own.as_array().unwrap().len(), 1);

    let other = body_json(get_auth(&app, "/api/v1/bookings", &second_token).await).await;
    assert!(other.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Admin side: review and delivery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn admin_routes_reject_non_admin_callers(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_user, token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;

    let response = get_auth(&app, "/api/v1/admin/bookings", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../migrations")]
async fn approve_then_deliver_completes_the_booking(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, user_token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    LedgerRepo::adjust_allocation(&pool, user.id, 1)
        .await
        .expect("grant should succeed");

    let created = body_json(
        post_json(&app, "/api/v1/bookings", Some(&user_token), booking_body()).await,
    )
    .await;
    let booking_id = created["id"].as_i64().unwrap();

    let approved = post_json(
        &app,
        &format!("/api/v1/admin/bookings/{booking_id}/review"),
        Some(&admin_token),
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(approved.status(), StatusCode::OK);
    assert_eq!(body_json(approved).await["status"], "approved");

    let delivered = post_json(
        &app,
        &format!("/api/v1/admin/bookings/{booking_id}/deliver"),
        Some(&admin_token),
        json!({}),
    )
    .await;
    assert_eq!(delivered.status(), StatusCode::OK);
    assert_eq!(body_json(delivered).await["status"], "delivered");

    // Delivery does not refund: the cylinder stays consumed.
    let profile = body_json(get_auth(&app, "/api/v1/profile", &user_token).await).await;
    assert_eq!(profile["cylinders_remaining"], 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn reject_refunds_the_cylinder_and_freezes_the_booking(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, user_token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    LedgerRepo::adjust_allocation(&pool, user.id, 1)
        .await
        .expect("grant should succeed");

    let created = body_json(
        post_json(&app, "/api/v1/bookings", Some(&user_token), booking_body()).await,
    )
    .await;
    let booking_id = created["id"].as_i64().unwrap();

    let rejected = post_json(
        &app,
        &format!("/api/v1/admin/bookings/{booking_id}/review"),
        Some(&admin_token),
        json!({ "decision": "rejected" }),
    )
    .await;
    assert_eq!(rejected.status(), StatusCode::OK);

    let profile = body_json(get_auth(&app, "/api/v1/profile", &user_token).await).await;
    assert_eq!(profile["cylinders_remaining"], 1);

    // A second review of the terminal booking must fail with a conflict.
    let again = post_json(
        &app,
        &format!("/api/v1/admin/bookings/{booking_id}/review"),
        Some(&admin_token),
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(again).await["code"], "INVALID_TRANSITION");
}

#[sqlx::test(migrations = "../../migrations")]
async fn review_rejects_decisions_outside_the_state_machine(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, user_token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    LedgerRepo::adjust_allocation(&pool, user.id, 1)
        .await
        .expect("grant should succeed");

    let created = body_json(
        post_json(&app, "/api/v1/bookings", Some(&user_token), booking_body()).await,
    )
    .await;
    let booking_id = created["id"].as_i64().unwrap();

    let response = post_json(
        &app,
        &format!("/api/v1/admin/bookings/{booking_id}/review"),
        Some(&admin_token),
        json!({ "decision": "delivered" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn review_of_unknown_booking_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;

    let response = post_json(
        &app,
        "/api/v1/admin/bookings/424242/review",
        Some(&admin_token),
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn admin_booking_list_filters_by_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, user_token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;
    for _ in 0..2 {
        LedgerRepo::adjust_allocation(&pool, user.id, 1)
            .await
            .expect("grant should succeed");
    }

    let first = body_json(
        post_json(&app, "/api/v1/bookings", Some(&user_token), booking_body()).await,
    )
    .await;
    post_json(&app, "/api/v1/bookings", Some(&user_token), booking_body()).await;

    post_json(
        &app,
        &format!("/api/v1/admin/bookings/{}/review", first["id"]),
        Some(&admin_token),
        json!({ "decision": "approved" }),
    )
    .await;

    let pending = body_json(
        get_auth(&app, "/api/v1/admin/bookings?status=pending", &admin_token).await,
    )
    .await;
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let all = body_json(get_auth(&app, "/api/v1/admin/bookings", &admin_token).await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Admin side: allocation adjustment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn admin_can_grant_and_remove_cylinders(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, _user_token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;
    let (_admin, admin_token) = seed_user(&pool, "admin@example.com", ROLE_ADMIN).await;

    let granted = body_json(
        post_json(
            &app,
            &format!("/api/v1/admin/users/{}/cylinders", user.id),
            Some(&admin_token),
            json!({ "delta": 1 }),
        )
        .await,
    )
    .await;
    assert_eq!(granted["cylinders_allocated"], 1);
    assert_eq!(granted["cylinders_remaining"], 1);

    let removed = body_json(
        post_json(
            &app,
            &format!("/api/v1/admin/users/{}/cylinders", user.id),
            Some(&admin_token),
            json!({ "delta": -1 }),
        )
        .await,
    )
    .await;
    assert_eq!(removed["cylinders_allocated"], 0);
    assert_eq!(removed["cylinders_remaining"], 0);

    // Removing below zero is a clamped no-op.
    let clamped = body_json(
        post_json(
            &app,
            &format!("/api/v1/admin/users/{}/cylinders", user.id),
            Some(&admin_token),
            json!({ "delta": -1 }),
        )
        .await,
    )
    .await;
    assert_eq!(clamped["cylinders_allocated"], 0);
    assert_eq!(clamped["cylinders_remaining"], 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn allocation_adjustment_is_admin_only(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user, token) = seed_user(&pool, "asha@example.com", ROLE_USER).await;

    let response = post_json(
        &app,
        &format!("/api/v1/admin/users/{}/cylinders", user.id),
        Some(&token),
        json!({ "delta": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
