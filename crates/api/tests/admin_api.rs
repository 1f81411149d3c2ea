//! Integration tests for admin login and token enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, ADMIN_PASSWORD};
use serde_json::json;

#[tokio::test]
async fn login_with_correct_password_issues_token() {
    let app = common::build_test_app().router;

    let response = post_json(
        app.clone(),
        "/api/admin/login",
        json!({ "password": ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["accessToken"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(json["expiresIn"], 15 * 60);

    let token = json["accessToken"].as_str().unwrap();
    let response = get_auth(app, "/api/bookings", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let app = common::build_test_app().router;

    let response = post_json(app, "/api/admin/login", json!({ "password": "guess" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let app = common::build_test_app().router;

    let response = get(app, "/api/bookings").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing Authorization header");
}

#[tokio::test]
async fn forged_token_is_rejected() {
    let app = common::build_test_app().router;

    let response = get_auth(app, "/api/bookings", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}
