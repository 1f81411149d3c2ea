//! Integration tests for `/api/bookings`.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, booking_body, get_auth, post_json, put_json, put_json_auth,
    RecordingNotifier,
};
use serde_json::json;

#[tokio::test]
async fn booking_before_opening_is_rejected() {
    let app = common::build_test_app().router;

    let response = post_json(app, "/api/bookings", booking_body("Asha", "09:00")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_TIME");
}

#[tokio::test]
async fn submitted_booking_is_pending_and_admin_is_notified() {
    let test_app = common::build_test_app();
    let app = test_app.router;

    let response = post_json(app, "/api/bookings", booking_body("Asha", "13:00")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let booking = body_json(response).await;
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["time"], "13:00");
    assert_eq!(booking["fullName"], "Asha");
    assert!(booking["id"].is_string());
    assert!(booking["createdAt"].is_i64());

    // The admin notice runs in the background.
    for _ in 0..50 {
        if test_app.notifier.admin_count() == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(test_app.notifier.admin_count(), 1);
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = common::build_test_app().router;
    let mut body = booking_body("Asha", "13:00");
    body["email"] = json!("not-an-email");

    let response = post_json(app, "/api/bookings", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn confirm_updates_status_and_emails_customer_once() {
    let test_app = common::build_test_app();
    let app = test_app.router;
    let token = admin_token(&app).await;

    let created =
        body_json(post_json(app.clone(), "/api/bookings", booking_body("Ravi", "19:30")).await)
            .await;
    let uri = format!("/api/bookings/{}", created["id"].as_str().unwrap());

    let response = put_json_auth(app.clone(), &uri, json!({ "status": "confirmed" }), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let outcome = body_json(response).await;
    assert_eq!(outcome["id"], created["id"]);
    assert_eq!(outcome["status"], "confirmed");
    assert_eq!(outcome["notification"]["status"], "sent");
    assert_eq!(test_app.notifier.customer_count(), 1);

    // Deciding again conflicts and sends nothing new.
    let response = put_json_auth(app.clone(), &uri, json!({ "status": "declined" }), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "ALREADY_DECIDED");
    assert_eq!(test_app.notifier.customer_count(), 1);

    let stored = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(stored["status"], "confirmed");
}

#[tokio::test]
async fn failed_customer_email_still_keeps_the_decision() {
    let test_app = common::build_test_app_with(RecordingNotifier::failing());
    let app = test_app.router;
    let token = admin_token(&app).await;

    let created =
        body_json(post_json(app.clone(), "/api/bookings", booking_body("Mei", "20:00")).await)
            .await;
    let uri = format!("/api/bookings/{}", created["id"].as_str().unwrap());

    let response = put_json_auth(app.clone(), &uri, json!({ "status": "declined" }), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let outcome = body_json(response).await;
    assert_eq!(outcome["status"], "declined");
    assert_eq!(outcome["notification"]["status"], "failed");
    assert_eq!(outcome["notification"]["reason"], "smtp unreachable");

    let stored = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(stored["status"], "declined");
}

#[tokio::test]
async fn deciding_unknown_booking_is_404_and_silent() {
    let test_app = common::build_test_app();
    let app = test_app.router;
    let token = admin_token(&app).await;

    let response = put_json_auth(
        app,
        "/api/bookings/00000000-0000-4000-8000-000000000000",
        json!({ "status": "confirmed" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(test_app.notifier.customer_count(), 0);
}

#[tokio::test]
async fn setting_status_back_to_pending_is_rejected() {
    let app = common::build_test_app().router;
    let token = admin_token(&app).await;

    let created =
        body_json(post_json(app.clone(), "/api/bookings", booking_body("Ola", "12:00")).await)
            .await;
    let uri = format!("/api/bookings/{}", created["id"].as_str().unwrap());

    for status in ["pending", "cancelled"] {
        let response = put_json_auth(app.clone(), &uri, json!({ "status": status }), &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn deciding_requires_admin() {
    let app = common::build_test_app().router;

    let created =
        body_json(post_json(app.clone(), "/api/bookings", booking_body("Ola", "12:00")).await)
            .await;
    let uri = format!("/api/bookings/{}", created["id"].as_str().unwrap());

    let response = put_json(app, &uri, json!({ "status": "confirmed" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_list_puts_pending_first() {
    let app = common::build_test_app().router;
    let token = admin_token(&app).await;

    let mut ids = Vec::new();
    for (name, time) in [("A", "12:30"), ("B", "13:30"), ("C", "18:00")] {
        let created =
            body_json(post_json(app.clone(), "/api/bookings", booking_body(name, time)).await)
                .await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }
    put_json_auth(
        app.clone(),
        &format!("/api/bookings/{}", ids[1]),
        json!({ "status": "confirmed" }),
        &token,
    )
    .await;

    let response = get_auth(app, "/api/bookings", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let list = json.as_array().unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["status"], "pending");
    assert_eq!(list[1]["status"], "pending");
    assert_eq!(list[2]["id"], ids[1].as_str());
    assert!(list[0]["createdAt"].as_i64() >= list[1]["createdAt"].as_i64());
}
