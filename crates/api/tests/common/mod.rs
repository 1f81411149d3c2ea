//! Shared helpers for the API integration tests.
//!
//! Every test app runs the production router over a fresh [`MemoryStore`],
//! so no database is needed.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ahlam_api::auth::jwt::JwtConfig;
use ahlam_api::config::{AdminCredential, ServerConfig, StoreBackend, DEFAULT_BODY_LIMIT_BYTES};
use ahlam_api::router::build_app_router;
use ahlam_api::state::AppState;
use ahlam_core::booking::{Booking, Decision};
use ahlam_core::credentials::SharedSecret;
use ahlam_core::notify::{Delivery, NotificationError, Notifier};
use ahlam_core::store::MemoryStore;
use ahlam_core::types::RecordId;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        store: StoreBackend::Memory,
        jwt: JwtConfig {
            secret: "test-jwt-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
        },
        admin_credential: AdminCredential::Plain(ADMIN_PASSWORD.to_string()),
    }
}

/// Notifier fake that records every call.
#[derive(Default)]
pub struct RecordingNotifier {
    pub admin: Mutex<Vec<RecordId>>,
    pub customer: Mutex<Vec<(RecordId, Decision)>>,
    pub fail_customer: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail_customer: true,
            ..Self::default()
        }
    }

    pub fn customer_count(&self) -> usize {
        self.customer.lock().unwrap().len()
    }

    pub fn admin_count(&self) -> usize {
        self.admin.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_admin(&self, booking: &Booking) {
        self.admin.lock().unwrap().push(booking.id);
    }

    async fn notify_customer(
        &self,
        booking: &Booking,
        decision: Decision,
    ) -> Result<Delivery, NotificationError> {
        self.customer.lock().unwrap().push((booking.id, decision));
        if self.fail_customer {
            Err(NotificationError("smtp unreachable".into()))
        } else {
            Ok(Delivery::Sent)
        }
    }
}

/// A router plus handles on its fakes.
pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<RecordingNotifier>,
}

/// Full application router over an empty store (the menu seeds on first read).
pub fn build_test_app() -> TestApp {
    build_test_app_with(RecordingNotifier::default())
}

pub fn build_test_app_with(notifier: RecordingNotifier) -> TestApp {
    let notifier = Arc::new(notifier);
    let state = AppState::new(
        Arc::new(MemoryStore::seeded()),
        notifier.clone(),
        Arc::new(SharedSecret::new(ADMIN_PASSWORD)),
        test_config(),
    );
    TestApp {
        router: build_app_router(state),
        notifier,
    }
}

/// Router over an empty store with a caller-supplied configuration.
pub fn build_router_with_config(config: ServerConfig) -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::seeded()),
        Arc::new(RecordingNotifier::default()),
        Arc::new(SharedSecret::new(ADMIN_PASSWORD)),
        config,
    );
    build_app_router(state)
}

/// Log in with the test password and return the access token.
pub async fn admin_token(app: &Router) -> String {
    let response = post_json(
        app.clone(),
        "/api/admin/login",
        serde_json::json!({ "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["accessToken"].as_str().unwrap().to_string()
}

/// A booking request body for `time` on a fixed date.
pub fn booking_body(name: &str, time: &str) -> serde_json::Value {
    serde_json::json!({
        "fullName": name,
        "email": "guest@example.com",
        "phone": "07700 900123",
        "date": "2026-12-05",
        "time": time,
        "guests": 4,
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
