//! [`Store`] over the booking REST API.
//!
//! Every call goes to the server's `/store` routes, which persist without
//! running the server's booking workflow. Notifications are left to
//! whichever workflow holds this store. All calls need an admin access
//! token, either pre-issued in [`ClientConfig::admin_token`] or obtained
//! with [`RemoteStore::login`].

use ahlam_core::booking::{Booking, BookingStatus, NewBooking};
use ahlam_core::error::CoreError;
use ahlam_core::menu::{MenuItem, NewMenuItem};
use ahlam_core::store::Store;
use ahlam_core::types::RecordId;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use crate::api::{ApiClient, ClientError};
use crate::config::ClientConfig;

#[derive(Serialize)]
struct StatusTransition {
    expected: BookingStatus,
    status: BookingStatus,
}

pub struct RemoteStore {
    api: ApiClient,
}

impl RemoteStore {
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let api = ApiClient::new(config)
            .map_err(|e| CoreError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { api })
    }

    /// Build from [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, CoreError> {
        Self::new(ClientConfig::from_env())
    }

    /// Log in as admin with `password`.
    pub async fn login(&mut self, password: &str) -> Result<(), CoreError> {
        self.api
            .login(password)
            .await
            .map_err(|e| into_core(e, "Admin session", "login"))
    }
}

/// Map a REST failure onto the store error taxonomy.
fn into_core(err: ClientError, entity: &'static str, id: impl ToString) -> CoreError {
    match err {
        ClientError::Request(e) => {
            tracing::warn!(error = %e, "Booking API unreachable");
            if e.is_decode() {
                CoreError::Internal(format!("Unexpected API response: {e}"))
            } else {
                CoreError::Unavailable(e.to_string())
            }
        }
        ClientError::Api {
            status,
            code,
            message,
        } => match code.as_str() {
            "NOT_FOUND" => CoreError::not_found(entity, id),
            "INVALID_TIME" => CoreError::InvalidTime(message),
            "VALIDATION_ERROR" => CoreError::Validation(message),
            "UNAUTHORIZED" => CoreError::Unauthorized(message),
            "UNAVAILABLE" => CoreError::Unavailable(message),
            _ if status == StatusCode::UNAUTHORIZED => CoreError::Unauthorized(message),
            _ if status == StatusCode::NOT_FOUND => CoreError::not_found(entity, id),
            _ if status.is_client_error() => CoreError::Validation(message),
            _ if status == StatusCode::SERVICE_UNAVAILABLE
                || status == StatusCode::REQUEST_TIMEOUT
                || status == StatusCode::BAD_GATEWAY
                || status == StatusCode::GATEWAY_TIMEOUT =>
            {
                CoreError::Unavailable(message)
            }
            _ => CoreError::Internal(format!("API error ({status}): {message}")),
        },
    }
}

#[async_trait]
impl Store for RemoteStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, CoreError> {
        self.api
            .get("/store/bookings")
            .await
            .map_err(|e| into_core(e, "Booking", "*"))
    }

    async fn find_booking(&self, id: RecordId) -> Result<Option<Booking>, CoreError> {
        match self.api.get(&format!("/store/bookings/{id}")).await {
            Ok(booking) => Ok(Some(booking)),
            Err(ClientError::Api { status, .. }) if status == StatusCode::NOT_FOUND => Ok(None),
            Err(e) => Err(into_core(e, "Booking", id)),
        }
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, CoreError> {
        self.api
            .post("/store/bookings", &input)
            .await
            .map_err(|e| into_core(e, "Booking", "new"))
    }

    async fn set_booking_status(
        &self,
        id: RecordId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Booking, CoreError> {
        match self
            .api
            .put(
                &format!("/store/bookings/{id}/status"),
                &StatusTransition { expected, status },
            )
            .await
        {
            Ok(booking) => Ok(booking),
            // The error body only carries a message, so look up the status
            // that won.
            Err(ClientError::Api { code, .. }) if code == "ALREADY_DECIDED" => {
                let current = match self.find_booking(id).await {
                    Ok(Some(booking)) => booking.status,
                    _ => status,
                };
                Err(CoreError::AlreadyDecided {
                    id: id.to_string(),
                    status: current,
                })
            }
            Err(e) => Err(into_core(e, "Booking", id)),
        }
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError> {
        self.api
            .get("/store/menu")
            .await
            .map_err(|e| into_core(e, "MenuItem", "*"))
    }

    async fn create_menu_item(&self, input: NewMenuItem) -> Result<MenuItem, CoreError> {
        self.api
            .post("/store/menu", &input)
            .await
            .map_err(|e| into_core(e, "MenuItem", "new"))
    }

    async fn update_menu_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let id = item.id;
        self.api
            .put(&format!("/store/menu/{id}"), &item)
            .await
            .map_err(|e| into_core(e, "MenuItem", id))
    }

    async fn delete_menu_item(&self, id: RecordId) -> Result<(), CoreError> {
        self.api
            .delete(&format!("/store/menu/{id}"))
            .await
            .map_err(|e| into_core(e, "MenuItem", id))
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        self.api
            .health()
            .await
            .map_err(|e| into_core(e, "Health", "server"))
    }
}
