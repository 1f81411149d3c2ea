//! Thin REST wrapper over the booking API using [`reqwest`].

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;

/// Errors from the REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}, {code}): {message}")]
    Api {
        status: StatusCode,
        /// Machine-readable `code` from the error body, or `UNKNOWN`.
        code: String,
        message: String,
    },
}

/// Error body produced by the server for every failed request.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

/// HTTP client bound to one API deployment.
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchange the admin password for an access token and keep it for
    /// subsequent admin requests.
    pub async fn login(&mut self, password: &str) -> Result<(), ClientError> {
        let response: LoginResponse = self
            .send(
                self.request(Method::POST, "/admin/login", false)
                    .json(&LoginRequest { password }),
            )
            .await?;
        self.config.admin_token = Some(response.access_token);
        Ok(())
    }

    /// `GET {root}/health`, succeeding on any 2xx.
    pub async fn health(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.config.server_root());
        let response = self.client.get(url).send().await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, path, true)).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.request(Method::POST, path, true).json(body))
            .await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.request(Method::PUT, path, true).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.request(Method::DELETE, path, true).send().await?;
        Self::ensure_success(response).await.map(|_| ())
    }

    // ---- private helpers ----

    fn request(&self, method: Method, path: &str, admin: bool) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.config.base_url, path));
        match (&self.config.admin_token, admin) {
            (Some(token), true) => builder.bearer_auth(token),
            _ => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = Self::ensure_success(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`ClientError::Api`] using the server's `{error, code}` body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.code, body.error),
            Err(_) => ("UNKNOWN".to_string(), text),
        };
        Err(ClientError::Api {
            status,
            code,
            message,
        })
    }
}
