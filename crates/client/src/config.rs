use std::time::Duration;

/// Default API base URL for a locally running server.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`RemoteStore`](crate::RemoteStore).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix, without a trailing slash.
    pub base_url: String,
    /// Pre-issued admin access token, if any.
    pub admin_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable           | Default                     |
    /// |--------------------|-----------------------------|
    /// | `API_BASE_URL`     | `http://localhost:5000/api` |
    /// | `API_ADMIN_TOKEN`  | -                           |
    /// | `API_TIMEOUT_SECS` | `10`                        |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config =
            Self::new(var("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()));
        config.admin_token = var("API_ADMIN_TOKEN");
        if let Some(secs) = var("API_TIMEOUT_SECS").and_then(|s| s.trim().parse().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    /// The server root, where `/health` lives.
    pub fn server_root(&self) -> &str {
        self.base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url)
    }
}
