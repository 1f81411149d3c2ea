use std::path::PathBuf;

use crate::auth::jwt::{JwtConfig, DEFAULT_ACCESS_EXPIRY_MINS};

/// Default request body limit. Menu images may arrive as data URLs.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Startup configuration failure. Fatal: the binary logs it and exits.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Which physical store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    Local { path: PathBuf },
    Memory,
}

/// How the admin password is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCredential {
    /// Argon2id PHC string from `ADMIN_PASSWORD_HASH`.
    Hash(String),
    /// Plain shared secret from `ADMIN_PASSWORD`.
    Plain(String),
    /// Nothing configured; admin login always fails.
    None,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins from the comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size.
    pub body_limit_bytes: usize,
    pub store: StoreBackend,
    /// JWT signing secret and token lifetime.
    pub jwt: JwtConfig,
    pub admin_credential: AdminCredential,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default           |
    /// |--------------------------|-------------------|
    /// | `HOST`                   | `0.0.0.0`         |
    /// | `PORT`                   | `5000`            |
    /// | `CORS_ORIGINS`           | `*`               |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`              |
    /// | `STORE_BACKEND`          | `postgres`        |
    /// | `DATABASE_URL`           | required for `postgres` |
    /// | `LOCAL_STORE_PATH`       | `ahlam-data.json` |
    /// | `JWT_SECRET`             | required          |
    /// | `JWT_ACCESS_EXPIRY_MINS` | `480`             |
    /// | `ADMIN_PASSWORD_HASH`    | -                 |
    /// | `ADMIN_PASSWORD`         | -                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&var, "PORT", 5000u16)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&var, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let store = match var("STORE_BACKEND").as_deref().unwrap_or("postgres") {
            "postgres" => StoreBackend::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            "local" => StoreBackend::Local {
                path: var("LOCAL_STORE_PATH")
                    .unwrap_or_else(|| "ahlam-data.json".into())
                    .into(),
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let jwt = JwtConfig {
            secret: var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            access_token_expiry_mins: parse_or(
                &var,
                "JWT_ACCESS_EXPIRY_MINS",
                DEFAULT_ACCESS_EXPIRY_MINS,
            )?,
        };

        let admin_credential = match (var("ADMIN_PASSWORD_HASH"), var("ADMIN_PASSWORD")) {
            (Some(hash), _) => AdminCredential::Hash(hash),
            (None, Some(plain)) => AdminCredential::Plain(plain),
            (None, None) => AdminCredential::None,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            store,
            jwt,
            admin_credential,
        })
    }

    /// `true` when CORS should accept any origin.
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match var(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_memory_backend() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.cors_allows_any());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.body_limit_bytes, 10 * 1024 * 1024);
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.jwt.access_token_expiry_mins, 480);
        assert_eq!(config.admin_credential, AdminCredential::None);
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap_err();
        assert_matches!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn jwt_secret_is_required() {
        let err = ServerConfig::from_lookup(lookup(&[("STORE_BACKEND", "memory")])).unwrap_err();
        assert_matches!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn local_backend_uses_default_path() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("STORE_BACKEND", "local"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(
            config.store,
            StoreBackend::Local {
                path: PathBuf::from("ahlam-data.json")
            }
        );
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("STORE_BACKEND", "firebase"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "STORE_BACKEND", .. });
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "s3cret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_matches!(err, ConfigError::Invalid { key: "PORT", .. });
    }

    #[test]
    fn password_hash_wins_over_plain_password() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "s3cret"),
            ("ADMIN_PASSWORD", "plain"),
            ("ADMIN_PASSWORD_HASH", "$argon2id$v=19$stub"),
        ]))
        .unwrap();
        assert_eq!(
            config.admin_credential,
            AdminCredential::Hash("$argon2id$v=19$stub".into())
        );
    }

    #[test]
    fn explicit_cors_origins_are_split() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "s3cret"),
            ("CORS_ORIGINS", "http://localhost:5173, https://ahlam.example"),
        ]))
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "https://ahlam.example"]
        );
        assert!(!config.cors_allows_any());
    }
}
