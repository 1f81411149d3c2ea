//! Email delivery via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport to send HTML
//! notification emails. Configuration is loaded from environment variables;
//! if `EMAIL_USER` or `EMAIL_PASS` is not set, [`EmailConfig::from_env`]
//! returns `None` and no mailer should be constructed.

use std::time::Duration;

use ahlam_core::restaurant::SENDER_NAME;

use crate::templates::EmailContent;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP relay. The account is expected to use an app password.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default SMTP command timeout in seconds.
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 10;

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// SMTP username; also the sender address.
    pub user: String,
    /// SMTP password (app password for Gmail).
    pub password: String,
    /// Display name on the "From" header.
    pub from_name: String,
    /// Where new-booking notifications go, if anywhere.
    pub admin_email: Option<String>,
    /// Upper bound for each SMTP exchange.
    pub timeout: Duration,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if either credential is missing, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable            | Required | Default            |
    /// |---------------------|----------|--------------------|
    /// | `EMAIL_USER`        | yes      | -                  |
    /// | `EMAIL_PASS`        | yes      | -                  |
    /// | `SMTP_HOST`         | no       | `smtp.gmail.com`   |
    /// | `SMTP_PORT`         | no       | `587`              |
    /// | `SMTP_TIMEOUT_SECS` | no       | `10`               |
    /// | `EMAIL_FROM_NAME`   | no       | `Ahlam Restaurant` |
    /// | `ADMIN_EMAIL`       | no       | -                  |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let user = non_empty("EMAIL_USER")?;
        let password = non_empty("EMAIL_PASS")?;

        Some(Self {
            smtp_host: non_empty("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: non_empty("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            user,
            password,
            from_name: non_empty("EMAIL_FROM_NAME").unwrap_or_else(|| SENDER_NAME.to_string()),
            admin_email: non_empty("ADMIN_EMAIL"),
            timeout: Duration::from_secs(
                non_empty("SMTP_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SMTP_TIMEOUT_SECS),
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends HTML notification emails via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    /// Create a new email delivery service with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    /// Send `content` to `to_email`.
    pub async fn deliver(&self, to_email: &str, content: &EmailContent) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, message::Mailbox,
            transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
            Message, Tokio1Executor,
        };

        let from = Mailbox::new(
            Some(self.config.from_name.clone()),
            self.config.user.parse()?,
        );

        let email = Message::builder()
            .from(from)
            .to(to_email.parse()?)
            .subject(content.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(content.html.clone())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                self.config.user.clone(),
                self.config.password.clone(),
            ))
            .timeout(Some(self.config.timeout))
            .build();

        mailer.send(email).await?;

        tracing::info!(to = to_email, subject = %content.subject, "Notification email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
