//! Admin access tokens.
//!
//! The dashboard has one shared admin account, so a token only has to say
//! "admin" and when it stops being valid. Tokens are HS256 JWTs issued by
//! `POST /api/admin/login`.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Role carried by every token this service issues.
pub const ROLE_ADMIN: &str = "admin";

/// Default token lifetime: one service shift.
pub const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 480;

/// Signing secret and lifetime for admin tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token and its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid,

    #[error("token does not grant admin access")]
    NotAdmin,

    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Sign an admin token for `subject`.
pub fn issue_admin_token(subject: &str, config: &JwtConfig) -> Result<AccessToken, TokenError> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        role: ROLE_ADMIN.to_string(),
        iat,
        exp: iat + config.expires_in_secs(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(TokenError::Signing)?;

    Ok(AccessToken {
        token,
        expires_in: config.expires_in_secs(),
    })
}

/// Check signature, expiry and role. Returns the claims of a valid admin token.
pub fn verify_admin_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?;

    if data.claims.role != ROLE_ADMIN {
        return Err(TokenError::NotAdmin);
    }
    Ok(data.claims)
}
