//! Pluggable admin credential verification.

/// Decides whether a presented admin password is acceptable.
pub trait CredentialCheck: Send + Sync {
    fn verify(&self, presented: &str) -> bool;
}

/// A single shared secret compared verbatim.
pub struct SharedSecret {
    secret: String,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialCheck for SharedSecret {
    fn verify(&self, presented: &str) -> bool {
        !self.secret.is_empty() && presented == self.secret
    }
}

/// Rejects everything. Used when no admin credential is configured.
pub struct DenyAll;

impl CredentialCheck for DenyAll {
    fn verify(&self, _presented: &str) -> bool {
        false
    }
}
