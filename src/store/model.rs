//! Credential store data models.

use serde::Serialize;
use sqlx::FromRow;

/// A provisioned user account.
///
/// Records are created at initialization time (CLI provisioning or
/// seeding) and are immutable while the gateway serves traffic. The
/// secret is stored only as a bcrypt hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// The identity attached to a request after a successful credential check.
///
/// Ephemeral and per-request: it lives in the request extensions and is
/// dropped when the request completes. Sessions are stateless, so every
/// request re-derives its own identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedIdentity {
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthenticatedIdentity {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|r| self.has_role(r))
    }
}
