//! Credential store: user records and the verification contract.
//!
//! The gateway talks to its user store exclusively through the
//! [`CredentialStore`] trait, so the backing implementation is
//! substitutable: [`MemoryCredentialStore`] for tests and local
//! development, [`PgCredentialStore`] for production.

pub mod memory;
pub mod model;
pub mod postgres;

use async_trait::async_trait;

use crate::store::model::{AuthenticatedIdentity, UserRecord};
use crate::utils::errors::AuthError;
use crate::utils::password::verify_secret;

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

/// Contract between the request authorizer and the backing user store.
///
/// Lookups and verification must be safe under concurrent readers.
/// Provisioning is an initialization-time operation, serialized before
/// traffic begins; no runtime write-concurrency is required.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Exact-match, case-sensitive lookup.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AuthError>;

    /// Creates a record with a freshly salted hash of `secret`.
    ///
    /// Fails with [`AuthError::DuplicateUser`] if the username exists.
    async fn provision(
        &self,
        username: &str,
        secret: &str,
        roles: &[String],
    ) -> Result<(), AuthError>;

    /// Checks `secret` against the stored hash and returns the identity
    /// carrying the record's roles. Performs no writes.
    async fn verify(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<AuthenticatedIdentity, AuthError> {
        let record = self
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        if !verify_secret(secret, &record.password_hash)? {
            return Err(AuthError::BadCredential);
        }

        Ok(AuthenticatedIdentity {
            username: record.username,
            roles: record.roles,
        })
    }
}

/// Normalizes a provisioned role list: preserves first-seen order,
/// drops duplicates. Roles are a set; the storage representation is a list.
pub(crate) fn normalize_roles(roles: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(roles.len());
    for role in roles {
        if !seen.contains(role) {
            seen.push(role.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_roles_deduplicates() {
        let roles = vec![
            "ADMIN".to_string(),
            "USER".to_string(),
            "ADMIN".to_string(),
        ];
        assert_eq!(normalize_roles(&roles), vec!["ADMIN", "USER"]);
    }

    #[test]
    fn test_normalize_roles_keeps_order() {
        let roles = vec!["USER".to_string(), "ADMIN".to_string()];
        assert_eq!(normalize_roles(&roles), vec!["USER", "ADMIN"]);
    }
}
