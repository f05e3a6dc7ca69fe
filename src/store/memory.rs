//! In-memory credential store for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::store::model::UserRecord;
use crate::store::{CredentialStore, normalize_roles};
use crate::utils::errors::AuthError;
use crate::utils::password::hash_secret;

/// A `HashMap`-backed store guarded by an `RwLock`.
///
/// Verification only takes read locks, so concurrent requests never
/// contend with each other. The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().expect("user map lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AuthError> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::Store(anyhow::anyhow!("user map lock poisoned")))?;

        Ok(users.get(username).cloned())
    }

    async fn provision(
        &self,
        username: &str,
        secret: &str,
        roles: &[String],
    ) -> Result<(), AuthError> {
        let password_hash = hash_secret(secret)?;

        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::Store(anyhow::anyhow!("user map lock poisoned")))?;

        if users.contains_key(username) {
            return Err(AuthError::DuplicateUser(username.to_string()));
        }

        users.insert(
            username.to_string(),
            UserRecord {
                username: username.to_string(),
                password_hash,
                roles: normalize_roles(roles),
                created_at: chrono::Utc::now(),
            },
        );

        Ok(())
    }
}
