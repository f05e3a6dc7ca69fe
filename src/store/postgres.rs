//! Postgres-backed credential store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::store::model::UserRecord;
use crate::store::{CredentialStore, normalize_roles};
use crate::utils::errors::AuthError;
use crate::utils::password::hash_secret;

/// Production store backed by the `users` table (see `migrations/`).
///
/// Roles are stored as a `TEXT[]` column. The username primary key
/// enforces the duplicate-user rule at the database level.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AuthError> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT username, password AS password_hash, roles, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Store(e.into()))?;

        Ok(record)
    }

    #[instrument(skip(self, secret))]
    async fn provision(
        &self,
        username: &str,
        secret: &str,
        roles: &[String],
    ) -> Result<(), AuthError> {
        let password_hash = hash_secret(secret)?;

        let result = sqlx::query("INSERT INTO users (username, password, roles) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(&password_hash)
            .bind(normalize_roles(roles))
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AuthError::DuplicateUser(username.to_string()))
            }
            Err(e) => Err(AuthError::Store(e.into())),
        }
    }
}
