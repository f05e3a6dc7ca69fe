use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AuthError;

pub fn hash_secret(secret: &str) -> Result<String, AuthError> {
    hash(secret, DEFAULT_COST)
        .map_err(|e| AuthError::Store(anyhow::anyhow!("failed to hash secret: {}", e)))
}

pub fn verify_secret(secret: &str, hashed: &str) -> Result<bool, AuthError> {
    verify(secret, hashed)
        .map_err(|e| AuthError::Store(anyhow::anyhow!("failed to verify secret: {}", e)))
}
