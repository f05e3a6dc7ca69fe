//! Extractor exposing the authenticated identity to handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::config::gateway::DEFAULT_REALM;
use crate::store::model::AuthenticatedIdentity;
use crate::utils::errors::AppError;

/// Extractor that yields the identity attached by the request authorizer.
///
/// Only succeeds on routes behind the authorizer middleware; public
/// routes carry no identity, so a handler taking `AuthUser` on a public
/// route rejects with a challenge.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.0.has_role(role)
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("invalid credentials"), DEFAULT_REALM)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn identity() -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            username: "admin".to_string(),
            roles: vec!["ADMIN".to_string()],
        }
    }

    #[tokio::test]
    async fn test_extracts_attached_identity() {
        let request = Request::builder()
            .uri("/me")
            .extension(identity())
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let user = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.username(), "admin");
        assert!(user.has_role("ADMIN"));
    }

    #[tokio::test]
    async fn test_rejects_when_no_identity_attached() {
        let request = Request::builder().uri("/me").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }
}
