//! The request authorizer: the gateway's per-request decision point.
//!
//! Each request moves through a fixed sequence: policy decision, header
//! parsing, credential verification, role check. Public routes skip
//! everything after the policy decision. Failures are terminal for the
//! request; the client must resend with corrected credentials.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};
use tracing::warn;

use crate::policy::{Access, RoutePolicy};
use crate::state::AppState;
use crate::store::CredentialStore;
use crate::store::model::AuthenticatedIdentity;
use crate::utils::errors::{AppError, AuthError};

/// Holds the route policy and a reference to the credential store.
///
/// Constructed explicitly at startup and handed to the request layer
/// through [`AppState`]; there is no process-global configuration.
#[derive(Debug, Clone)]
pub struct RequestAuthorizer {
    store: Arc<dyn CredentialStore>,
    policy: RoutePolicy,
    realm: String,
}

impl RequestAuthorizer {
    pub fn new(store: Arc<dyn CredentialStore>, policy: RoutePolicy, realm: String) -> Self {
        Self {
            store,
            policy,
            realm,
        }
    }

    /// Decides a single request.
    ///
    /// Returns `Ok(None)` for public routes (no identity attached),
    /// `Ok(Some(identity))` when the request is authorized, and an
    /// [`AuthError`] otherwise.
    pub async fn authorize(
        &self,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<Option<AuthenticatedIdentity>, AuthError> {
        match self.policy.decide(path) {
            Access::Public => Ok(None),
            Access::Authenticated => Ok(Some(self.verify_credentials(headers).await?)),
            Access::RoleRestricted(role) => {
                let identity = self.verify_credentials(headers).await?;
                if !identity.has_role(role) {
                    return Err(AuthError::InsufficientRole(role.clone()));
                }
                Ok(Some(identity))
            }
        }
    }

    async fn verify_credentials(
        &self,
        headers: &HeaderMap,
    ) -> Result<AuthenticatedIdentity, AuthError> {
        // Absent and undecodable headers are treated identically: both
        // produce a challenge asking the client to (re)authenticate.
        let basic = headers
            .typed_get::<Authorization<Basic>>()
            .ok_or(AuthError::MalformedCredentials)?;

        self.store.verify(basic.username(), basic.password()).await
    }

    /// Maps an internal failure to the external response.
    ///
    /// All unauthenticated kinds collapse into one uniform 401 so the
    /// response never reveals whether a username exists. The internal
    /// kind is logged instead.
    pub fn rejection(&self, err: AuthError) -> AppError {
        match &err {
            AuthError::MalformedCredentials | AuthError::UnknownUser | AuthError::BadCredential => {
                warn!(kind = %err, "authentication rejected");
                AppError::unauthorized(anyhow::anyhow!("invalid credentials"), &self.realm)
            }
            AuthError::InsufficientRole(role) => {
                warn!(role = %role, "authorization rejected");
                AppError::forbidden(anyhow::anyhow!("insufficient privileges"))
            }
            AuthError::DuplicateUser(_) | AuthError::Store(_) => {
                tracing::error!(error = %err, "credential store failure");
                AppError::internal(anyhow::anyhow!("internal error"))
            }
        }
    }
}

/// Axum middleware wiring the authorizer in front of downstream handlers.
///
/// On success the identity (if any) is inserted into the request
/// extensions for the [`AuthUser`](crate::middleware::identity::AuthUser)
/// extractor to pick up.
pub async fn authorize_request(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    match state.authorizer.authorize(&path, req.headers()).await {
        Ok(Some(identity)) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Ok(None) => Ok(next.run(req).await),
        Err(err) => Err(state.authorizer.rejection(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RouteRule;
    use crate::store::MemoryCredentialStore;
    use axum::http::StatusCode;

    async fn authorizer() -> RequestAuthorizer {
        let store = MemoryCredentialStore::new();
        store
            .provision("user", "password", &["USER".to_string()])
            .await
            .unwrap();
        store
            .provision("admin", "password", &["ADMIN".to_string()])
            .await
            .unwrap();

        let policy = RoutePolicy::new(
            vec![
                RouteRule::new("/console", Access::Public),
                RouteRule::new("/admin", Access::RoleRestricted("ADMIN".to_string())),
            ],
            Access::Authenticated,
        );

        RequestAuthorizer::new(Arc::new(store), policy, "test".to_string())
    }

    fn basic_headers(username: &str, password: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.typed_insert(Authorization::basic(username, password));
        headers
    }

    #[tokio::test]
    async fn test_public_route_bypasses_credential_parsing() {
        let authorizer = authorizer().await;
        let result = authorizer.authorize("/console/db", &HeaderMap::new()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_missing_header_is_malformed() {
        let authorizer = authorizer().await;
        let result = authorizer.authorize("/me", &HeaderMap::new()).await;
        assert!(matches!(result, Err(AuthError::MalformedCredentials)));
    }

    #[tokio::test]
    async fn test_valid_credentials_attach_identity() {
        let authorizer = authorizer().await;
        let identity = authorizer
            .authorize("/me", &basic_headers("user", "password"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(identity.username, "user");
        assert_eq!(identity.roles, vec!["USER"]);
    }

    #[tokio::test]
    async fn test_role_restricted_route_requires_role() {
        let authorizer = authorizer().await;

        let denied = authorizer
            .authorize("/admin/status", &basic_headers("user", "password"))
            .await;
        assert!(matches!(denied, Err(AuthError::InsufficientRole(ref r)) if r == "ADMIN"));

        let allowed = authorizer
            .authorize("/admin/status", &basic_headers("admin", "password"))
            .await
            .unwrap()
            .unwrap();
        assert!(allowed.has_role("ADMIN"));
    }

    #[tokio::test]
    async fn test_rejection_collapses_unauthenticated_kinds() {
        let authorizer = authorizer().await;

        let unknown = authorizer.rejection(AuthError::UnknownUser);
        let mismatch = authorizer.rejection(AuthError::BadCredential);

        assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
        assert_eq!(mismatch.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.error.to_string(), mismatch.error.to_string());
    }

    #[tokio::test]
    async fn test_rejection_insufficient_role_is_forbidden() {
        let authorizer = authorizer().await;
        let rejection = authorizer.rejection(AuthError::InsufficientRole("ADMIN".to_string()));
        assert_eq!(rejection.status, StatusCode::FORBIDDEN);
    }
}
