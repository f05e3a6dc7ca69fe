use anyhow::Error;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Authentication and authorization failures, as seen inside the gateway.
///
/// These kinds are internal: the external response surface collapses
/// `MalformedCredentials`, `UnknownUser`, and `BadCredential` into a single
/// unauthenticated outcome so callers cannot probe which usernames exist.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing or undecodable credentials")]
    MalformedCredentials,
    #[error("unknown user")]
    UnknownUser,
    #[error("credential mismatch")]
    BadCredential,
    #[error("user already exists: {0}")]
    DuplicateUser(String),
    #[error("missing required role: {0}")]
    InsufficientRole(String),
    #[error("credential store failure: {0}")]
    Store(#[from] Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    challenge: Option<String>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            challenge: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    /// A 401 rejection carrying a `WWW-Authenticate` challenge for the
    /// given realm, prompting the client to resend with credentials.
    pub fn unauthorized<E>(err: E, realm: &str) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: err.into(),
            challenge: Some(format!("Basic realm=\"{realm}\"")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        let mut response = (self.status, body).into_response();

        if let Some(challenge) = self.challenge {
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        }

        response
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
