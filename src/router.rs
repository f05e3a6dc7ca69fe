use axum::{
    Json, Router,
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::logging::logging_middleware;
use crate::middleware::authorizer::authorize_request;
use crate::middleware::identity::AuthUser;
use crate::state::AppState;
use crate::store::model::AuthenticatedIdentity;

pub fn init_router(state: AppState) -> Router {
    let allow_frame_embedding = state.gateway_config.allow_frame_embedding;

    let router = Router::new()
        .route("/console", get(console))
        .route("/console/{*rest}", get(console))
        .route("/me", get(whoami))
        .route("/admin/status", get(admin_status))
        .fallback(not_found)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authorize_request,
        ));

    // Frame protection stays on unless explicitly relaxed for local
    // console development.
    let router = if allow_frame_embedding {
        router
    } else {
        router.layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
    };

    router.layer(middleware::from_fn(logging_middleware))
}

/// Placeholder for the administrative console served behind the gateway.
/// The real console is an external collaborator; this route only
/// demonstrates the public policy prefix.
async fn console() -> &'static str {
    "gatewarden console\n"
}

/// Echoes the identity the authorizer attached to the request.
async fn whoami(AuthUser(identity): AuthUser) -> Json<AuthenticatedIdentity> {
    Json(identity)
}

async fn admin_status(user: AuthUser) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "checked_by": user.username(),
    }))
}

/// Unmatched paths still pass through the authorizer (default policy is
/// authenticated), so this only answers verified requests.
async fn not_found(req: Request) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("no route for {}", req.uri().path()),
        })),
    )
}
