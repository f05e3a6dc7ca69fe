use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum_extra::headers::{Authorization, HeaderMapExt};

use gatewarden::config::gateway::GatewayConfig;
use gatewarden::router::init_router;
use gatewarden::state::AppState;
use gatewarden::store::{CredentialStore, MemoryCredentialStore};

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        public_prefixes: vec!["/console".to_string()],
        role_rules: vec![("/admin".to_string(), "ADMIN".to_string())],
        realm: "gatewarden".to_string(),
        allow_frame_embedding: false,
        addr: "127.0.0.1:0".to_string(),
    }
}

/// Gateway app over an in-memory store seeded with the fixture accounts:
/// `user`/`password` (role USER) and `admin`/`password` (role ADMIN).
#[allow(dead_code)]
pub async fn test_app() -> Router {
    let store = MemoryCredentialStore::new();
    store
        .provision("user", "password", &["USER".to_string()])
        .await
        .unwrap();
    store
        .provision("admin", "password", &["ADMIN".to_string()])
        .await
        .unwrap();

    let state = AppState::with_store(Arc::new(store), test_config());
    init_router(state)
}

/// Same app with a caller-supplied configuration.
#[allow(dead_code)]
pub async fn test_app_with_config(config: GatewayConfig) -> Router {
    let store = MemoryCredentialStore::new();
    store
        .provision("user", "password", &["USER".to_string()])
        .await
        .unwrap();

    let state = AppState::with_store(Arc::new(store), config);
    init_router(state)
}

#[allow(dead_code)]
pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn get_basic(path: &str, username: &str, password: &str) -> Request<Body> {
    let mut req = get(path);
    req.headers_mut()
        .typed_insert(Authorization::basic(username, password));
    req
}
