use std::sync::Arc;

use crate::config::database::init_db_pool;
use crate::config::gateway::GatewayConfig;
use crate::middleware::authorizer::RequestAuthorizer;
use crate::policy::RoutePolicy;
use crate::store::{CredentialStore, PgCredentialStore};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub authorizer: Arc<RequestAuthorizer>,
    pub gateway_config: GatewayConfig,
}

impl AppState {
    /// Assembles the state from an already-constructed store, so tests
    /// and alternative deployments can substitute their own backend.
    pub fn with_store(store: Arc<dyn CredentialStore>, gateway_config: GatewayConfig) -> Self {
        let policy = RoutePolicy::from_config(&gateway_config);
        let authorizer = Arc::new(RequestAuthorizer::new(
            store.clone(),
            policy,
            gateway_config.realm.clone(),
        ));

        AppState {
            store,
            authorizer,
            gateway_config,
        }
    }
}

/// Production state: Postgres-backed store, configuration from the
/// environment.
pub async fn init_app_state() -> AppState {
    let pool = init_db_pool().await;
    let store: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(pool));

    AppState::with_store(store, GatewayConfig::from_env())
}
