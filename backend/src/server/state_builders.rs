//! Builder for the HTTP state, choosing the credential store adapter.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use chat_backend::inbound::http::state::HttpState;
use chat_backend::outbound::memory::InMemoryUserRepository;
use chat_backend::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Wire the identity service to PostgreSQL when a pool is configured,
/// otherwise to the volatile in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let hasher = Arc::new(config.hasher);
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL credential store");
            HttpState::from_identity(Arc::new(DieselUserRepository::new(pool.clone())), hasher)
        }
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            HttpState::from_identity(Arc::new(InMemoryUserRepository::new()), hasher)
        }
    };
    web::Data::new(state)
}
