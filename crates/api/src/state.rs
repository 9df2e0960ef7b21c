use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through `State<AppState>`.
///
/// Cloned per request; the pool and config are both shared handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: forensic_db::DbPool,
    /// Session cookie settings and the static directory are read from here.
    pub config: Arc<ServerConfig>,
}
