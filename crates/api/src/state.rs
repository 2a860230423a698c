use std::sync::Arc;

use crate::config::ServerConfig;
use crate::pipeline::IngestService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gridwatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Validate-persist-evaluate-notify pipeline.
    pub pipeline: Arc<IngestService>,
}
