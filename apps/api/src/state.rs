use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::sources::SourceRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Platform adapters available to job search.
    pub sources: Arc<SourceRegistry>,
}
