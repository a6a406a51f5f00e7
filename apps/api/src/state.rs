use std::sync::Arc;

use crate::config::Config;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no `DATABASE_URL` is configured; results are then not stored.
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: Config,
}
