//! API server state

use std::sync::Arc;

use crate::registry::ActivityRegistry;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Activity registry shared by all handlers
    pub registry: Arc<ActivityRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<ActivityRegistry>) -> Self {
        Self { registry }
    }

    /// State backed by the default seed catalog.
    pub fn with_default_catalog() -> Self {
        Self::new(Arc::new(ActivityRegistry::with_default_catalog()))
    }
}
