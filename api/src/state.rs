//! Application state shared across route handlers.

use db::DocumentStore;
use std::sync::Arc;

/// Holds the single store handle built at startup.
///
/// The handle is never replaced after construction, so cloning the state
/// only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
