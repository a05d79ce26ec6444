//! Application state shared across request handlers.

use std::sync::Arc;

use crate::catalog::RoomCatalog;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Arc<dyn RoomCatalog>,
}

impl AppState {
    /// Create a new application state around a room catalog.
    pub fn new(catalog: Arc<dyn RoomCatalog>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { catalog }),
        }
    }

    /// Get the room catalog.
    pub fn catalog(&self) -> &dyn RoomCatalog {
        self.inner.catalog.as_ref()
    }
}
