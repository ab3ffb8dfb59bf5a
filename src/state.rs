use crate::api::NeighborhoodBackend;
use crate::handoff::HandoffStore;
use std::sync::Arc;

/// Shared by every worker thread for the life of the server.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn NeighborhoodBackend>,
    pub handoffs: HandoffStore,
    pub city: String,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn NeighborhoodBackend>,
        handoffs: HandoffStore,
        city: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            handoffs,
            city: city.into(),
        }
    }

    pub fn backend(&self) -> &dyn NeighborhoodBackend {
        self.backend.as_ref()
    }
}
