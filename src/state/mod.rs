pub mod domino_match;

use std::sync::Arc;

use crate::dao::match_store::MatchStore;

pub type SharedState = Arc<AppState>;

/// Central application state handed to every request handler.
pub struct AppState {
    match_store: Arc<dyn MatchStore>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(match_store: Arc<dyn MatchStore>) -> SharedState {
        Arc::new(Self { match_store })
    }

    /// Handle to the durable match store.
    pub fn match_store(&self) -> &Arc<dyn MatchStore> {
        &self.match_store
    }
}
