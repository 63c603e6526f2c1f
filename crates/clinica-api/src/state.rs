use std::sync::Arc;

/// Shared application state, injected into route handlers via Axum state.
pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
