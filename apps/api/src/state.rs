use std::sync::Arc;

use crate::config::Config;
use crate::form::session::SessionRegistry;
use crate::persistence::DocumentStore;
use crate::rasterizer::RasterClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Sessions are the only mutable state and are explicitly owned
/// here; there are no ambient singletons.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub store: Arc<dyn DocumentStore>,
    pub rasterizer: RasterClient,
    /// Kept on state for handlers that need runtime knobs later; today only
    /// startup reads it.
    #[allow(dead_code)]
    pub config: Config,
}
