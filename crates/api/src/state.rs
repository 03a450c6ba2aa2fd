use std::sync::Arc;

use crate::config::ServerConfig;
use crate::generation::TodoGenerator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable and immutable: nothing here is mutated by requests.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Remote todo list generator wrapping the injected chat completions client.
    pub generator: Arc<TodoGenerator>,
}
