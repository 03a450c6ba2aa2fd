pub mod generate;
pub mod health;
pub mod page;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-ui                                     generate a todo list (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(generate::router())
}
