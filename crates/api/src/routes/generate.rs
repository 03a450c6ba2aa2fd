//! Route definitions for todo list generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Generation routes, merged under `/api`.
///
/// ```text
/// POST /generate-ui  -> generate_todo_list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-ui", post(generate::generate_todo_list))
}
