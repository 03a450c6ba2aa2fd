//! Route definitions for the HTML page.

use axum::routing::get;
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET  /  -> show_page
/// POST /  -> submit_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(page::show_page).post(page::submit_page))
}
