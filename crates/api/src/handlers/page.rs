//! Handlers for the server-rendered page.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::state::AppState;
use crate::ui::controller::{self, PageSession};
use crate::ui::form::{ACTION_GENERATE, ACTION_TOGGLE_MOCK};
use crate::ui::layout::render_page;

// ---------------------------------------------------------------------------
// Form types
// ---------------------------------------------------------------------------

/// Fields posted by the page form. Only the clicked button's `action` or
/// `example` value is present.
#[derive(Debug, Default, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub mock_mode: bool,
    #[serde(default)]
    pub todo_list: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub example: Option<usize>,
}

/// What the user asked the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Generate,
    ToggleMockMode,
    UseExample(usize),
    /// Unrecognised or missing action: re-render unchanged.
    Refresh,
}

impl PageForm {
    pub fn command(&self) -> PageCommand {
        if let Some(index) = self.example {
            return PageCommand::UseExample(index);
        }
        match self.action.as_deref() {
            Some(ACTION_GENERATE) => PageCommand::Generate,
            Some(ACTION_TOGGLE_MOCK) => PageCommand::ToggleMockMode,
            _ => PageCommand::Refresh,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET / -- the idle page.
pub async fn show_page() -> Html<String> {
    Html(render_page(&PageSession::default()))
}

/// POST / -- apply one form command and re-render.
///
/// A form that fails to decode renders the idle page.
pub async fn submit_page(
    State(state): State<AppState>,
    form: Result<Form<PageForm>, FormRejection>,
) -> Html<String> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected page form");
            return Html(render_page(&PageSession::default()));
        }
    };
    let command = form.command();
    let mut session = PageSession::restore(form.prompt, form.mock_mode, form.todo_list.as_deref());

    tracing::debug!(?command, mock_mode = session.mock_mode, "Page command");

    match command {
        PageCommand::Generate => controller::submit(&mut session, &state.generator).await,
        PageCommand::ToggleMockMode => session.toggle_mock_mode(),
        PageCommand::UseExample(index) => {
            session.use_example(index);
        }
        PageCommand::Refresh => {}
    }

    Html(render_page(&session))
}
