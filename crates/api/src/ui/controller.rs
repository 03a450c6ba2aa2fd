//! Page controller: the per-page state machine behind the HTML UI.
//!
//! ```text
//! Idle --submit(non-blank)--> Submitting --ok--> Success
//!                                        --err-> FailureRecovered (mock list + banner)
//! ```
//!
//! A blank draft never leaves Idle and never reaches the generator. Mock mode
//! is a sticky toggle: credit exhaustion switches it on and only the user
//! switches it off again.

use serde_json::Value;

use todogen_core::mock::mock_todo_list;
use todogen_core::prompt::{is_blank, EXAMPLE_PROMPTS};
use todogen_core::schema::{validate_todo_list, TodoList};

use crate::generation::{GenerationError, Generated, TodoGenerator};

/// Banner shown when the upstream reports exhausted credit.
pub const QUOTA_BANNER: &str = "API credit limit reached. Using mock data instead.";

/// Where the page is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Idle,
    Submitting,
    Success,
    FailureRecovered,
}

/// Everything needed to render one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSession {
    pub state: PageState,
    pub draft: String,
    pub mock_mode: bool,
    pub todo_list: Option<TodoList>,
    pub banner: Option<String>,
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new(String::new(), false)
    }
}

impl PageSession {
    /// A fresh idle page.
    pub fn new(draft: impl Into<String>, mock_mode: bool) -> Self {
        Self {
            state: PageState::Idle,
            draft: draft.into(),
            mock_mode,
            todo_list: None,
            banner: None,
        }
    }

    /// Rebuild an idle page from submitted form fields.
    ///
    /// `todo_list_json` is the list the page was last showing. It comes back
    /// from the browser, so it is re-validated and dropped if invalid.
    pub fn restore(draft: impl Into<String>, mock_mode: bool, todo_list_json: Option<&str>) -> Self {
        let mut session = Self::new(draft, mock_mode);
        session.todo_list = todo_list_json
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
            .and_then(|value| match validate_todo_list(&value) {
                Ok(list) => Some(list),
                Err(err) => {
                    tracing::debug!(error = %err, "Discarding invalid round-tripped todo list");
                    None
                }
            });
        session
    }

    /// Whether a request is in flight (form must be disabled).
    pub fn is_busy(&self) -> bool {
        self.state == PageState::Submitting
    }

    /// Whether the form may be submitted.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !is_blank(&self.draft)
    }

    /// Overwrite the draft with example prompt `index`. Ignored while busy or
    /// for an out-of-range index; returns whether the draft changed.
    pub fn use_example(&mut self, index: usize) -> bool {
        if self.is_busy() {
            return false;
        }
        match EXAMPLE_PROMPTS.get(index) {
            Some(example) => {
                self.draft = (*example).to_string();
                true
            }
            None => false,
        }
    }

    /// Flip mock mode.
    pub fn toggle_mock_mode(&mut self) {
        self.mock_mode = !self.mock_mode;
    }

    /// Enter Submitting if the draft is non-blank and nothing is in flight.
    /// Returns the prompt to generate from.
    pub fn begin_submission(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.state = PageState::Submitting;
        self.banner = None;
        Some(self.draft.clone())
    }

    /// Leave Submitting with the generator's result.
    pub fn complete(&mut self, prompt: &str, result: Result<Generated, GenerationError>) {
        match result {
            Ok(generated) => {
                self.state = PageState::Success;
                self.banner = generated.warning;
                self.todo_list = Some(generated.todo_list);
            }
            Err(GenerationError::QuotaExhausted) => {
                tracing::warn!("Credit exhausted, switching to mock mode");
                self.mock_mode = true;
                self.recover(prompt, QUOTA_BANNER.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "Generation failed, using mock data");
                self.recover(prompt, format!("{err}. Using mock data instead."));
            }
        }
    }

    /// Leave Submitting with the local mock list (mock mode).
    pub fn complete_with_mock(&mut self, prompt: &str) {
        self.state = PageState::Success;
        self.todo_list = Some(mock_todo_list(prompt).clone());
    }

    fn recover(&mut self, prompt: &str, banner: String) {
        self.state = PageState::FailureRecovered;
        self.banner = Some(banner);
        self.todo_list = Some(mock_todo_list(prompt).clone());
    }
}

/// Run one submission end to end: blank drafts stay Idle, mock mode skips
/// the generator, everything else makes exactly one generator call.
pub async fn submit(session: &mut PageSession, generator: &TodoGenerator) {
    let Some(prompt) = session.begin_submission() else {
        return;
    };

    if session.mock_mode {
        session.complete_with_mock(&prompt);
        return;
    }

    let result = generator.generate(&prompt).await;
    session.complete(&prompt, result);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use todogen_llm::scripted::ScriptedCompletions;

    fn generator(client: &Arc<ScriptedCompletions>) -> TodoGenerator {
        TodoGenerator::new(client.clone(), "test-model")
    }

    #[tokio::test]
    async fn blank_draft_stays_idle_without_call() {
        let client = Arc::new(ScriptedCompletions::with_content("{}"));
        let mut session = PageSession::new("   ", false);

        submit(&mut session, &generator(&client)).await;

        assert_eq!(session.state, PageState::Idle);
        assert!(session.todo_list.is_none());
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn valid_generation_reaches_success() {
        let client = Arc::new(ScriptedCompletions::with_content(
            r#"{"name":"Remote","todos":[{"title":"A"}]}"#,
        ));
        let mut session = PageSession::new("anything", false);

        submit(&mut session, &generator(&client)).await;

        assert_eq!(session.state, PageState::Success);
        assert_eq!(session.todo_list.unwrap().name, "Remote");
        assert_eq!(session.banner, None);
    }

    #[tokio::test]
    async fn quota_exhaustion_enables_mock_mode() {
        let client = Arc::new(ScriptedCompletions::without_choices());
        let mut session = PageSession::new("shop for dinner", false);

        submit(&mut session, &generator(&client)).await;

        assert_eq!(session.state, PageState::FailureRecovered);
        assert!(session.mock_mode);
        assert_eq!(session.banner.as_deref(), Some(QUOTA_BANNER));
        let list = session.todo_list.as_ref().unwrap();
        assert_eq!(list.name, "Personal Tasks");
        assert!(!list.todos.is_empty());
    }

    #[tokio::test]
    async fn mock_mode_stays_on_and_skips_generator() {
        let client = Arc::new(ScriptedCompletions::without_choices());
        let generator = generator(&client);
        let mut session = PageSession::new("work", false);

        submit(&mut session, &generator).await;
        assert_eq!(client.calls(), 1);

        submit(&mut session, &generator).await;
        assert_eq!(client.calls(), 1);
        assert!(session.mock_mode);
        assert_eq!(session.state, PageState::Success);
        assert_eq!(session.banner, None);

        session.toggle_mock_mode();
        assert!(!session.mock_mode);
    }

    #[tokio::test]
    async fn other_errors_recover_without_mock_mode() {
        let client = Arc::new(ScriptedCompletions::failing(500, "boom"));
        let mut session = PageSession::new("project plan", false);

        submit(&mut session, &generator(&client)).await;

        assert_eq!(session.state, PageState::FailureRecovered);
        assert!(!session.mock_mode);
        assert_eq!(
            session.banner.as_deref(),
            Some("Failed to generate todo list. Using mock data instead.")
        );
        assert_eq!(session.todo_list.unwrap().name, "Work Tasks");
    }

    #[tokio::test]
    async fn malformed_json_recovers_with_banner() {
        let client = Arc::new(ScriptedCompletions::with_content("not json"));
        let mut session = PageSession::new("office", false);

        submit(&mut session, &generator(&client)).await;

        assert_eq!(session.state, PageState::FailureRecovered);
        assert_eq!(
            session.banner.as_deref(),
            Some("Invalid JSON response from API. Using mock data instead.")
        );
    }

    #[tokio::test]
    async fn synthesized_fallback_shows_warning() {
        let client = Arc::new(ScriptedCompletions::with_content(r#"{"todos":"nope"}"#));
        let mut session = PageSession::new("buy paint", false);

        submit(&mut session, &generator(&client)).await;

        assert_eq!(session.state, PageState::Success);
        assert_eq!(session.todo_list.as_ref().unwrap().name, "Shopping List");
        assert!(session.banner.unwrap().contains("validation errors"));
    }

    #[test]
    fn submitting_blocks_resubmission_and_examples() {
        let mut session = PageSession::new("work", false);
        assert_eq!(session.begin_submission().as_deref(), Some("work"));
        assert!(session.is_busy());
        assert!(!session.can_submit());
        assert_eq!(session.begin_submission(), None);
        assert!(!session.use_example(0));
    }

    #[test]
    fn examples_overwrite_draft() {
        let mut session = PageSession::new("old draft", false);
        assert!(session.use_example(1));
        assert_eq!(session.draft, "Make a shopping list for the weekend");
        assert!(!session.use_example(EXAMPLE_PROMPTS.len()));
        assert_eq!(session.draft, "Make a shopping list for the weekend");
    }

    #[test]
    fn restore_validates_round_tripped_list() {
        let session = PageSession::restore("x", true, Some(r#"{"name":"Kept","todos":[]}"#));
        assert_eq!(session.todo_list.unwrap().name, "Kept");
        assert!(session.mock_mode);

        let session = PageSession::restore("x", false, Some(r#"{"todos":[{"priority":"urgent"}]}"#));
        assert!(session.todo_list.is_none());

        let session = PageSession::restore("x", false, Some("<not json>"));
        assert!(session.todo_list.is_none());
        assert_eq!(session.state, PageState::Idle);
    }
}
