//! Prompt form with example prompts.
//!
//! The form posts back to `/`. Hidden fields carry the mock-mode flag and the
//! currently displayed list so the page keeps its state across requests.

use todogen_core::prompt::EXAMPLE_PROMPTS;
use todogen_core::render::escape_html;

use super::controller::PageSession;

/// `id` of the form element; buttons outside the form reference it.
pub const FORM_ID: &str = "prompt-form";

/// Form action value for a generation request.
pub const ACTION_GENERATE: &str = "generate";

/// Form action value for flipping mock mode.
pub const ACTION_TOGGLE_MOCK: &str = "toggle-mock";

/// Render the prompt form for `session`.
pub fn render_form(session: &PageSession) -> String {
    let busy = session.is_busy();
    let disabled = |off: bool| if off { " disabled" } else { "" };

    let todo_list_json = session
        .todo_list
        .as_ref()
        .and_then(|list| serde_json::to_string(list).ok())
        .unwrap_or_default();

    let examples: String = EXAMPLE_PROMPTS
        .iter()
        .enumerate()
        .map(|(index, example)| {
            format!(
                "\n      <button type=\"submit\" name=\"example\" value=\"{index}\" \
                 class=\"example\" formnovalidate{}>{}</button>",
                disabled(busy),
                escape_html(example)
            )
        })
        .collect();

    let submit_label = if busy { "Generating..." } else { "Generate Todo List" };

    format!(
        "<div class=\"panel\">\n  <h2>Todo List Generator</h2>\n  \
         <form id=\"{FORM_ID}\" method=\"post\" action=\"/\">\n    \
         <input type=\"hidden\" name=\"mock_mode\" value=\"{mock_mode}\">\n    \
         <input type=\"hidden\" name=\"todo_list\" value=\"{todo_list}\">\n    \
         <label for=\"prompt\">Describe the todo list you want to generate:</label>\n    \
         <textarea id=\"prompt\" name=\"prompt\" rows=\"3\" \
         placeholder=\"e.g., Create a work tasks todo list\"{textarea_disabled}>{draft}</textarea>\n    \
         <div class=\"examples\">\n      <span>Examples:</span>{examples}\n    </div>\n    \
         <button type=\"submit\" id=\"submit\" name=\"action\" value=\"{ACTION_GENERATE}\" \
         class=\"primary\"{submit_disabled}>{submit_label}</button>\n  \
         </form>\n</div>",
        mock_mode = session.mock_mode,
        todo_list = escape_html(&todo_list_json),
        textarea_disabled = disabled(busy),
        draft = escape_html(&session.draft),
        submit_disabled = disabled(!session.can_submit()),
    )
}
