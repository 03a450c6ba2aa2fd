//! Result panel: rendered list plus its JSON structure.

use todogen_core::render::{convert_to_html, escape_html};
use todogen_core::schema::TodoList;

/// Message shown before any list exists.
pub const EMPTY_STATE: &str = "No todo list available";

/// Render the display panel for `todo_list`.
///
/// `None` yields the empty-state panel. Otherwise the list's HTML fragment is
/// followed by its pretty-printed JSON in a `<pre>` block.
pub fn render_display(todo_list: Option<&TodoList>) -> String {
    let Some(todo_list) = todo_list else {
        return format!("<div class=\"panel empty-state\">{EMPTY_STATE}</div>");
    };

    let json = serde_json::to_string_pretty(todo_list).unwrap_or_default();

    format!(
        "<div class=\"display\">\n\
         <div class=\"panel\">\n<h2>Generated Todo List</h2>\n\
         <div class=\"todo-list-container\">\n{}\n</div>\n</div>\n\
         <div class=\"panel\">\n<h2>JSON Structure</h2>\n\
         <pre class=\"json\">{}</pre>\n</div>\n\
         </div>",
        convert_to_html(todo_list),
        escape_html(&json)
    )
}
