//! HTML rendering for todo lists.
//!
//! Every piece of list content is escaped before insertion; model output is
//! never trusted as markup.

use crate::schema::TodoList;

/// Escape text for insertion into HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a validated list to a self-contained HTML fragment.
///
/// Each todo becomes an `li.todo-item` carrying a `priority-<level>` class
/// (plus `completed` when done) with its title, priority tag, optional
/// description and due date, and a `Completed`/`Pending` status label.
pub fn convert_to_html(todo_list: &TodoList) -> String {
    let mut html = format!(
        "<div class=\"todo-list\">\n  <h2>{}</h2>\n  <ul class=\"todos\">",
        escape_html(&todo_list.name)
    );

    for todo in &todo_list.todos {
        let priority = todo.priority.as_str();
        let completed_class = if todo.completed { " completed" } else { "" };

        html.push_str(&format!(
            "\n    <li class=\"todo-item priority-{priority}{completed_class}\">\n      \
             <div class=\"todo-header\">\n        <h3>{}</h3>\n        \
             <span class=\"priority\">{priority}</span>\n      </div>",
            escape_html(&todo.title)
        ));

        if let Some(description) = &todo.description {
            html.push_str(&format!("\n      <p>{}</p>", escape_html(description)));
        }
        if let Some(due_date) = &todo.due_date {
            html.push_str(&format!(
                "\n      <div class=\"due-date\">Due: {}</div>",
                escape_html(due_date)
            ));
        }

        let status = if todo.completed { "Completed" } else { "Pending" };
        html.push_str(&format!(
            "\n      <div class=\"status\">{status}</div>\n    </li>"
        ));
    }

    html.push_str("\n  </ul>\n</div>");
    html
}
