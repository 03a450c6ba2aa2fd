//! Canned todo lists served when the remote model is unavailable.

use std::sync::LazyLock;

use crate::schema::{Priority, Todo, TodoList};

/// Prompt keywords selecting the work list.
pub const WORK_KEYWORDS: [&str; 3] = ["work", "office", "project"];

/// Prompt keywords selecting the personal list.
pub const PERSONAL_KEYWORDS: [&str; 3] = ["personal", "home", "shop"];

static WORK_TODO_LIST: LazyLock<TodoList> = LazyLock::new(|| TodoList {
    name: "Work Tasks".to_string(),
    todos: vec![
        Todo::new("Complete project proposal")
            .with_description("Finish the budget section and executive summary")
            .with_priority(Priority::High)
            .with_due_date("2023-12-15"),
        Todo::new("Review pull requests")
            .with_description("Check the new feature implementations from the team")
            .with_priority(Priority::Medium),
        Todo::new("Update documentation")
            .with_description("Add examples to the API documentation")
            .with_priority(Priority::Low)
            .mark_completed(),
        Todo::new("Weekly team meeting")
            .with_description("Prepare status update for the sprint review")
            .with_priority(Priority::Medium)
            .with_due_date("2023-12-12"),
        Todo::new("Fix critical bug in production")
            .with_description("The login page is not working for some users")
            .with_priority(Priority::High),
    ],
});

static PERSONAL_TODO_LIST: LazyLock<TodoList> = LazyLock::new(|| TodoList {
    name: "Personal Tasks".to_string(),
    todos: vec![
        Todo::new("Grocery shopping")
            .with_description("Buy ingredients for the week")
            .with_priority(Priority::Medium),
        Todo::new("Pay bills")
            .with_description("Electricity and internet bills are due")
            .with_priority(Priority::High)
            .with_due_date("2023-12-10"),
        Todo::new("Schedule dentist appointment")
            .with_description("Call Dr. Smith for a checkup")
            .with_priority(Priority::Low),
        Todo::new("Clean garage")
            .with_description("Organize tools and donate unused items")
            .with_priority(Priority::Low),
        Todo::new("Morning run")
            .with_description("5km run in the park")
            .with_priority(Priority::Medium)
            .mark_completed(),
    ],
});

/// The canned work list.
pub fn work_todo_list() -> &'static TodoList {
    &WORK_TODO_LIST
}

/// The canned personal list.
pub fn personal_todo_list() -> &'static TodoList {
    &PERSONAL_TODO_LIST
}

/// Pick a canned list by case-insensitive keyword match.
///
/// Work keywords win over personal ones; no match falls back to the work
/// list. Always returns one of the two shared statics.
pub fn mock_todo_list(prompt: &str) -> &'static TodoList {
    let prompt = prompt.to_lowercase();

    if WORK_KEYWORDS.iter().any(|k| prompt.contains(k)) {
        work_todo_list()
    } else if PERSONAL_KEYWORDS.iter().any(|k| prompt.contains(k)) {
        personal_todo_list()
    } else {
        work_todo_list()
    }
}
