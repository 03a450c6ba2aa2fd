//! Keyword-driven synthesis of a basic todo list.
//!
//! Used when the model answered with JSON that stays invalid after the
//! repair pass. Unlike [`crate::mock`], the result is built per prompt and
//! has a generic category for prompts matching no keyword.

use crate::schema::{Priority, Todo, TodoList};

fn todo(title: &str, description: &str, priority: Priority) -> Todo {
    Todo::new(title)
        .with_description(description)
        .with_priority(priority)
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Build a three-item list for `prompt`. First matching rule wins:
/// work/project, home/house, shop/buy, then a generic list named after the
/// prompt.
pub fn basic_todo_list(prompt: &str) -> TodoList {
    let lowercase = prompt.to_lowercase();
    let matches = |keywords: &[&str]| contains_any(&lowercase, keywords);

    let (name, todos) = if matches(&["work", "project"][..]) {
        (
            "Work Tasks".to_string(),
            vec![
                todo("Complete project documentation", "Update all project files", Priority::High),
                todo("Schedule team meeting", "Discuss project timeline", Priority::Medium),
                todo("Review recent changes", "Check latest updates", Priority::Medium),
            ],
        )
    } else if matches(&["home", "house"][..]) {
        (
            "Home Tasks".to_string(),
            vec![
                todo("Clean kitchen", "Wipe counters and sweep floor", Priority::Medium),
                todo("Do laundry", "Wash and fold clothes", Priority::High),
                todo("Grocery shopping", "Buy essentials for the week", Priority::Medium),
            ],
        )
    } else if matches(&["shop", "buy"][..]) {
        (
            "Shopping List".to_string(),
            vec![
                todo("Buy groceries", "Fruits, vegetables, and milk", Priority::High),
                todo("Get household supplies", "Cleaning products and toiletries", Priority::Medium),
                todo("Check for sales", "Look for discounts on needed items", Priority::Low),
            ],
        )
    } else {
        (
            format!("Todo List for {prompt}"),
            vec![
                todo("Task 1", "Complete important task", Priority::High),
                todo("Task 2", "Plan next steps", Priority::Medium),
                todo("Task 3", "Follow up on progress", Priority::Low),
            ],
        )
    };

    TodoList { name, todos }
}
