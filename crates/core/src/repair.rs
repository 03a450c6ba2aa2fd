//! Bounded repair pass for schema-invalid model output.
//!
//! Models occasionally echo the shape example literally (`"high|medium|low"`)
//! or emit booleans as strings. The pass coerces exactly those two cases and
//! leaves everything else untouched.

use serde_json::Value;

use crate::schema::Priority;

/// Placeholder the model sometimes copies verbatim from the instruction.
pub const PRIORITY_PLACEHOLDER: &str = "high|medium|low";

/// Apply the repair coercions in place. Returns the number of values changed.
///
/// - `priority == "high|medium|low"` becomes `"medium"`.
/// - String `completed` becomes `true` iff it equals `"true"` ignoring case.
///
/// Idempotent, and a no-op on a document that already validates.
pub fn repair_todo_list(document: &mut Value) -> usize {
    let Some(todos) = document.get_mut("todos").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut changed = 0;
    for todo in todos.iter_mut().filter_map(Value::as_object_mut) {
        if todo.get("priority").and_then(Value::as_str) == Some(PRIORITY_PLACEHOLDER) {
            todo.insert(
                "priority".to_string(),
                Value::String(Priority::Medium.as_str().to_string()),
            );
            changed += 1;
        }

        if let Some(Value::String(completed)) = todo.get("completed") {
            let coerced = completed.eq_ignore_ascii_case("true");
            todo.insert("completed".to_string(), Value::Bool(coerced));
            changed += 1;
        }
    }
    changed
}
