//! Todo list schema and structural validation.
//!
//! Validation walks the raw [`serde_json::Value`] first so that every
//! violating field is reported with its path, then deserializes into the
//! typed [`TodoList`] with defaults applied.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldViolation, SchemaError};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Todo priority. Defaults to `medium` when the field is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All accepted values, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse the exact wire value. Matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Todo {
    /// A pending, medium-priority todo with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            completed: false,
            priority: Priority::default(),
            due_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn mark_completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// A named, ordered list of todos. The unit of exchange between components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an untyped JSON document against the todo list schema.
///
/// Returns the typed list with defaults applied (`completed = false`,
/// `priority = medium`, `todos = []`) or a [`SchemaError`] listing every
/// violation. Optional fields may be absent but not `null`. Unknown fields
/// are ignored.
pub fn validate_todo_list(value: &Value) -> Result<TodoList, SchemaError> {
    let Some(object) = value.as_object() else {
        return Err(SchemaError::single("", expected("object", value)));
    };

    let mut violations = Vec::new();

    match object.get("name") {
        Some(Value::String(_)) => {}
        None => violations.push(FieldViolation::new("name", "Required")),
        Some(other) => violations.push(FieldViolation::new("name", expected("string", other))),
    }

    match object.get("todos") {
        None => {}
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                check_todo(&format!("todos[{index}]"), item, &mut violations);
            }
        }
        Some(other) => violations.push(FieldViolation::new("todos", expected("array", other))),
    }

    if !violations.is_empty() {
        return Err(SchemaError { violations });
    }

    serde_json::from_value(value.clone()).map_err(|e| SchemaError::single("", e.to_string()))
}

fn check_todo(path: &str, value: &Value, violations: &mut Vec<FieldViolation>) {
    let Some(todo) = value.as_object() else {
        violations.push(FieldViolation::new(path, expected("object", value)));
        return;
    };

    match todo.get("title") {
        Some(Value::String(_)) => {}
        None => violations.push(FieldViolation::new(format!("{path}.title"), "Required")),
        Some(other) => violations.push(FieldViolation::new(
            format!("{path}.title"),
            expected("string", other),
        )),
    }

    for field in ["id", "description", "dueDate"] {
        check_optional(todo, path, field, Value::is_string, "string", violations);
    }
    check_optional(todo, path, "completed", Value::is_boolean, "boolean", violations);

    match todo.get("priority") {
        None => {}
        Some(Value::String(s)) if Priority::parse(s).is_some() => {}
        Some(Value::String(s)) => violations.push(FieldViolation::new(
            format!("{path}.priority"),
            format!("Invalid enum value. Expected 'low' | 'medium' | 'high', received '{s}'"),
        )),
        Some(other) => violations.push(FieldViolation::new(
            format!("{path}.priority"),
            expected("string", other),
        )),
    }
}

fn check_optional(
    todo: &Map<String, Value>,
    path: &str,
    field: &str,
    accepts: fn(&Value) -> bool,
    type_name: &str,
    violations: &mut Vec<FieldViolation>,
) {
    if let Some(value) = todo.get(field) {
        if !accepts(value) {
            violations.push(FieldViolation::new(
                format!("{path}.{field}"),
                expected(type_name, value),
            ));
        }
    }
}

fn expected(type_name: &str, received: &Value) -> String {
    format!("Expected {type_name}, received {}", json_type_name(received))
}

/// Human-readable JSON type name used in violation messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
