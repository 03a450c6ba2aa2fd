//! Response envelope types for the JSON API.

use serde::Serialize;

use todogen_core::schema::TodoList;

use crate::generation::Generated;

/// Successful `POST /api/generate-ui` body: `{ "todoList": ..., "warning"?: ... }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub todo_list: TodoList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<Generated> for GenerateResponse {
    fn from(generated: Generated) -> Self {
        Self {
            todo_list: generated.todo_list,
            warning: generated.warning,
        }
    }
}
