//! Handler for the JSON generation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use todogen_core::prompt::is_blank;

use crate::error::{AppError, AppResult};
use crate::generation::GenerationError;
use crate::response::GenerateResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// API request types
// ---------------------------------------------------------------------------

/// Request body for generating a todo list.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(required, custom(function = "validate_not_blank"))]
    pub prompt: Option<String>,
}

fn validate_not_blank(prompt: &str) -> Result<(), ValidationError> {
    if is_blank(prompt) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/generate-ui -- generate a todo list from a prompt.
///
/// Missing or blank prompts are rejected with 400 before any upstream call.
pub async fn generate_todo_list(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<GenerateResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if let Err(errors) = request.validate() {
        tracing::debug!(%errors, "Rejected generate request");
        return Err(GenerationError::MissingInput.into());
    }
    let prompt = request.prompt.unwrap_or_default();

    let generated = state.generator.generate(&prompt).await?;
    tracing::info!(
        outcome = ?generated.outcome,
        todos = generated.todo_list.todos.len(),
        "Generated todo list"
    );

    Ok(Json(generated.into()))
}
