//! Remote todo list generation.
//!
//! [`TodoGenerator`] sends one chat completion request per prompt and turns
//! the answer into a validated [`TodoList`]:
//!
//! 1. No candidates -> [`GenerationError::QuotaExhausted`].
//! 2. Unparseable content -> [`GenerationError::MalformedResponse`].
//! 3. Schema violation -> one repair pass, then re-validation.
//! 4. Still invalid -> a keyword-synthesized list returned with a warning.

use std::sync::Arc;

use serde_json::Value;

use todogen_core::fallback::basic_todo_list;
use todogen_core::prompt::{
    is_blank, user_instruction, GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE, SYSTEM_INSTRUCTION,
};
use todogen_core::repair::repair_todo_list;
use todogen_core::schema::{validate_todo_list, TodoList};
use todogen_llm::api::LlmApiError;
use todogen_llm::messages::{ChatCompletionRequest, ChatMessage, ResponseFormat};
use todogen_llm::ChatCompletions;

/// Warning attached to a list synthesized after repair failed.
pub const FALLBACK_WARNING: &str =
    "Generated a simple todo list due to validation errors with API response";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Why generation failed. Schema violations never appear here: they are
/// repaired or replaced by a synthesized list.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The prompt was missing or blank. Raised before any network call.
    #[error("Prompt is required")]
    MissingInput,

    /// The upstream answered without any candidate output.
    #[error("API credit limit reached. Please use mock data.")]
    QuotaExhausted,

    /// The candidate text was not valid JSON.
    #[error("Invalid JSON response from API")]
    MalformedResponse(#[source] serde_json::Error),

    /// Network failure or upstream HTTP error.
    #[error("Failed to generate todo list")]
    Unexpected(#[from] LlmApiError),
}

/// How the returned list was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The model output validated as-is.
    Validated,
    /// The model output validated after the repair pass.
    Repaired,
    /// The model output stayed invalid; the list was synthesized locally.
    Synthesized,
}

/// A successfully produced todo list.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub todo_list: TodoList,
    pub outcome: GenerationOutcome,
    /// User-facing warning, set only for [`GenerationOutcome::Synthesized`].
    pub warning: Option<String>,
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generates todo lists through an injected [`ChatCompletions`] client.
pub struct TodoGenerator {
    client: Arc<dyn ChatCompletions>,
    model: String,
}

impl TodoGenerator {
    pub fn new(client: Arc<dyn ChatCompletions>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The fixed completion request for `prompt`.
    pub fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_INSTRUCTION),
                ChatMessage::user(user_instruction(prompt)),
            ],
            max_tokens: GENERATION_MAX_TOKENS,
            temperature: GENERATION_TEMPERATURE,
            response_format: Some(ResponseFormat::json_object()),
        }
    }

    /// Generate a todo list for `prompt` with exactly one upstream call.
    pub async fn generate(&self, prompt: &str) -> Result<Generated, GenerationError> {
        if is_blank(prompt) {
            return Err(GenerationError::MissingInput);
        }

        let request = self.build_request(prompt);
        let response = self.client.create_chat_completion(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Chat completion request failed");
            GenerationError::from(e)
        })?;

        tracing::debug!(
            raw_response = %serde_json::to_string(&response).unwrap_or_default(),
            "Raw API response"
        );

        if !response.has_choices() {
            tracing::error!("No choices returned from API");
            return Err(GenerationError::QuotaExhausted);
        }

        let content = response
            .first_content()
            .filter(|c| !c.is_empty())
            .unwrap_or("{}");
        let mut document: Value = serde_json::from_str(content).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse JSON response");
            GenerationError::MalformedResponse(e)
        })?;

        match validate_todo_list(&document) {
            Ok(todo_list) => {
                return Ok(Generated {
                    todo_list,
                    outcome: GenerationOutcome::Validated,
                    warning: None,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "Schema validation error, attempting repair");
            }
        }

        let coerced = repair_todo_list(&mut document);
        match validate_todo_list(&document) {
            Ok(todo_list) => {
                tracing::info!(coerced, "Repaired model output passed validation");
                Ok(Generated {
                    todo_list,
                    outcome: GenerationOutcome::Repaired,
                    warning: None,
                })
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    violations = err.violations.len(),
                    "Failed to fix validation errors"
                );
                let todo_list = basic_todo_list(prompt);
                tracing::info!(name = %todo_list.name, "Created simple todo list as fallback");
                Ok(Generated {
                    todo_list,
                    outcome: GenerationOutcome::Synthesized,
                    warning: Some(FALLBACK_WARNING.to_string()),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
