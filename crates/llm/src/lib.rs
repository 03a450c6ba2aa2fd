//! OpenRouter chat completions client.
//!
//! Provides the wire types for the chat completions endpoint, an HTTP client
//! built on [`reqwest`], its environment configuration, and the
//! [`ChatCompletions`] trait through which callers receive an injected client.

pub mod api;
pub mod config;
pub mod messages;
pub mod scripted;

use async_trait::async_trait;

use crate::api::LlmApiError;
use crate::messages::{ChatCompletionRequest, ChatCompletionResponse};

/// Anything able to answer one chat completion request.
///
/// Implemented by [`api::OpenRouterApi`] for real traffic and by
/// [`scripted::ScriptedCompletions`] for tests and offline runs.
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    /// Send exactly one completion request. Implementations never retry.
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmApiError>;
}
