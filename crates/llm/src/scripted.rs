//! A [`ChatCompletions`] implementation that answers from a fixed script.
//!
//! Makes no network calls. Records every request it receives so callers can
//! assert on what would have been sent upstream.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::LlmApiError;
use crate::messages::{ChatCompletionRequest, ChatCompletionResponse};
use crate::ChatCompletions;

/// What the scripted client answers with.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// A successful completion response.
    Respond(ChatCompletionResponse),
    /// An upstream HTTP failure.
    Fail { status: u16, body: String },
}

/// Replays the same [`ScriptedReply`] for every request.
pub struct ScriptedCompletions {
    reply: ScriptedReply,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl ScriptedCompletions {
    pub fn new(reply: ScriptedReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with a single choice carrying `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::new(ScriptedReply::Respond(ChatCompletionResponse::with_content(
            content,
        )))
    }

    /// Answer every request with an empty choice list.
    pub fn without_choices() -> Self {
        Self::new(ScriptedReply::Respond(
            ChatCompletionResponse::without_choices(),
        ))
    }

    /// Fail every request with the given upstream status.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self::new(ScriptedReply::Fail {
            status,
            body: body.into(),
        })
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.lock().len()
    }

    /// Copies of every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ChatCompletionRequest>> {
        // A poisoned lock only means another caller panicked mid-push.
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ChatCompletions for ScriptedCompletions {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmApiError> {
        self.lock().push(request.clone());
        match &self.reply {
            ScriptedReply::Respond(response) => Ok(response.clone()),
            ScriptedReply::Fail { status, body } => Err(LlmApiError::ApiError {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
