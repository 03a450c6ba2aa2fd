//! HTTP client for the OpenRouter chat completions endpoint.
//!
//! Wraps `POST {base_url}/chat/completions` using [`reqwest`]. The client
//! carries the attribution headers on every request and performs exactly one
//! HTTP call per completion; it never retries.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};

use crate::config::LlmConfig;
use crate::messages::{ChatCompletionRequest, ChatCompletionResponse};
use crate::ChatCompletions;

/// HTTP client for an OpenRouter-compatible API.
pub struct OpenRouterApi {
    client: reqwest::Client,
    config: LlmConfig,
}

/// Errors from the chat completions API layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("LLM API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A configured attribution header value is not a valid header.
    #[error("Invalid header value for {name}: {source}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl OpenRouterApi {
    /// Create a client from configuration.
    ///
    /// Fails if the referer or title cannot be sent as header values.
    pub fn new(config: LlmConfig) -> Result<Self, LlmApiError> {
        attribution_headers(&config)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for sharing a connection pool).
    pub fn with_client(client: reqwest::Client, config: LlmConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Full completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Send one chat completion request.
    ///
    /// An empty API key sends the request without an `Authorization` header;
    /// the upstream rejects it and that surfaces as [`LlmApiError::ApiError`].
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmApiError> {
        let mut builder = self
            .client
            .post(self.completions_url())
            .query(&[("route", self.config.route.as_str())])
            .headers(attribution_headers(&self.config)?)
            .json(request);

        if self.config.has_api_key() {
            builder = builder.bearer_auth(&self.config.api_key);
        }

        tracing::debug!(model = %request.model, url = %self.completions_url(), "Sending chat completion request");

        let response = builder.send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, returning
    /// [`LlmApiError::ApiError`] with the body text otherwise.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, LlmApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body.
    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<ChatCompletionResponse, LlmApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<ChatCompletionResponse>().await?)
    }
}

#[async_trait]
impl ChatCompletions for OpenRouterApi {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmApiError> {
        OpenRouterApi::create_chat_completion(self, request).await
    }
}

/// `HTTP-Referer` and `X-Title` headers identifying the calling app.
fn attribution_headers(config: &LlmConfig) -> Result<HeaderMap, LlmApiError> {
    let mut headers = HeaderMap::new();
    for (name, value) in [("http-referer", &config.referer), ("x-title", &config.title)] {
        let value = HeaderValue::from_str(value)
            .map_err(|source| LlmApiError::InvalidHeader { name, source })?;
        headers.insert(HeaderName::from_static(name), value);
    }
    Ok(headers)
}
