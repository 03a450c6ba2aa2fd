/// Default OpenRouter API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// Default `HTTP-Referer` attribution header value.
pub const DEFAULT_REFERER: &str = "https://structured-output-demo.vercel.app";

/// Default `X-Title` attribution header value.
pub const DEFAULT_TITLE: &str = "Structured Output Demo";

/// Upstream provider routing hint sent as the `route` query parameter.
pub const DEFAULT_ROUTE: &str = "openai";

/// Chat completions client configuration loaded from environment variables.
#[derive(Clone)]
pub struct LlmConfig {
    /// API key. Empty means requests go out unauthenticated.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub referer: String,
    pub title: String,
    pub route: String,
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                                     |
    /// |-----------------------|---------------------------------------------|
    /// | `OPENROUTER_API_KEY`  | empty                                       |
    /// | `OPENROUTER_BASE_URL` | `https://openrouter.ai/api/v1`              |
    /// | `OPENROUTER_MODEL`    | `openai/gpt-3.5-turbo`                      |
    /// | `OPENROUTER_REFERER`  | `https://structured-output-demo.vercel.app` |
    /// | `OPENROUTER_TITLE`    | `Structured Output Demo`                    |
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.into());

        Self {
            api_key: var("OPENROUTER_API_KEY", ""),
            base_url: var("OPENROUTER_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            model: var("OPENROUTER_MODEL", DEFAULT_MODEL),
            referer: var("OPENROUTER_REFERER", DEFAULT_REFERER),
            title: var("OPENROUTER_TITLE", DEFAULT_TITLE),
            route: DEFAULT_ROUTE.to_string(),
        }
    }

    /// Configuration pointing at `base_url` with every other field defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            route: DEFAULT_ROUTE.to_string(),
        }
    }

    /// Whether an API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<unset>" })
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .field("route", &self.route)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let mut config = LlmConfig::with_base_url("http://localhost:1");
        config.api_key = "sk-secret".to_string();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn with_base_url_uses_defaults() {
        let config = LlmConfig::with_base_url("http://localhost:1");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.route, "openai");
        assert!(!config.has_api_key());
    }
}
