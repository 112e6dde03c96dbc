pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Endpoint configuration for one client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub model: String,
    pub base_url: String,
    pub api_key: String,
    /// Completion-endpoint token cap. `None` leaves it to the provider.
    pub max_tokens: Option<u32>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            max_tokens: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ClientConfig::new("sk-test")
            .with_model("deepseek-reasoner")
            .with_base_url("https://example.com/v1/");
        assert_eq!(config.model, "deepseek-reasoner");
        assert_eq!(config.base_url, "https://example.com/v1/");
        assert_eq!(config.api_key, "sk-test");
        assert!(config.max_tokens.is_none());
    }
}
