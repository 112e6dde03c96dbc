use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// User settings — stored in `config.json` at the store root. All keys are
/// optional; flags and built-in defaults fill the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: Option<String>,
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key.
    pub api_key_env: Option<String>,
}

impl Settings {
    /// Load from the store's `config.json`. Returns defaults if the file
    /// is missing or unparseable.
    pub fn load(root: &Path) -> Self {
        let path = skald_store::config_path(root);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = Settings::load(tmp.path());
        assert!(settings.model.is_none());
        assert_eq!(settings.api_key_env(), DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn config_values_are_read() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            skald_store::config_path(tmp.path()),
            r#"{"model":"deepseek-reasoner","api_key_env":"MY_KEY"}"#,
        )
        .unwrap();
        let settings = Settings::load(tmp.path());
        assert_eq!(settings.model.as_deref(), Some("deepseek-reasoner"));
        assert_eq!(settings.api_key_env(), "MY_KEY");
    }

    #[test]
    fn unparseable_config_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(skald_store::config_path(tmp.path()), "{broken").unwrap();
        let settings = Settings::load(tmp.path());
        assert!(settings.base_url.is_none());
    }
}
