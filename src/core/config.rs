//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::languages::Language;
use crate::core::messages::{Locale, Messages};

/// Public MyMemory endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Prefix of the environment variables read by [`TranslatorConfig::load`]
pub const ENV_PREFIX: &str = "TRADUTOR";

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// MyMemory `get` endpoint
    pub api_endpoint: String,
    /// Source language a session starts with
    pub default_from: Language,
    /// Target language a session starts with
    pub default_to: Language,
    /// Debounce window in milliseconds
    pub debounce_ms: u64,
    /// No timeout unless set; the transport's own defaults apply
    pub timeout_ms: Option<u64>,
    /// Language of the interface strings
    pub locale: Locale,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            default_from: Language::Portuguese,
            default_to: Language::English,
            debounce_ms: 300,
            timeout_ms: None,
            locale: Locale::English,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from defaults, an optional file and `TRADUTOR_*` variables
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`TranslatorConfig::load`], reading variables from `env`
    /// instead of the process environment when given
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Reading configuration file {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        info!(
            "Using endpoint {} ({} -> {})",
            config.api_endpoint, config.default_from, config.default_to
        );

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.trim().is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        reqwest::Url::parse(&self.api_endpoint)
            .map_err(|e| anyhow::anyhow!("Invalid API endpoint {}: {}", self.api_endpoint, e))?;

        if self.timeout_ms == Some(0) {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Quiet period before an edit is translated
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// String table of the configured locale
    pub fn messages(&self) -> &'static Messages {
        Messages::for_locale(self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_from, Language::Portuguese);
        assert_eq!(config.default_to, Language::English);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_config_validation_bad_endpoint() {
        let config = TranslatorConfig {
            api_endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            api_endpoint: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"default_to": "de", "timeout_ms": 2500}}"#).unwrap();

        let config = TranslatorConfig::load_with_env(Some(file.path()), Some(config::Map::new()))
            .unwrap();
        assert_eq!(config.default_to, Language::German);
        assert_eq!(config.timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn test_load_rejects_unknown_language() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"default_from": "xx"}}"#).unwrap();

        let loaded = TranslatorConfig::load_with_env(Some(file.path()), Some(config::Map::new()));
        assert!(loaded.is_err());
    }

    #[test]
    fn test_environment_overrides_file_and_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"default_to": "de", "debounce_ms": 100}}"#).unwrap();

        let mut env = config::Map::new();
        env.insert("TRADUTOR_DEFAULT_TO".to_string(), "fr".to_string());
        env.insert("TRADUTOR_DEBOUNCE_MS".to_string(), "42".to_string());
        env.insert("TRADUTOR_LOCALE".to_string(), "pt".to_string());

        let config = TranslatorConfig::load_with_env(Some(file.path()), Some(env)).unwrap();
        assert_eq!(config.default_to, Language::French);
        assert_eq!(config.debounce(), Duration::from_millis(42));
        assert_eq!(config.locale, Locale::Portuguese);
        assert_eq!(config.default_from, Language::Portuguese);
    }

    #[test]
    fn test_environment_alone_overrides_defaults() {
        let mut env = config::Map::new();
        env.insert("TRADUTOR_DEFAULT_FROM".to_string(), "it".to_string());

        let config = TranslatorConfig::load_with_env(None, Some(env)).unwrap();
        assert_eq!(config.default_from, Language::Italian);
        assert_eq!(config.default_to, Language::English);
    }
}
