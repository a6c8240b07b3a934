//! Relay configuration.

use std::time::Duration;

use config::{Config, Environment, Source};
use serde::{Deserialize, Serialize};

use crate::error::{RelayError, Result};
use crate::{
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT, DEFAULT_SUMMARY_MAX_TOKENS, DEFAULT_SUMMARY_MODEL,
    DEFAULT_SUMMARY_TEMPERATURE, DEFAULT_TRANSCRIPTION_LANGUAGE, DEFAULT_TRANSCRIPTION_MODEL,
    DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

/// Global relay configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Port the HTTP server listens on
    pub port: u16,

    /// Base URL of the OpenAI-compatible API
    pub open_ai_api_url: String,

    /// Bearer token sent with every upstream call
    #[serde(skip_serializing)]
    pub open_ai_api_key: String,

    /// Model used for transcription
    pub transcription_model: String,

    /// Spoken language hint for transcription
    pub transcription_language: String,

    /// Chat model used for summaries
    pub summary_model: String,

    /// Maximum completion tokens for a summary
    pub summary_max_tokens: u32,

    /// Sampling temperature for a summary
    pub summary_temperature: f32,

    /// Timeout for each upstream call, in seconds
    pub upstream_timeout_secs: u64,

    /// Maximum accepted request body size, in bytes
    pub max_upload_bytes: usize,
}

impl RelayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_source(Environment::default().try_parsing(true))
    }

    /// Load configuration from an arbitrary source, applying defaults for
    /// every optional setting.
    pub fn from_source<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let config: RelayConfig = Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("transcription_model", DEFAULT_TRANSCRIPTION_MODEL)?
            .set_default("transcription_language", DEFAULT_TRANSCRIPTION_LANGUAGE)?
            .set_default("summary_model", DEFAULT_SUMMARY_MODEL)?
            .set_default("summary_max_tokens", i64::from(DEFAULT_SUMMARY_MAX_TOKENS))?
            .set_default("summary_temperature", f64::from(DEFAULT_SUMMARY_TEMPERATURE))?
            .set_default("upstream_timeout_secs", DEFAULT_UPSTREAM_TIMEOUT_SECS as i64)?
            .set_default("max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES as i64)?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.open_ai_api_url.trim().is_empty() {
            return Err(RelayError::Config("OPEN_AI_API_URL must not be empty".to_string()));
        }
        if self.open_ai_api_key.trim().is_empty() {
            return Err(RelayError::Config("OPEN_AI_API_KEY must not be empty".to_string()));
        }
        if self.upstream_timeout_secs == 0 {
            return Err(RelayError::Config(
                "UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Timeout applied to each upstream call.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Base URL with any trailing slash removed.
    pub fn api_base_url(&self) -> &str {
        self.open_ai_api_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let mut vars = Map::new();
        for (key, value) in pairs {
            vars.insert(key.to_string(), value.to_string());
        }
        Environment::default().try_parsing(true).source(Some(vars))
    }

    #[test]
    fn test_defaults_applied() {
        let config = RelayConfig::from_source(env(&[
            ("OPEN_AI_API_URL", "https://api.openai.com"),
            ("OPEN_AI_API_KEY", "sk-test"),
        ]))
        .unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.transcription_model, "whisper-1");
        assert_eq!(config.transcription_language, "en");
        assert_eq!(config.summary_model, "gpt-3.5-turbo");
        assert_eq!(config.summary_max_tokens, 150);
        assert!((config.summary_temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(120));
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_overrides() {
        let config = RelayConfig::from_source(env(&[
            ("PORT", "8080"),
            ("OPEN_AI_API_URL", "http://localhost:9000/"),
            ("OPEN_AI_API_KEY", "sk-test"),
            ("SUMMARY_MODEL", "gpt-4o-mini"),
            ("SUMMARY_MAX_TOKENS", "300"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.summary_model, "gpt-4o-mini");
        assert_eq!(config.summary_max_tokens, 300);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(5));
        assert_eq!(config.api_base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let result = RelayConfig::from_source(env(&[("OPEN_AI_API_URL", "https://api.openai.com")]));
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn test_empty_api_url_is_rejected() {
        let result = RelayConfig::from_source(env(&[
            ("OPEN_AI_API_URL", "  "),
            ("OPEN_AI_API_KEY", "sk-test"),
        ]));
        assert!(matches!(result, Err(RelayError::Config(_))));
    }
}
