//! Player configuration
//!
//! The only setting is the webhook URL. It is read from
//! `CHARSHEET_WEBHOOK_URL` (or the shorter `WEBHOOK_URL`), after loading
//! `.env.local` and `.env` from the working directory when they exist.

use thiserror::Error;
use url::Url;

/// Webhook that stores submitted characters
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.effycentai.com/webhook/characters";

/// Preferred environment variable for the webhook URL
pub const WEBHOOK_URL_ENV: &str = "CHARSHEET_WEBHOOK_URL";

/// Fallback environment variable for the webhook URL
pub const WEBHOOK_URL_FALLBACK_ENV: &str = "WEBHOOK_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid webhook URL '{value}': {source}")]
    InvalidWebhookUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Webhook URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub webhook_url: Url,
}

impl PlayerConfig {
    /// Build a config for an explicit webhook URL.
    pub fn new(webhook_url: &str) -> Result<Self, ConfigError> {
        let trimmed = webhook_url.trim();
        let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidWebhookUrl {
            value: trimmed.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(Self { webhook_url: url })
    }

    /// Load `.env` files, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let webhook_url = lookup(WEBHOOK_URL_ENV)
            .or_else(|| lookup(WEBHOOK_URL_FALLBACK_ENV))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        Self::new(&webhook_url)
    }
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_the_effycent_webhook() {
        let config = PlayerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.webhook_url.as_str(), DEFAULT_WEBHOOK_URL);
        assert_eq!(config, PlayerConfig::new(DEFAULT_WEBHOOK_URL).unwrap());
    }

    #[test]
    fn preferred_variable_wins() {
        let config = PlayerConfig::from_lookup(lookup(&[
            (WEBHOOK_URL_ENV, "http://localhost:5678/webhook/characters"),
            (WEBHOOK_URL_FALLBACK_ENV, "http://other.invalid/hook"),
        ]))
        .unwrap();

        assert_eq!(
            config.webhook_url.as_str(),
            "http://localhost:5678/webhook/characters"
        );
    }

    #[test]
    fn fallback_variable_is_used() {
        let config = PlayerConfig::from_lookup(lookup(&[(
            WEBHOOK_URL_FALLBACK_ENV,
            " https://hooks.example.com/c ",
        )]))
        .unwrap();

        assert_eq!(config.webhook_url.as_str(), "https://hooks.example.com/c");
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let config = PlayerConfig::from_lookup(lookup(&[(WEBHOOK_URL_ENV, "   ")])).unwrap();
        assert_eq!(config.webhook_url.as_str(), DEFAULT_WEBHOOK_URL);
    }

    #[test]
    fn rejects_malformed_urls() {
        let result = PlayerConfig::new("not a url");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidWebhookUrl { .. })
        ));
    }

    #[test]
    fn rejects_non_http_schemes() {
        let result = PlayerConfig::new("ftp://example.com/hook");
        assert!(matches!(result, Err(ConfigError::UnsupportedScheme(s)) if s == "ftp"));
    }
}
