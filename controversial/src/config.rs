//! Process-wide settings, loaded once at startup and never mutated afterwards.

use crate::error::Error;
use std::time::Duration;

pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything [`YouTubeClient`](crate::youtube_api::YouTubeClient) needs to talk to the API.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    /// Endpoint paths (`/channels`, `/videos`, ...) are appended to this.
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`], but with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// keep the key out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, Error::MissingApiKey);
    }

    #[test]
    fn blank_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert_eq!(err, Error::MissingApiKey);
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://127.0.0.1:8080/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn debug_output_hides_key() {
        let config = Config::new("very-secret").with_timeout(Duration::from_secs(5));
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("5s"));
    }
}
