// src/config.rs
use std::env;
use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "https://api.pacifices.cloud/v1/";
pub const API_KEY_VAR: &str = "PACIFICES_API_KEY";
pub const API_URL_VAR: &str = "PACIFICES_API_URL";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    // Always ends with a single '/'
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Reads the API key (required) and an optional base URL override from
    /// the environment. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let config = Self::new(api_key);
        Ok(match env::var(API_URL_VAR).ok().filter(|v| !v.trim().is_empty()) {
            Some(url) => config.with_base_url(url.trim()),
            None => config,
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn new_uses_default_url() {
        let config = Config::new("key");
        assert_eq!(config.base_url, "https://api.pacifices.cloud/v1/");
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn base_url_gets_single_trailing_slash() {
        assert_eq!(Config::new("k").with_base_url("http://localhost:1234").base_url, "http://localhost:1234/");
        assert_eq!(Config::new("k").with_base_url("http://localhost:1234/v1//").base_url, "http://localhost:1234/v1/");
    }

    fn clear_env() {
        env::remove_var(API_KEY_VAR);
        env::remove_var(API_URL_VAR);
    }

    #[test]
    #[serial]
    fn from_env_requires_api_key() {
        clear_env();
        assert!(matches!(Config::from_env(), Err(ClientError::MissingApiKey)));

        env::set_var(API_KEY_VAR, "   ");
        assert!(matches!(Config::from_env(), Err(ClientError::MissingApiKey)));
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_reads_key_and_default_url() {
        clear_env();
        env::set_var(API_KEY_VAR, "abc123");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, DEFAULT_API_URL);

        // blank override falls back to the default
        env::set_var(API_URL_VAR, "");
        assert_eq!(Config::from_env().unwrap().base_url, DEFAULT_API_URL);
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_normalizes_url_override() {
        clear_env();
        env::set_var(API_KEY_VAR, "abc123");
        env::set_var(API_URL_VAR, " http://localhost:8080/v1// ");
        assert_eq!(Config::from_env().unwrap().base_url, "http://localhost:8080/v1/");
        clear_env();
    }

    #[test]
    fn debug_hides_api_key() {
        let out = format!("{:?}", Config::new("super-secret"));
        assert!(!out.contains("super-secret"));
    }
}
