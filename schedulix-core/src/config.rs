// Client configuration.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main configuration for the client core.
///
/// Every request made through the facade inherits `request_timeout`;
/// there is no per-call override and no retry policy.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientOptions {
    /// Origin of the REST backend, without a trailing slash
    /// (e.g. "https://api.schedulix.dev").
    pub base_url: String,
    /// API path prefix mounted under the origin.
    pub api_prefix: String,
    /// Wall-clock budget for a single round trip. A request that does not
    /// settle within this window is treated as failed.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Directory for the file-backed session store, if one is used.
    pub session_dir: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            api_prefix: "/api".to_string(),
            request_timeout: Duration::from_secs(10),
            session_dir: None,
        }
    }
}

impl ClientOptions {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset.
    ///
    /// - `SCHEDULIX_API_URL`: backend origin
    /// - `SCHEDULIX_API_TIMEOUT`: per-request timeout in seconds
    /// - `SCHEDULIX_SESSION_DIR`: file-backed session store directory
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("SCHEDULIX_API_URL").unwrap_or(defaults.base_url);
        let request_timeout = env::var("SCHEDULIX_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);
        let session_dir = env::var("SCHEDULIX_SESSION_DIR").ok();

        Self {
            base_url,
            api_prefix: defaults.api_prefix,
            request_timeout,
            session_dir,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base URL cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base URL must be a valid HTTP/HTTPS URL".to_string());
        }

        if self.base_url.ends_with('/') {
            return Err("base URL must not end with a slash".to_string());
        }

        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err("API prefix must start with a slash".to_string());
        }

        if self.request_timeout.as_secs() == 0 {
            return Err("request timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Absolute URL for an API path (e.g. `/patients`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, path)
    }

    /// Create a new ClientOptions builder.
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::new()
    }
}

/// Builder pattern for ClientOptions.
#[derive(Clone, Debug, Default)]
pub struct ClientOptionsBuilder {
    base_url: Option<String>,
    api_prefix: Option<String>,
    request_timeout: Option<Duration>,
    session_dir: Option<String>,
}

impl ClientOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(api_prefix.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn session_dir(mut self, dir: impl Into<String>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> ClientOptions {
        let defaults = ClientOptions::default();
        ClientOptions {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            api_prefix: self.api_prefix.unwrap_or(defaults.api_prefix),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            session_dir: self.session_dir,
        }
    }

    /// Build and validate the configuration.
    pub fn build_validated(self) -> Result<ClientOptions, String> {
        let options = self.build();
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_validate() {
        assert!(ClientOptions::default().validate().is_ok());
    }

    #[test]
    fn endpoint_joins_origin_prefix_and_path() {
        let options = ClientOptions::builder()
            .base_url("https://api.example.com")
            .build();
        assert_eq!(
            options.endpoint("/patients"),
            "https://api.example.com/api/patients"
        );
    }

    #[test]
    fn rejects_trailing_slash_and_zero_timeout() {
        let options = ClientOptions::builder()
            .base_url("https://api.example.com/")
            .build();
        assert!(options.validate().is_err());

        let options = ClientOptions::builder()
            .request_timeout(Duration::from_secs(0))
            .build();
        assert!(options.validate().is_err());
    }
}
