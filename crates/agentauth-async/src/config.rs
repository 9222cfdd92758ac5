use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default AgentAuth API base URL
pub const AGENTAUTH_DEFAULT_BASE: &str = "https://api.agentauth.dev";

/// Configuration for the AgentAuth client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct AgentAuthConfig {
    base_url: String,
    api_key: Option<SecretString>,
}

impl Default for AgentAuthConfig {
    fn default() -> Self {
        let api_key = std::env::var("AGENTAUTH_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        let base_url = std::env::var("AGENTAUTH_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| AGENTAUTH_DEFAULT_BASE.into());

        Self { base_url, api_key }
    }
}

impl AgentAuthConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `AGENTAUTH_API_KEY` for bearer authentication
    /// - `AGENTAUTH_BASE_URL` for a custom API base URL (defaults to
    ///   `https://api.agentauth.dev`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Sets the API key used as the bearer credential
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Configuration trait for the AgentAuth client
///
/// Implement this trait to provide custom authentication and API
/// configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::AgentAuthError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in requests
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::AgentAuthError>;
}

impl Config for AgentAuthConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::AgentAuthError> {
        use crate::error::AgentAuthError;

        let mut h = HeaderMap::new();

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                let v = format!("Bearer {key}");
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&v).map_err(|_| {
                        AgentAuthError::Config("Invalid Authorization header".into())
                    })?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn validate_auth(&self) -> Result<(), crate::error::AgentAuthError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::AgentAuthError::Config(
                "Missing AgentAuth credentials: set AGENTAUTH_API_KEY environment variable".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn config_reads_env_vars() {
        let _key = EnvGuard::set("AGENTAUTH_API_KEY", "test-key-123");
        let _base = EnvGuard::set("AGENTAUTH_BASE_URL", "https://custom.agentauth.dev");

        let cfg = AgentAuthConfig::new();
        assert_eq!(cfg.base_url(), "https://custom.agentauth.dev");

        let h = cfg.headers().unwrap();
        assert_eq!(
            h.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer test-key-123"
        );
    }

    #[test]
    #[serial(env)]
    fn config_defaults_base_url() {
        let _key = EnvGuard::set("AGENTAUTH_API_KEY", "k");
        let _base = EnvGuard::remove("AGENTAUTH_BASE_URL");

        let cfg = AgentAuthConfig::new();
        assert_eq!(cfg.base_url(), AGENTAUTH_DEFAULT_BASE);
    }

    #[test]
    #[serial(env)]
    fn validate_auth_missing_key() {
        let _key = EnvGuard::remove("AGENTAUTH_API_KEY");

        let cfg = AgentAuthConfig::new();
        assert!(cfg.validate_auth().is_err());
    }

    #[test]
    fn builder_methods() {
        let cfg = AgentAuthConfig::new()
            .with_base_url("https://test.agentauth.dev")
            .with_api_key("my-key");

        assert_eq!(cfg.base_url(), "https://test.agentauth.dev");
        assert!(cfg.validate_auth().is_ok());

        let h = cfg.headers().unwrap();
        assert_eq!(
            h.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer my-key"
        );
    }

    #[test]
    fn url_joins_without_double_slash() {
        let cfg = AgentAuthConfig::new().with_base_url("https://test.agentauth.dev/");
        assert_eq!(
            cfg.url("/agents/auth"),
            "https://test.agentauth.dev/agents/auth"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = AgentAuthConfig::new().with_api_key("super-secret-key-12345");
        let debug_str = format!("{cfg:?}");

        assert!(
            !debug_str.contains("super-secret-key-12345"),
            "Debug output should not contain the API key"
        );
        assert!(
            debug_str.contains("[REDACTED]"),
            "Debug output should contain '[REDACTED]', got: {debug_str}"
        );
    }

    #[test]
    fn validate_auth_rejects_empty_or_whitespace() {
        let cfg = AgentAuthConfig::new().with_api_key("");
        assert!(cfg.validate_auth().is_err());

        let cfg = AgentAuthConfig::new().with_api_key("   ");
        assert!(cfg.validate_auth().is_err());

        let cfg = AgentAuthConfig::new().with_api_key("  valid-key  ");
        assert!(cfg.validate_auth().is_ok());
    }

    #[test]
    #[serial(env)]
    fn config_trims_whitespace_padded_env_key() {
        let _key = EnvGuard::set("AGENTAUTH_API_KEY", "  trimmed-key  \n");
        let _base = EnvGuard::remove("AGENTAUTH_BASE_URL");

        let cfg = AgentAuthConfig::new();
        assert!(cfg.validate_auth().is_ok());

        let h = cfg.headers().unwrap();
        assert_eq!(
            h.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer trimmed-key"
        );
    }
}
