//! Types for the `/agents/auth` endpoints

use serde::{Deserialize, Serialize};

use crate::pagination::OffsetParams;

/// Current authentication status of the managed profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthAgentStatus {
    /// The profile holds a valid authenticated session
    Authenticated,
    /// The profile requires a (re-)authentication flow
    NeedsAuth,
}

/// An auth agent that manages authentication for a domain and profile pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAgent {
    /// Unique identifier for the auth agent
    pub id: String,
    /// Target domain for authentication
    pub domain: String,
    /// Name of the profile associated with this auth agent
    pub profile_name: String,
    /// Current authentication status of the managed profile
    pub status: AuthAgentStatus,
    /// Additional domains that are valid for this agent's authentication
    /// flow, for login pages that redirect across domains
    #[serde(default)]
    pub allowed_domains: Vec<String>,
    /// Whether automatic re-authentication is possible (linked credential,
    /// stored selectors, and login URL all present)
    #[serde(default)]
    pub can_reauth: bool,
    /// ID of the linked credential for automatic re-authentication
    #[serde(default)]
    pub credential_id: Option<String>,
    /// Name of the linked credential for automatic re-authentication
    #[serde(default)]
    pub credential_name: Option<String>,
    /// Whether this agent has stored selectors for deterministic
    /// re-authentication
    #[serde(default)]
    pub has_selectors: bool,
    /// When the last authentication check was performed
    #[serde(default)]
    pub last_auth_check_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Request to create or find an auth agent
///
/// Creation is idempotent server-side: repeat calls with the same domain
/// and profile return the existing agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuthAgentRequest {
    /// Domain for authentication
    pub domain: String,
    /// Name of the profile to use for this auth agent
    pub profile_name: String,
    /// Existing credential to link; its values auto-fill the login form on
    /// invocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_name: Option<String>,
    /// Login page URL, stored to skip discovery in future invocations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    /// Additional domains valid for this agent's authentication flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    /// Proxy configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
}

impl CreateAuthAgentRequest {
    /// Creates a request for the given domain and profile
    #[must_use]
    pub fn new(domain: impl Into<String>, profile_name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            profile_name: profile_name.into(),
            credential_name: None,
            login_url: None,
            allowed_domains: None,
            proxy: None,
        }
    }

    /// Links an existing credential to the new agent
    #[must_use]
    pub fn with_credential_name(mut self, name: impl Into<String>) -> Self {
        self.credential_name = Some(name.into());
        self
    }

    /// Sets the login page URL, skipping discovery in future invocations
    #[must_use]
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = Some(url.into());
        self
    }
}

/// Proxy configuration for an auth agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// ID of the proxy to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_id: Option<String>,
}

/// Query parameters for listing auth agents
///
/// Filters are additive: each provided filter narrows the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthAgentListParams {
    /// Filter by domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Filter by profile name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// Maximum number of results to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of results to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl OffsetParams for AuthAgentListParams {
    fn limit(&self) -> Option<u64> {
        self.limit
    }

    fn offset(&self) -> Option<u64> {
        self.offset
    }

    fn set_offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }
}
