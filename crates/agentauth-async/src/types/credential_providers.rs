//! Types for the `/org/credential-providers` endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of credential provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// 1Password service account integration
    Onepassword,
}

/// An external credential provider used as a fallback credential source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialProvider {
    /// Unique identifier for the credential provider
    pub id: String,
    /// When the credential provider was created
    pub created_at: DateTime<Utc>,
    /// Whether the provider is enabled for credential lookups
    pub enabled: bool,
    /// Priority order for lookups; lower numbers are checked first
    pub priority: i64,
    /// Type of credential provider
    pub provider_type: ProviderType,
    /// When the credential provider was last updated
    pub updated_at: DateTime<Utc>,
}

/// Request to configure an external credential provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCredentialProviderRequest {
    /// Service account token for the provider
    pub token: String,
    /// Type of credential provider
    pub provider_type: ProviderType,
    /// How long to cache credential lists (server default 300 seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_seconds: Option<i64>,
}

impl CreateCredentialProviderRequest {
    /// Creates a request for the given token and provider type
    #[must_use]
    pub fn new(token: impl Into<String>, provider_type: ProviderType) -> Self {
        Self {
            token: token.into(),
            provider_type,
            cache_ttl_seconds: None,
        }
    }
}

/// Request to update a credential provider's configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCredentialProviderRequest {
    /// New service account token, to rotate credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// How long to cache credential lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_seconds: Option<i64>,
    /// Whether the provider is enabled for credential lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Priority order for lookups; lower numbers are checked first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// A vault accessible to the provider's service account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderVault {
    /// Vault ID
    pub id: String,
    /// Vault name
    pub name: String,
}

/// Result of testing a credential provider connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTestResult {
    /// Whether the connection test was successful
    pub success: bool,
    /// Vaults accessible by the service account
    #[serde(default)]
    pub vaults: Vec<ProviderVault>,
    /// Error message if the test failed
    #[serde(default)]
    pub error: Option<String>,
}
