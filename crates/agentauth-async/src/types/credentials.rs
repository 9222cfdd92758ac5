//! Types for the `/credentials` endpoints

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::OffsetParams;

/// A stored credential for automatic re-authentication
///
/// Secret values never round-trip: read responses carry metadata only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Unique identifier for the credential
    pub id: String,
    /// When the credential was created
    pub created_at: DateTime<Utc>,
    /// Target domain this credential is for
    pub domain: String,
    /// Unique name for the credential within the organization
    pub name: String,
    /// When the credential was last updated
    pub updated_at: DateTime<Utc>,
    /// Whether a TOTP secret is configured for automatic 2FA
    #[serde(default)]
    pub has_totp_secret: bool,
    /// SSO provider to use with this credential (e.g. google, github)
    #[serde(default)]
    pub sso_provider: Option<String>,
    /// Current 6-digit TOTP code; present only in create/update responses
    /// when the secret was just set
    #[serde(default)]
    pub totp_code: Option<String>,
    /// When `totp_code` expires; present only alongside it
    #[serde(default)]
    pub totp_code_expires_at: Option<DateTime<Utc>>,
}

/// Request to create a new credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCredentialRequest {
    /// Target domain this credential is for
    pub domain: String,
    /// Unique name for the credential within the organization
    pub name: String,
    /// Field name to value mapping (e.g., username, password)
    pub values: HashMap<String, String>,
    /// SSO provider this credential should be used with; when the target
    /// site shows a matching SSO button, it is clicked before the values
    /// are filled on the identity provider's login page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_provider: Option<String>,
    /// Base32-encoded TOTP secret for automatic 2FA during login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totp_secret: Option<String>,
}

impl CreateCredentialRequest {
    /// Creates a request with the given domain, name, and values
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
        values: HashMap<String, String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            values,
            sso_provider: None,
            totp_secret: None,
        }
    }

    /// Sets the TOTP secret for automatic 2FA
    #[must_use]
    pub fn with_totp_secret(mut self, secret: impl Into<String>) -> Self {
        self.totp_secret = Some(secret.into());
        self
    }
}

/// Request to update an existing credential
///
/// `values` merges with the stored map: new keys are added, existing keys
/// overwritten, absent keys preserved. Merge semantics are documented per
/// field by the server; other fields replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCredentialRequest {
    /// New name for the credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// SSO provider to use; set to the empty string to remove
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_provider: Option<String>,
    /// Base32-encoded TOTP secret; set to the empty string to remove
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totp_secret: Option<String>,
    /// Field name to value mapping, merged with the stored values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<HashMap<String, String>>,
}

/// Query parameters for listing credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialListParams {
    /// Filter by domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Maximum number of results to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of results to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl OffsetParams for CredentialListParams {
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

/// Current TOTP code for a credential with a configured secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotpCodeResponse {
    /// Current 6-digit TOTP code
    pub code: String,
    /// When this code expires
    pub expires_at: DateTime<Utc>,
}
