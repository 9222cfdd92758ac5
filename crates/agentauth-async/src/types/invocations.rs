//! Types for the `/agents/auth/invocations` endpoints

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Invocation status as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationStatus {
    /// The flow is still running
    InProgress,
    /// The flow completed and the profile is authenticated
    Success,
    /// The flow timed out
    Expired,
    /// The flow was canceled, e.g. by deleting the owning agent
    Canceled,
    /// The flow failed; see `error_message`
    Failed,
}

/// Current step in the server-side invocation workflow
///
/// The client observes this state machine but never drives it; transition
/// legality is enforced server-side. Steps advance
/// `initialized → discovering → awaiting_input ⇄ submitting → completed`,
/// with `awaiting_external_action` between input and submission, and any
/// step may move to `expired` on timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationStep {
    /// The invocation was created but work has not begun
    Initialized,
    /// The login form is being discovered
    Discovering,
    /// Discovered fields are waiting for input; see `pending_fields`
    AwaitingInput,
    /// A user action outside the flow is required; see
    /// `external_action_message`
    AwaitingExternalAction,
    /// Submitted values are being entered and verified
    Submitting,
    /// The flow finished
    Completed,
    /// The flow timed out
    Expired,
}

/// The invocation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationType {
    /// First-time authentication
    Login,
    /// Legacy type; no longer created, kept for backward compatibility
    AutoLogin,
    /// Re-authentication for previously authenticated agents
    Reauth,
}

/// Type of a discovered form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input
    Text,
    /// Email address input
    Email,
    /// Password input
    Password,
    /// Telephone number input
    Tel,
    /// Numeric input
    Number,
    /// URL input
    Url,
    /// One-time code input
    Code,
    /// TOTP code input
    Totp,
}

/// A discovered login form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredField {
    /// Field label
    pub label: String,
    /// Field name
    pub name: String,
    /// CSS selector for the field
    pub selector: String,
    /// Field type
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Field placeholder
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Whether the field is required
    #[serde(default)]
    pub required: bool,
}

/// An SSO button for signing in with an external identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoButton {
    /// Visible button text
    pub label: String,
    /// Identity provider name
    pub provider: String,
    /// XPath selector for the button
    pub selector: String,
}

/// Details of one run of an auth agent's login flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invocation {
    /// Organization name at the time the invocation was created
    pub app_name: String,
    /// Domain for authentication
    pub domain: String,
    /// When the handoff code expires
    pub expires_at: DateTime<Utc>,
    /// Invocation status
    pub status: InvocationStatus,
    /// Current step in the invocation workflow
    pub step: InvocationStep,
    /// The invocation type
    #[serde(rename = "type")]
    pub kind: InvocationType,
    /// Why the invocation failed, present when status is `FAILED`
    #[serde(default)]
    pub error_message: Option<String>,
    /// Instructions for the user, present when step is
    /// `awaiting_external_action`
    #[serde(default)]
    pub external_action_message: Option<String>,
    /// Browser live view URL for debugging the invocation
    #[serde(default)]
    pub live_view_url: Option<String>,
    /// Fields currently awaiting input, present when step is
    /// `awaiting_input`
    #[serde(default)]
    pub pending_fields: Option<Vec<DiscoveredField>>,
    /// SSO buttons available on the page, present when step is
    /// `awaiting_input`
    #[serde(default)]
    pub pending_sso_buttons: Option<Vec<SsoButton>>,
    /// Names of fields already submitted, present from `submitting` onward
    #[serde(default)]
    pub submitted_fields: Option<Vec<String>>,
}

/// Request to start an invocation for an existing auth agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvocationRequest {
    /// ID of the auth agent to create an invocation for
    pub auth_agent_id: String,
    /// Saves the submitted credentials under this name on successful login
    /// and links them to the agent for automatic re-authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_credential_as: Option<String>,
}

impl CreateInvocationRequest {
    /// Creates a request for the given auth agent
    #[must_use]
    pub fn new(auth_agent_id: impl Into<String>) -> Self {
        Self {
            auth_agent_id: auth_agent_id.into(),
            save_credential_as: None,
        }
    }

    /// Saves submitted credentials under this name on success
    #[must_use]
    pub fn with_save_credential_as(mut self, name: impl Into<String>) -> Self {
        self.save_credential_as = Some(name.into());
        self
    }
}

/// Response from starting an invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvocationResponse {
    /// When the handoff code expires
    pub expires_at: DateTime<Utc>,
    /// One-time code for handoff
    pub handoff_code: String,
    /// URL to redirect the user to
    pub hosted_url: String,
    /// Unique identifier for the invocation
    pub invocation_id: String,
    /// The invocation type
    #[serde(rename = "type")]
    pub kind: InvocationType,
}

/// Request to exchange a handoff code for a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    /// Handoff code from the invocation create response
    pub code: String,
}

impl ExchangeRequest {
    /// Creates an exchange request for the given handoff code
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Response from the handoff-code exchange endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeResponse {
    /// Invocation the token is bound to
    pub invocation_id: String,
    /// JWT carrying the invocation claim (30 minute TTL)
    pub jwt: String,
}

/// Body for the submit endpoint
///
/// Exactly one variant is sent per call; the wire representation is the
/// bare object of the selected variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmitRequest {
    /// Submit values for the discovered login fields
    FieldValues {
        /// Values for the discovered login fields, keyed by field name
        field_values: HashMap<String, String>,
    },
    /// Click an SSO button instead of filling fields
    SsoButton {
        /// Selector of the SSO button to click
        sso_button: String,
    },
}

/// Response from the submit endpoint; returned as soon as the submission is
/// accepted, before the flow finishes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Whether the submission was accepted for processing
    pub accepted: bool,
}
