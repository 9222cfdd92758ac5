//! Request and response types for the AgentAuth API
//!
//! Response structs tolerate unknown fields for forward compatibility;
//! request structs omit unset optional fields from the wire entirely.

/// Auth agent types
pub mod auth_agents;
/// Credential provider types
pub mod credential_providers;
/// Credential types
pub mod credentials;
/// Invocation types
pub mod invocations;
