//! API resource implementations for the AgentAuth client

/// Auth agent API resource
pub mod auth_agents;
/// Credential provider API resource
pub mod credential_providers;
/// Credential API resource
pub mod credentials;
/// Invocation API resource
pub mod invocations;

pub use auth_agents::AuthAgents;
pub use credential_providers::CredentialProviders;
pub use credentials::Credentials;
pub use invocations::Invocations;

use crate::error::AgentAuthError;

/// Rejects empty required path parameters before any request is built
pub(crate) fn require_param(name: &str, value: &str) -> Result<(), AgentAuthError> {
    if value.is_empty() {
        return Err(AgentAuthError::Validation(format!(
            "missing required {name} parameter"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_param_is_rejected() {
        let err = require_param("id", "").unwrap_err();
        match err {
            AgentAuthError::Validation(msg) => {
                assert_eq!(msg, "missing required id parameter");
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(require_param("id", "aa_1").is_ok());
    }
}
