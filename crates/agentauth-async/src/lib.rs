#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! # `agentauth-async`
//!
//! Async typed client for the AgentAuth HTTP API: auth agents, invocations,
//! credentials, and credential providers. Every method is a single
//! request/response round trip; the login automation itself runs
//! server-side.
//!
//! ## Quick Start
//!
//! ```no_run
//! use agentauth_async::{Client, types::auth_agents::CreateAuthAgentRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new();
//!
//! let agent = client
//!     .auth_agents()
//!     .create(CreateAuthAgentRequest::new("example.com", "default"))
//!     .await?;
//!
//! println!("agent {} is {:?}", agent.id, agent.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! The bearer credential is read from `AGENTAUTH_API_KEY`; see
//! [`AgentAuthConfig`] for configuration options. The handoff-code exchange
//! endpoint requires no credential, and individual calls can carry an
//! exchanged token via [`RequestOptions::with_bearer`].
//!
//! ## Pagination
//!
//! List endpoints are offset-paginated. `list` returns one page;
//! `list_auto_paging` returns a lazy [`pagination::OffsetPager`] over
//! individual items that fetches subsequent pages on demand.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// Per-request option overrides
pub mod options;
/// Offset pagination support
pub mod pagination;
/// API resource implementations
pub mod resources;
/// Retry logic utilities
pub mod retry;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::{Client, Decoded};
pub use crate::config::AgentAuthConfig;
pub use crate::error::{AgentAuthError, ApiErrorObject};
pub use crate::options::{AuthOverride, RequestOptions};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::pagination::{OffsetPage, OffsetPager, OffsetParams};
    pub use crate::types::auth_agents::*;
    pub use crate::types::credential_providers::*;
    pub use crate::types::credentials::*;
    pub use crate::types::invocations::*;
    pub use crate::{AgentAuthConfig, Client, RequestOptions};
}
