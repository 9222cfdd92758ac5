//! Per-request configuration overrides.
//!
//! Options compose in layers: the client's [`Config`](crate::config::Config)
//! supplies the defaults, a resource carries service-level options set via
//! `with_options`, and a further `with_options` chained immediately before a
//! call adds call-level overrides. Later layers win for scalar settings
//! (base URL, timeout, retry cap, auth override) and accumulate for
//! list-like settings (extra headers and query parameters); an extra header
//! with the same name as an earlier one replaces it.

use secrecy::SecretString;
use std::time::Duration;

/// Replaces or removes the configured credential for a single request
#[derive(Debug, Clone)]
pub enum AuthOverride {
    /// Send no Authorization header and skip credential validation
    Unauthenticated,
    /// Replace the configured credential with this bearer token
    Bearer(SecretString),
}

/// Overrides applied to a single request on top of the client configuration
///
/// Values are plain data; header names and values are validated when the
/// request is built, before any network I/O.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) max_retries: Option<usize>,
    pub(crate) auth: Option<AuthOverride>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates an empty set of options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API base URL for this request
    #[must_use]
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    /// Bounds the round trip (including body read) for this request
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Caps the number of retries for this request
    ///
    /// Zero disables retries entirely; the first attempt still runs.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Replaces the configured credential with a bearer token for this
    /// request, e.g. a JWT obtained from the handoff-code exchange endpoint
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthOverride::Bearer(SecretString::from(token.into())));
        self
    }

    /// Sends this request without any Authorization header and without
    /// requiring a configured credential
    #[must_use]
    pub fn unauthenticated(mut self) -> Self {
        self.auth = Some(AuthOverride::Unauthenticated);
        self
    }

    /// Adds a header to this request; a later header with the same name
    /// replaces an earlier one
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query parameter to this request; query parameters accumulate
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Merges two option sets, with `later` taking precedence
    ///
    /// Scalar settings from `later` override those set here; headers and
    /// query parameters are concatenated in application order.
    #[must_use]
    pub fn merged_with(&self, later: &Self) -> Self {
        Self {
            base_url: later.base_url.clone().or_else(|| self.base_url.clone()),
            timeout: later.timeout.or(self.timeout),
            max_retries: later.max_retries.or(self.max_retries),
            auth: later.auth.clone().or_else(|| self.auth.clone()),
            headers: self.headers.iter().chain(&later.headers).cloned().collect(),
            query: self.query.iter().chain(&later.query).cloned().collect(),
        }
    }
}
