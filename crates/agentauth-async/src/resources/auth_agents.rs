use crate::{
    client::Client,
    config::Config,
    error::AgentAuthError,
    options::RequestOptions,
    pagination::{OffsetPage, OffsetPager},
    types::auth_agents::{AuthAgent, AuthAgentListParams, CreateAuthAgentRequest},
};

/// API resource for the `/agents/auth` endpoints
pub struct AuthAgents<'c, C: Config> {
    client: &'c Client<C>,
    options: RequestOptions,
}

impl<'c, C: Config> AuthAgents<'c, C> {
    /// Creates a new AuthAgents resource
    #[must_use]
    pub fn new(client: &'c Client<C>) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    /// Applies request options to this resource
    ///
    /// Options compose in order: the client configuration, then options set
    /// here, then any further `with_options` chained before a call. Later
    /// layers override scalar settings and append list-like ones.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = self.options.merged_with(&options);
        self
    }

    /// Returns the Invocations resource nested under auth agents,
    /// inheriting this resource's options
    #[must_use]
    pub fn invocations(self) -> super::invocations::Invocations<'c, C> {
        super::invocations::Invocations::with_inherited(self.client, self.options)
    }

    /// Creates a new auth agent for the domain and profile combination, or
    /// returns the existing one
    ///
    /// Idempotent by server contract: repeat calls with the same domain and
    /// profile return the same agent, so the request is retried like a GET.
    /// Does not start an invocation; use the invocations resource for that.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, req: CreateAuthAgentRequest) -> Result<AuthAgent, AgentAuthError> {
        self.client
            .post_idempotent("/agents/auth", req, &self.options)
            .await
    }

    /// Retrieves an auth agent by its ID
    ///
    /// # Errors
    ///
    /// An empty `id` is rejected locally before any request is issued.
    pub async fn get(&self, id: &str) -> Result<AuthAgent, AgentAuthError> {
        super::require_param("id", id)?;
        self.client
            .get(&format!("/agents/auth/{id}"), &self.options)
            .await
    }

    /// Lists auth agents, one page per call
    ///
    /// Filters are additive; `limit` and `offset` control the page window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        params: &AuthAgentListParams,
    ) -> Result<OffsetPage<AuthAgent>, AgentAuthError> {
        self.client
            .get_with_query("/agents/auth", params, &self.options)
            .await
    }

    /// Returns a lazy pager over every auth agent matching the filters
    ///
    /// No request is issued until the first item is pulled.
    #[must_use]
    pub fn list_auto_paging(
        &self,
        params: AuthAgentListParams,
    ) -> OffsetPager<'c, C, AuthAgentListParams, AuthAgent> {
        OffsetPager::new(self.client, "/agents/auth", params, self.options.clone())
    }

    /// Deletes an auth agent and terminates its workflow
    ///
    /// The server soft-deletes the record, gracefully terminates the
    /// agent's workflow, and cancels any in-progress invocations.
    ///
    /// # Errors
    ///
    /// An empty `id` is rejected locally before any request is issued.
    pub async fn delete(&self, id: &str) -> Result<(), AgentAuthError> {
        super::require_param("id", id)?;
        self.client
            .delete(&format!("/agents/auth/{id}"), &self.options)
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the AuthAgents API resource
    #[must_use]
    pub fn auth_agents(&self) -> AuthAgents<'_, C> {
        AuthAgents::new(self)
    }
}
