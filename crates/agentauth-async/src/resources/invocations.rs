use crate::{
    client::Client,
    config::Config,
    error::AgentAuthError,
    options::RequestOptions,
    types::invocations::{
        CreateInvocationRequest, CreateInvocationResponse, ExchangeRequest, ExchangeResponse,
        Invocation, SubmitRequest, SubmitResponse,
    },
};

/// API resource for the `/agents/auth/invocations` endpoints
///
/// Obtained via [`AuthAgents::invocations`](super::AuthAgents::invocations);
/// it inherits the parent resource's options.
pub struct Invocations<'c, C: Config> {
    client: &'c Client<C>,
    options: RequestOptions,
}

impl<'c, C: Config> Invocations<'c, C> {
    /// Creates a new Invocations resource
    #[must_use]
    pub fn new(client: &'c Client<C>) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    pub(crate) fn with_inherited(client: &'c Client<C>, options: RequestOptions) -> Self {
        Self { client, options }
    }

    /// Applies request options to this resource
    ///
    /// Later layers override scalar settings and append list-like ones.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = self.options.merged_with(&options);
        self
    }

    /// Starts an authentication invocation for an existing auth agent
    ///
    /// Returns a hosted URL for the user plus a one-time handoff code;
    /// exchange the code for a token scoped to the invocation. Not
    /// idempotent, so the request is never retried automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        req: CreateInvocationRequest,
    ) -> Result<CreateInvocationResponse, AgentAuthError> {
        self.client
            .post("/agents/auth/invocations", req, &self.options)
            .await
    }

    /// Retrieves invocation details: status, step, pending fields
    ///
    /// Accepts either the configured API key or an exchanged JWT supplied
    /// via [`RequestOptions::with_bearer`]. Poll this after
    /// [`submit`](Self::submit) to track progress.
    ///
    /// # Errors
    ///
    /// An empty `invocation_id` is rejected locally before any request is
    /// issued.
    pub async fn get(&self, invocation_id: &str) -> Result<Invocation, AgentAuthError> {
        super::require_param("invocation_id", invocation_id)?;
        self.client
            .get(
                &format!("/agents/auth/invocations/{invocation_id}"),
                &self.options,
            )
            .await
    }

    /// Exchanges a handoff code for a JWT bound to the invocation
    ///
    /// No configured credential is required: the handoff code itself is the
    /// credential, and the request carries no Authorization header. An
    /// unrecognized code surfaces as an API error without retry.
    ///
    /// # Errors
    ///
    /// An empty `invocation_id` is rejected locally before any request is
    /// issued.
    pub async fn exchange(
        &self,
        invocation_id: &str,
        req: ExchangeRequest,
    ) -> Result<ExchangeResponse, AgentAuthError> {
        super::require_param("invocation_id", invocation_id)?;
        let options = self
            .options
            .merged_with(&RequestOptions::new().unauthenticated());
        self.client
            .post(
                &format!("/agents/auth/invocations/{invocation_id}/exchange"),
                req,
                &options,
            )
            .await
    }

    /// Submits values for the discovered login form, or an SSO button
    /// selection
    ///
    /// Returns as soon as the submission is accepted; poll
    /// [`get`](Self::get) to track progress and results. Not idempotent, so
    /// the request is never retried automatically.
    ///
    /// # Errors
    ///
    /// An empty `invocation_id` is rejected locally before any request is
    /// issued.
    pub async fn submit(
        &self,
        invocation_id: &str,
        req: SubmitRequest,
    ) -> Result<SubmitResponse, AgentAuthError> {
        super::require_param("invocation_id", invocation_id)?;
        self.client
            .post(
                &format!("/agents/auth/invocations/{invocation_id}/submit"),
                req,
                &self.options,
            )
            .await
    }
}
