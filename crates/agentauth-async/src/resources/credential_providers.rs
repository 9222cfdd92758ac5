use crate::{
    client::Client,
    config::Config,
    error::AgentAuthError,
    options::RequestOptions,
    types::credential_providers::{
        CreateCredentialProviderRequest, CredentialProvider, ProviderTestResult,
        UpdateCredentialProviderRequest,
    },
};

/// API resource for the `/org/credential-providers` endpoints
pub struct CredentialProviders<'c, C: Config> {
    client: &'c Client<C>,
    options: RequestOptions,
}

impl<'c, C: Config> CredentialProviders<'c, C> {
    /// Creates a new CredentialProviders resource
    #[must_use]
    pub fn new(client: &'c Client<C>) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
        }
    }

    /// Applies request options to this resource
    ///
    /// Later layers override scalar settings and append list-like ones.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = self.options.merged_with(&options);
        self
    }

    /// Configures an external credential provider for automatic credential
    /// lookup
    ///
    /// Not idempotent, so the request is never retried automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        req: CreateCredentialProviderRequest,
    ) -> Result<CredentialProvider, AgentAuthError> {
        self.client
            .post("/org/credential-providers", req, &self.options)
            .await
    }

    /// Retrieves a credential provider by its ID
    ///
    /// # Errors
    ///
    /// An empty `id` is rejected locally before any request is issued.
    pub async fn get(&self, id: &str) -> Result<CredentialProvider, AgentAuthError> {
        super::require_param("id", id)?;
        self.client
            .get(&format!("/org/credential-providers/{id}"), &self.options)
            .await
    }

    /// Updates a credential provider's configuration
    ///
    /// # Errors
    ///
    /// An empty `id` is rejected locally before any request is issued.
    pub async fn update(
        &self,
        id: &str,
        req: UpdateCredentialProviderRequest,
    ) -> Result<CredentialProvider, AgentAuthError> {
        super::require_param("id", id)?;
        self.client
            .patch(
                &format!("/org/credential-providers/{id}"),
                req,
                &self.options,
            )
            .await
    }

    /// Lists the credential providers configured for the organization
    ///
    /// The endpoint is unpaginated and returns the full list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self) -> Result<Vec<CredentialProvider>, AgentAuthError> {
        self.client
            .get("/org/credential-providers", &self.options)
            .await
    }

    /// Deletes a credential provider by its ID
    ///
    /// # Errors
    ///
    /// An empty `id` is rejected locally before any request is issued.
    pub async fn delete(&self, id: &str) -> Result<(), AgentAuthError> {
        super::require_param("id", id)?;
        self.client
            .delete(&format!("/org/credential-providers/{id}"), &self.options)
            .await
    }

    /// Validates the provider's token and lists accessible vaults
    ///
    /// A read-only probe; treated as idempotent and retried like a GET.
    ///
    /// # Errors
    ///
    /// An empty `id` is rejected locally before any request is issued.
    pub async fn test(&self, id: &str) -> Result<ProviderTestResult, AgentAuthError> {
        super::require_param("id", id)?;
        self.client
            .post_empty_idempotent(
                &format!("/org/credential-providers/{id}/test"),
                &self.options,
            )
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the CredentialProviders API resource
    #[must_use]
    pub fn credential_providers(&self) -> CredentialProviders<'_, C> {
        CredentialProviders::new(self)
    }
}
