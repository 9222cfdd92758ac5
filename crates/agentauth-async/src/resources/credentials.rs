use crate::{
    client::Client,
    config::Config,
    error::AgentAuthError,
    options::RequestOptions,
    pagination::{OffsetPage, OffsetPager},
    types::credentials::{
        CreateCredentialRequest, Credential, CredentialListParams, TotpCodeResponse,
        UpdateCredentialRequest,
    },
};

/// API resource for the `/credentials` endpoints
pub struct Credentials<'c, C: Config> {
    client: &'c Client<C>,
    options: RequestOptions,
}

impl<'c, C: Config> Credentials<'c, C> {
    /// Creates a new Credentials resource
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

    /// Creates a new credential for storing login information
    ///
    /// Not idempotent, so the request is never retried automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, req: CreateCredentialRequest) -> Result<Credential, AgentAuthError> {
        self.client.post("/credentials", req, &self.options).await
    }

    /// Retrieves a credential by its ID or name
    ///
    /// Secret values are not returned.
    ///
    /// # Errors
    ///
    /// An empty `id_or_name` is rejected locally before any request is
    /// issued.
    pub async fn get(&self, id_or_name: &str) -> Result<Credential, AgentAuthError> {
        super::require_param("id_or_name", id_or_name)?;
        self.client
            .get(&format!("/credentials/{id_or_name}"), &self.options)
            .await
    }

    /// Updates a credential's name, values, or TOTP configuration
    ///
    /// Provided `values` are merged with the stored map: new keys added,
    /// existing keys overwritten, absent keys preserved.
    ///
    /// # Errors
    ///
    /// An empty `id_or_name` is rejected locally before any request is
    /// issued.
    pub async fn update(
        &self,
        id_or_name: &str,
        req: UpdateCredentialRequest,
    ) -> Result<Credential, AgentAuthError> {
        super::require_param("id_or_name", id_or_name)?;
        self.client
            .patch(&format!("/credentials/{id_or_name}"), req, &self.options)
            .await
    }

    /// Lists credentials owned by the caller's organization, one page per
    /// call
    ///
    /// Secret values are not returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        params: &CredentialListParams,
    ) -> Result<OffsetPage<Credential>, AgentAuthError> {
        self.client
            .get_with_query("/credentials", params, &self.options)
            .await
    }

    /// Returns a lazy pager over every credential matching the filters
    ///
    /// No request is issued until the first item is pulled.
    #[must_use]
    pub fn list_auto_paging(
        &self,
        params: CredentialListParams,
    ) -> OffsetPager<'c, C, CredentialListParams, Credential> {
        OffsetPager::new(self.client, "/credentials", params, self.options.clone())
    }

    /// Deletes a credential by its ID or name
    ///
    /// # Errors
    ///
    /// An empty `id_or_name` is rejected locally before any request is
    /// issued.
    pub async fn delete(&self, id_or_name: &str) -> Result<(), AgentAuthError> {
        super::require_param("id_or_name", id_or_name)?;
        self.client
            .delete(&format!("/credentials/{id_or_name}"), &self.options)
            .await
    }

    /// Returns the current 6-digit TOTP code for a credential with a
    /// configured secret
    ///
    /// Useful to complete 2FA setup on sites or when a fresh code is
    /// needed.
    ///
    /// # Errors
    ///
    /// An empty `id_or_name` is rejected locally before any request is
    /// issued.
    pub async fn totp_code(&self, id_or_name: &str) -> Result<TotpCodeResponse, AgentAuthError> {
        super::require_param("id_or_name", id_or_name)?;
        self.client
            .get(
                &format!("/credentials/{id_or_name}/totp-code"),
                &self.options,
            )
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Credentials API resource
    #[must_use]
    pub fn credentials(&self) -> Credentials<'_, C> {
        Credentials::new(self)
    }
}
