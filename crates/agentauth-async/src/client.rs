use backon::{ExponentialBuilder, Retryable};
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::Config,
    error::AgentAuthError,
    options::{AuthOverride, RequestOptions},
    retry,
};

/// A decoded response value together with the raw bytes it was parsed from
///
/// The raw payload is retained for diagnostics so callers can inspect
/// exactly what the server sent without re-running the request.
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    value: T,
    raw: Bytes,
}

impl<T: DeserializeOwned> Decoded<T> {
    pub(crate) fn from_bytes(raw: Bytes) -> Result<Self, AgentAuthError> {
        let value =
            serde_json::from_slice(&raw).map_err(|e| crate::error::map_deser(&e, &raw))?;
        Ok(Self { value, raw })
    }
}

impl<T> Decoded<T> {
    /// Returns the decoded value
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the raw response body
    #[must_use]
    pub const fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// Consumes the wrapper, returning the decoded value
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the wrapper, returning the decoded value and raw body
    #[must_use]
    pub fn into_parts(self) -> (T, Bytes) {
        (self.value, self.raw)
    }
}

/// AgentAuth API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and API configuration. It wraps a shared reqwest
/// connection pool, is cheap to clone, and is safe for concurrent use;
/// per-call [`RequestOptions`] never leak across concurrent calls.
///
/// Cancellation is cooperative: dropping a returned future aborts the
/// in-flight round trip and any pending retries. The client never rolls
/// back partial server-side effects.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
    backoff: ExponentialBuilder,
}

impl Client<crate::config::AgentAuthConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `AGENTAUTH_API_KEY` for the bearer credential
    /// - `AGENTAUTH_BASE_URL` for a custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::AgentAuthConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            config,
            backoff: retry::default_backoff_builder(),
        }
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// Useful for setting custom timeouts, proxies, or other HTTP
    /// configuration.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the backoff configuration for retry logic
    ///
    /// By default, the client uses exponential backoff with jitter.
    #[must_use]
    pub fn with_backoff(mut self, backoff: ExponentialBuilder) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    fn request_url(&self, path: &str, options: &RequestOptions) -> String {
        options.base_url.as_ref().map_or_else(
            || self.config.url(path),
            |base| {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    path.trim_start_matches('/')
                )
            },
        )
    }

    fn request_headers(&self, options: &RequestOptions) -> Result<HeaderMap, AgentAuthError> {
        let mut h = self.config.headers()?;

        match &options.auth {
            Some(AuthOverride::Unauthenticated) => {
                h.remove(AUTHORIZATION);
            }
            Some(AuthOverride::Bearer(token)) => {
                let v = format!("Bearer {}", token.expose_secret());
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&v).map_err(|_| {
                        AgentAuthError::Config("Invalid Authorization header".into())
                    })?,
                );
            }
            None => {}
        }

        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AgentAuthError::Config(format!("Invalid header name: {name}")))?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                AgentAuthError::Config(format!("Invalid value for header {name}"))
            })?;
            h.insert(header_name, header_value);
        }

        Ok(h)
    }

    fn validate_auth(&self, options: &RequestOptions) -> Result<(), AgentAuthError> {
        // An auth override either waives the credential or supplies its own
        if options.auth.is_some() {
            return Ok(());
        }
        self.config.validate_auth()
    }

    pub(crate) async fn get<O: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError> {
        let mk = || async {
            let headers = self.request_headers(options)?;
            let mut req = self
                .http
                .get(self.request_url(path, options))
                .headers(headers)
                .query(&self.config.query())
                .query(&options.query);
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
            Ok(req.build()?)
        };
        self.execute(mk, true, options).await
    }

    pub(crate) async fn get_with_query<Q, O>(
        &self,
        path: &str,
        query: &Q,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        Ok(self
            .get_with_query_decoded(path, query, options)
            .await?
            .into_value())
    }

    pub(crate) async fn get_with_query_decoded<Q, O>(
        &self,
        path: &str,
        query: &Q,
        options: &RequestOptions,
    ) -> Result<Decoded<O>, AgentAuthError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.request_headers(options)?;
            let mut req = self
                .http
                .get(self.request_url(path, options))
                .headers(headers)
                .query(&self.config.query())
                .query(&options.query)
                .query(query);
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
            Ok(req.build()?)
        };
        self.execute_decoded(mk, true, options).await
    }

    /// POST with a JSON body, never retried: the endpoint is not documented
    /// idempotent, so a resubmission could duplicate the server-side effect.
    pub(crate) async fn post<I, O>(
        &self,
        path: &str,
        body: I,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body, false, options)
            .await
    }

    /// POST with a JSON body for endpoints whose contract documents
    /// idempotency; retried like a GET.
    pub(crate) async fn post_idempotent<I, O>(
        &self,
        path: &str,
        body: I,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body, true, options).await
    }

    /// Body-less idempotent POST (read-only probes such as the provider
    /// connection test).
    pub(crate) async fn post_empty_idempotent<O: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError> {
        let mk = || async {
            let headers = self.request_headers(options)?;
            let mut req = self
                .http
                .post(self.request_url(path, options))
                .headers(headers)
                .query(&self.config.query())
                .query(&options.query);
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
            Ok(req.build()?)
        };
        self.execute(mk, true, options).await
    }

    pub(crate) async fn patch<I, O>(
        &self,
        path: &str,
        body: I,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        self.send_json(Method::PATCH, path, body, false, options)
            .await
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<(), AgentAuthError> {
        let mk = || async {
            let headers = self.request_headers(options)?;
            let mut req = self
                .http
                .delete(self.request_url(path, options))
                .headers(headers)
                .query(&self.config.query())
                .query(&options.query);
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
            Ok(req.build()?)
        };

        // Validate auth before any request
        self.validate_auth(options)?;
        self.execute_raw(mk, true, options).await?;
        Ok(())
    }

    async fn send_json<I, O>(
        &self,
        method: Method,
        path: &str,
        body: I,
        retryable: bool,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let mk = || async {
            let headers = self.request_headers(options)?;
            let mut req = self
                .http
                .request(method.clone(), self.request_url(path, options))
                .headers(headers)
                .query(&self.config.query())
                .query(&options.query)
                .json(&body);
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
            Ok(req.build()?)
        };
        self.execute(mk, retryable, options).await
    }

    async fn execute<O, M, Fut>(
        &self,
        mk: M,
        retryable: bool,
        options: &RequestOptions,
    ) -> Result<O, AgentAuthError>
    where
        O: DeserializeOwned,
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, AgentAuthError>> + Send,
    {
        Ok(self
            .execute_decoded(mk, retryable, options)
            .await?
            .into_value())
    }

    async fn execute_decoded<O, M, Fut>(
        &self,
        mk: M,
        retryable: bool,
        options: &RequestOptions,
    ) -> Result<Decoded<O>, AgentAuthError>
    where
        O: DeserializeOwned,
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, AgentAuthError>> + Send,
    {
        // Validate auth before any request
        self.validate_auth(options)?;

        let bytes = self.execute_raw(mk, retryable, options).await?;
        Decoded::from_bytes(bytes)
    }

    async fn execute_raw<M, Fut>(
        &self,
        mk: M,
        retryable: bool,
        options: &RequestOptions,
    ) -> Result<Bytes, AgentAuthError>
    where
        M: Fn() -> Fut + Send + Sync,
        Fut: core::future::Future<Output = Result<reqwest::Request, AgentAuthError>> + Send,
    {
        let http_client = self.http.clone();
        let backoff = options
            .max_retries
            .map_or(self.backoff, |n| self.backoff.with_max_times(n));

        (|| async {
            let request = mk().await?;
            tracing::debug!(method = %request.method(), url = %request.url(), "issuing request");
            let response = http_client
                .execute(request)
                .await
                .map_err(AgentAuthError::Reqwest)?;

            let status = response.status();
            let bytes = response.bytes().await.map_err(AgentAuthError::Reqwest)?;
            tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "received response");

            if status.is_success() {
                return Ok(bytes);
            }

            Err(crate::error::deserialize_api_error(status, &bytes))
        })
        .retry(backoff)
        .when(move |e: &AgentAuthError| retryable && e.is_retryable())
        .await
    }
}
