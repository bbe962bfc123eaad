//! HTTP client for the review-analysis service and trust-score backend.

use crate::api::{AnalysisApi, ReviewsApi, TrustScoreApi};
use crate::config::{
    RateLimitConfig, Service, DEFAULT_ANALYSIS_URL, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use trustguard_core::{Result, ServiceHealth, TrustGuardError};
use tracing::{debug, warn};
use url::Url;

/// Client for both TrustGuard services
#[derive(Clone)]
pub struct TrustGuardClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    backend_url: Url,
    analysis_url: Url,
    timeout: Duration,
    rate_limiter: DefaultDirectRateLimiter,
}

impl std::fmt::Debug for TrustGuardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustGuardClient")
            .field("backend_url", &self.inner.backend_url.as_str())
            .field("analysis_url", &self.inner.analysis_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl TrustGuardClient {
    /// Create a client for the default local services
    pub fn new() -> Result<Self> {
        TrustGuardClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> TrustGuardClientBuilder {
        TrustGuardClientBuilder::new()
    }

    /// Access review-analysis endpoints
    #[must_use]
    pub fn analysis(&self) -> AnalysisApi<'_> {
        AnalysisApi::new(self)
    }

    /// Access trust-score endpoints
    #[must_use]
    pub fn trust_scores(&self) -> TrustScoreApi<'_> {
        TrustScoreApi::new(self)
    }

    /// Access review endpoints
    #[must_use]
    pub fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi::new(self)
    }

    /// Query `GET /health` on a service
    pub async fn health(&self, service: Service) -> Result<ServiceHealth> {
        self.get(service, &["health"]).await
    }

    /// Base URL of a service
    #[must_use]
    pub fn base_url(&self, service: Service) -> &Url {
        match service {
            Service::Backend => &self.inner.backend_url,
            Service::Analysis => &self.inner.analysis_url,
        }
    }

    /// Wait for a slot from the analysis rate limiter
    pub(crate) async fn throttle(&self) {
        self.inner.rate_limiter.until_ready().await;
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        service: Service,
        segments: &[&str],
    ) -> Result<T> {
        let url = self.build_url(service, segments)?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        service: Service,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(service, segments)?;
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Append path segments to a service's base URL, percent-encoding each
    fn build_url(&self, service: Service, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url(service).clone();
        url.path_segments_mut()
            .map_err(|()| TrustGuardError::InvalidUrl(format!("{service} URL cannot be a base")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn transport_error(&self, err: &reqwest::Error) -> TrustGuardError {
        if err.is_timeout() {
            TrustGuardError::Timeout(self.inner.timeout.as_secs())
        } else if err.is_connect() {
            TrustGuardError::Connection(err.to_string())
        } else {
            TrustGuardError::Http(err.to_string())
        }
    }

    /// Handle a response that returns JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| self.transport_error(&e))?;
            serde_json::from_str(&body).map_err(TrustGuardError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a [`TrustGuardError`]
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();

        // FastAPI reports failures as {"detail": ...}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("detail")
                    .or_else(|| v.get("error"))
                    .and_then(|e| e.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);

        match status {
            404 => Err(TrustGuardError::NotFound { resource: path }),
            _ => {
                warn!(status, message = %message, "service returned an error");
                Err(TrustGuardError::Api {
                    code: status,
                    message,
                })
            }
        }
    }
}

/// Builder for configuring a [`TrustGuardClient`]
#[derive(Debug, Clone)]
pub struct TrustGuardClientBuilder {
    backend_url: String,
    analysis_url: String,
    timeout: Duration,
    user_agent: String,
    rate_limit: RateLimitConfig,
}

impl Default for TrustGuardClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrustGuardClientBuilder {
    /// Create a builder pointing at the default local services
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            analysis_url: DEFAULT_ANALYSIS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("trustguard-rust/{}", env!("CARGO_PKG_VERSION")),
            rate_limit: RateLimitConfig::default(),
        }
    }

    /// Set the trust-score backend URL
    #[must_use]
    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Set the review-analysis service URL
    #[must_use]
    pub fn analysis_url(mut self, url: impl Into<String>) -> Self {
        self.analysis_url = url.into();
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the analysis rate limit
    #[must_use]
    pub const fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TrustGuardClient> {
        let backend_url = parse_base(&self.backend_url)?;
        let analysis_url = parse_base(&self.analysis_url)?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| TrustGuardError::Config(format!("failed to build HTTP client: {e}")))?;

        let quota = Quota::per_second(self.rate_limit.requests_per_second)
            .allow_burst(self.rate_limit.burst_size);

        Ok(TrustGuardClient {
            inner: Arc::new(ClientInner {
                http,
                backend_url,
                analysis_url,
                timeout: self.timeout,
                rate_limiter: RateLimiter::direct(quota),
            }),
        })
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| TrustGuardError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(TrustGuardError::InvalidUrl(format!("{raw}: not a base URL")));
    }
    Ok(url)
}
