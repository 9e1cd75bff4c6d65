//! Shared HTTP transport and client builder.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// HTTP transport shared by every facade operation.
///
/// Performs exactly one round trip per call and decodes the response body
/// into the caller's target type. Cloning is cheap; clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct Transport {
    /// Inner shared state.
    inner: Arc<TransportInner>,
    /// Request timeout.
    timeout: Duration,
}

/// Inner transport state (shared across clones).
struct TransportInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Base URL, always ending in `/`.
    base_url: Url,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Transport {
    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Build a URL for an endpoint path.
    pub fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Perform one request and decode the response body.
    ///
    /// The HTTP status does not decide success: any body that decodes into
    /// `T` is returned, so `{"success": false, ...}` answers served with an
    /// error status still reach the caller as values.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(Error::Serialize)?;
        let url = self.url(path)?;

        tracing::debug!(
            %method,
            %url,
            timeout = ?self.timeout,
            "sending request"
        );

        let mut request = self
            .inner
            .http
            .request(method, url)
            .timeout(self.timeout);
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await.map_err(Error::Transport)?;
        let status = response.status();
        let text = response.text().await.map_err(Error::ReadBody)?;

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "response received");
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "service returned error status");
        }

        serde_json::from_str(&text).map_err(|source| {
            tracing::warn!(status = status.as_u16(), path, error = %source, "failed to decode response");
            Error::Decode {
                status: status.as_u16(),
                body: text,
                source,
            }
        })
    }
}

/// A client facade that can be assembled from a [`Transport`].
pub trait Service: Sized {
    /// Settings used when the builder is not told otherwise.
    fn defaults() -> ClientConfig;

    /// Wrap a ready transport.
    fn from_transport(transport: Transport) -> Self;
}

/// Builder for creating a client facade.
#[derive(Debug)]
pub struct ClientBuilder<C> {
    config: ClientConfig,
    user_agent: Option<String>,
    _client: PhantomData<fn() -> C>,
}

impl<C: Service> ClientBuilder<C> {
    /// Create a new builder with the facade's defaults.
    pub fn new() -> Self {
        Self::from_config(C::defaults())
    }

    /// Create a builder starting from explicit settings.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            user_agent: None,
            _client: PhantomData,
        }
    }

    /// Set the base URL for the service.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<C> {
        if self.config.base_url.trim().is_empty() {
            return Err(Error::Config("base_url is required".to_string()));
        }

        // Parse and normalize base URL
        let mut base_url = Url::parse(&self.config.base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("healthcrew-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(C::from_transport(Transport {
            inner: Arc::new(TransportInner { http, base_url }),
            timeout: self.config.timeout,
        }))
    }
}

impl<C: Service> Default for ClientBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
