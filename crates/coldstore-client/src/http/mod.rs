//! Generic JSON primitives over the Coldstore REST API.
//!
//! Every call targets `{base_url}{endpoint}` (plus `/{id}` for item calls),
//! sends and expects JSON, and unwraps the response [`Envelope`].

use std::fmt::Display;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::retry::RetryPolicy;

/// Connection settings injected into [`ApiClient::new`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `"https://coldstoragehub.onrender.com/API"`.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Extra static headers attached to every request.
    pub headers: Vec<(String, String)>,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            headers: Vec::new(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(coldstore_core::config::DEFAULT_BASE_URL)
    }
}

impl From<&coldstore_core::Config> for ClientConfig {
    fn from(config: &coldstore_core::Config) -> Self {
        let mut headers: Vec<(String, String)> = config
            .api
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        headers.sort();
        Self {
            base_url: config.api.base_url.clone(),
            timeout: config.api.timeout_secs.map(Duration::from_secs),
            headers,
            retry: RetryPolicy::from(&config.retry),
        }
    }
}

/// Error bodies sometimes carry a human-readable reason.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Typed JSON client for the cold-storage API.
///
/// Cheap to clone: clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        if config.base_url.is_empty() {
            return Err(ClientError::Config("base_url is empty".into()));
        }
        Url::parse(&config.base_url).map_err(|e| {
            ClientError::Config(format!("invalid base_url {}: {e}", config.base_url))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::Config(format!("invalid header name: {name}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ClientError::Config(format!("invalid value for header {name}")))?;
            headers.insert(name, value);
        }

        // reqwest is built with rustls-no-provider; `Err` only means a
        // provider is already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            retry: config.retry.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/warehouses`.
    pub(crate) fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub(crate) fn item_url(&self, endpoint: &str, id: impl Display) -> String {
        format!("{}/{}", self.api_url(endpoint), id)
    }

    /// POST `body` to `endpoint`.
    pub async fn create<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let resp = self
            .execute(Method::POST, &self.api_url(endpoint), Some(&body))
            .await?;
        Self::decode(resp).await
    }

    /// GET `endpoint`. `T` is usually a `Vec` of the resource.
    pub async fn get_all<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        let resp = self
            .execute(Method::GET, &self.api_url(endpoint), None)
            .await?;
        Self::decode(resp).await
    }

    /// GET `endpoint` with URL-encoded query pairs. An empty slice sends no
    /// query string at all.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.query_url(endpoint, query)?;
        let resp = self.execute(Method::GET, &url, None).await?;
        Self::decode(resp).await
    }

    /// GET `{endpoint}/{id}`.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: impl Display,
    ) -> Result<T, ClientError> {
        let resp = self
            .execute(Method::GET, &self.item_url(endpoint, id), None)
            .await?;
        Self::decode(resp).await
    }

    /// PUT `body` to `{endpoint}/{id}`.
    pub async fn update<T, B>(
        &self,
        endpoint: &str,
        id: impl Display,
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let resp = self
            .execute(Method::PUT, &self.item_url(endpoint, id), Some(&body))
            .await?;
        Self::decode(resp).await
    }

    /// DELETE `{endpoint}/{id}`. The response body is never read.
    pub async fn remove(&self, endpoint: &str, id: impl Display) -> Result<(), ClientError> {
        self.execute(Method::DELETE, &self.item_url(endpoint, id), None)
            .await?;
        Ok(())
    }

    pub(crate) fn query_url(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<String, ClientError> {
        let mut url = Url::parse(&self.api_url(endpoint))
            .map_err(|e| ClientError::Config(format!("invalid endpoint {endpoint}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url.into())
    }

    /// Send one logical request, retrying per the policy. Only 2xx
    /// responses come back as `Ok`.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            debug!(%method, url, attempt = attempts, "sending request");
            let mut request = self.http.request(method.clone(), url);
            if let Some(body) = body {
                trace!(%body, "request body");
                request = request.json(body);
            }

            let result = match request.send().await {
                Ok(resp) => Self::check_status(resp).await,
                Err(e) => Err(ClientError::Http(e)),
            };

            match result {
                Ok(resp) => return Ok(resp),
                Err(err)
                    if self.retry.should_retry(attempts)
                        && self.retry.is_retryable(&method, &err) =>
                {
                    let delay = self.retry.delay_for_attempt(attempts - 1);
                    warn!(
                        error = %err,
                        %method,
                        url,
                        attempt = attempts,
                        delay_ms = delay.as_millis() as u64,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Turn a non-success status into `ClientError::Api`, preferring the
    /// server's own message when the body has one.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        debug!(status = status.as_u16(), "response received");
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").into());
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let envelope: Envelope<T> = resp.json().await?;
        debug!(success = envelope.success, "envelope decoded");
        envelope.into_data()
    }
}
