use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use upsbridge_domain::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
};
use upsbridge_domain::UpsBridgeError;

use super::errors::RequestError;
use crate::errors::InfraError;

/// HTTP client with connection-level retries and classified failures.
///
/// Only failures to establish a connection are retried, immediately and up to
/// `max_retries` extra times. Error statuses and timeouts are returned as they
/// are. Every failure is logged once at `error` level with a `category` field.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_retries: usize,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, UpsBridgeError> {
        Self::builder().build()
    }

    /// Extra attempts made after a connection failure.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the request and return the successful response.
    ///
    /// 4xx and 5xx responses are turned into
    /// [`RequestErrorCategory::HttpStatus`](super::RequestErrorCategory)
    /// errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, RequestError> {
        self.execute(builder).await.map_err(log_failure)
    }

    /// Execute the request and decode a JSON response body.
    pub async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        let outcome = match self.execute(builder).await {
            Ok(response) => response.json::<T>().await.map_err(RequestError::from),
            Err(err) => Err(err),
        };

        outcome.map_err(log_failure)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, RequestError> {
        let attempts = self.max_retries.saturating_add(1);
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        for attempt in 1..=attempts {
            let attempt_request = request.try_clone().ok_or_else(|| {
                RequestError::unexpected(
                    "request body cannot be cloned; buffer the body to enable retries",
                )
            })?;

            debug!(attempt, %method, %url, "sending HTTP request");

            match self.client.execute(attempt_request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if status.is_client_error() || status.is_server_error() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(RequestError::from_status(status, &body));
                    }

                    return Ok(response);
                }
                Err(err) if err.is_connect() && attempt < attempts => {
                    debug!(attempt, %method, %url, error = %err, "connection failed, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(RequestError::unexpected("http client exhausted retries without producing a result"))
    }
}

fn log_failure(err: RequestError) -> RequestError {
    error!(
        category = err.category().as_str(),
        status = err.status(),
        error = %err.message(),
        "HTTP request failed"
    );
    err
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    connect_timeout: Duration,
    max_retries: usize,
    user_agent: Option<String>,
    default_headers: Option<HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: None,
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Configure the number of extra attempts after a connection failure.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, UpsBridgeError> {
        let mut builder = ReqwestClient::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            UpsBridgeError::from(infra)
        })?;

        Ok(HttpClient { client, max_retries: self.max_retries })
    }
}
