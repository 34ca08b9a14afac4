//! Core HTTP client with per-URL retry, availability probing, and
//! cache-busting.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use url::Position;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::Response;
use crate::retry::RetryLedger;

/// HTTP client for the SkinPro API with built-in retry and error handling.
///
/// Clones share the same connection pool and retry ledger, so backoff state
/// for a URL is visible to every clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    ledger: Arc<RetryLedger>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            ledger: Arc::new(RetryLedger::new()),
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, url)
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Patch, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Create a HEAD request builder.
    pub fn head(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Head, url)
    }

    /// Execute a request with automatic retry handling.
    ///
    /// Transient network failures are retried with exponential backoff,
    /// tracked per URL; the counter is dropped on any terminal outcome.
    /// Connection-level failures first probe the request's origin and give
    /// up immediately when the probe fails. Non-2xx responses are terminal
    /// and surface the status and body.
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        loop {
            let result = self.execute_once(&request).await;

            match result {
                Ok(response) => {
                    self.ledger.reset(&request.url);
                    return response.ensure_success().await;
                }
                Err(err) if err.is_transient() => {
                    let Some(retry) = self.config.retry.as_ref() else {
                        self.ledger.reset(&request.url);
                        return Err(err);
                    };

                    // A connect failure may mean the whole service is down;
                    // check before burning retries on it.
                    if matches!(err.kind, ErrorKind::Connection(_)) {
                        let origin = origin_of(&request.url)?;
                        if !self.origin_available(&origin).await {
                            warn!(%origin, "availability probe failed, not retrying");
                            self.ledger.reset(&request.url);
                            return Err(Error::with_source(
                                ErrorKind::ServiceUnavailable { origin },
                                err,
                            ));
                        }
                    }

                    let attempt = self.ledger.attempts(&request.url);
                    if attempt >= retry.max_retries {
                        self.ledger.reset(&request.url);
                        return Err(Error::with_source(
                            ErrorKind::RetriesExhausted {
                                url: request.url.clone(),
                                attempts: attempt,
                            },
                            err,
                        ));
                    }

                    let delay = retry
                        .backoff
                        .delay(attempt, retry.initial_delay, retry.max_delay);
                    self.ledger.record_failure(&request.url);
                    warn!(
                        attempt = attempt + 1,
                        max_retries = retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    self.ledger.reset(&request.url);
                    return Err(err);
                }
            }
        }
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.json().await
    }

    /// Execute a single request without retry logic.
    async fn execute_once(&self, request: &RequestBuilder) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if self.config.cache_bust {
            req = req.query(&[("_t", next_cache_stamp().to_string())]);
        }

        // JSON bodies get an explicit application/json content type;
        // multipart bodies leave it to reqwest so the boundary is correct.
        match &request.body {
            Some(RequestBody::Json(value)) => req = req.json(value),
            Some(RequestBody::Multipart(payload)) => req = req.multipart(payload.to_form()?),
            None => {}
        }

        if self.config.enable_tracing {
            debug!(method = ?request.method, url = %request.url, "sending request");
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            if response.status().is_success() {
                debug!(status, "response received");
            } else {
                info!(status, "non-success response");
            }
        }

        Ok(Response::new(response))
    }

    /// Lightweight existence check against an origin: a HEAD request with a
    /// short timeout. Any response at all counts as available.
    async fn origin_available(&self, origin: &str) -> bool {
        self.inner
            .head(origin)
            .timeout(self.config.probe_timeout)
            .send()
            .await
            .is_ok()
    }
}

/// Extract `scheme://host[:port]` from a URL.
fn origin_of(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::with_source(ErrorKind::InvalidUrl(raw.to_string()), e))?;
    Ok(parsed[..Position::BeforePath].to_string())
}

/// Cache-busting timestamp: milliseconds since the epoch, bumped so that
/// consecutive stamps are strictly increasing even within one millisecond.
fn next_cache_stamp() -> i64 {
    static LAST: AtomicI64 = AtomicI64::new(0);
    let now = Utc::now().timestamp_millis();
    let prev = LAST
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
            Some(now.max(prev + 1))
        })
        .unwrap_or(0);
    now.max(prev + 1)
}
