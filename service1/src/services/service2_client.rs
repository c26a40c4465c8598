//! HTTP client for service2's greeting route.
//!
//! Uses reqwest's defaults: no request timeout, pooled connections.

use crate::config::Service2Settings;
use metrics::counter;
use reqwest::StatusCode;
use service_core::observability::TracedClientExt;
use thiserror::Error;

/// Any way the call to service2 can fail.
#[derive(Debug, Error)]
pub enum DownstreamError {
    #[error("service2 unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("service2 rejected the request with {0}")]
    ClientStatus(StatusCode),

    #[error("service2 failed with {0}")]
    ServerStatus(StatusCode),

    #[error("failed to read service2 response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl DownstreamError {
    fn outcome(&self) -> &'static str {
        match self {
            DownstreamError::Unreachable(_) => "unreachable",
            DownstreamError::ClientStatus(_) => "client_error",
            DownstreamError::ServerStatus(_) => "server_error",
            DownstreamError::Body(_) => "body_error",
        }
    }
}

pub struct Service2Client {
    http: reqwest::Client,
    hello_url: String,
}

impl Service2Client {
    pub fn new(settings: &Service2Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            hello_url: settings.hello_url.clone(),
        }
    }

    pub fn hello_url(&self) -> &str {
        &self.hello_url
    }

    /// GET service2's greeting and return its body.
    ///
    /// `request_id` is forwarded as `x-request-id`.
    pub async fn hello(&self, request_id: Option<&str>) -> Result<String, DownstreamError> {
        let result = self.fetch_hello(request_id).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        counter!("service2_calls_total", "outcome" => outcome).increment(1);

        result
    }

    async fn fetch_hello(&self, request_id: Option<&str>) -> Result<String, DownstreamError> {
        let response = self
            .http
            .traced_get(&self.hello_url)
            .send(request_id)
            .await
            .map_err(DownstreamError::Unreachable)?;

        let status = response.status();
        if status.is_client_error() {
            return Err(DownstreamError::ClientStatus(status));
        }
        if status.is_server_error() {
            return Err(DownstreamError::ServerStatus(status));
        }

        response.text().await.map_err(DownstreamError::Body)
    }
}
