//! The I/O seam between request builders and the network.
//!
//! # Design
//! Clients never talk to the network directly. They hand an `HttpRequest` to
//! a `Transport` and get an `HttpResponse` back, whatever its status. Status
//! interpretation stays in `crate::response`, so a fake transport in tests
//! exercises exactly the same code path as the real one.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
pub trait Transport {
    /// Perform the request. Only network-level failures are errors; every
    /// status code, including 4xx/5xx, comes back as an `HttpResponse`.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by `ureq`.
///
/// ureq's status-code-as-error behavior is disabled so non-2xx responses
/// are returned as data and surfaced by the client as `ApiError::Remote`.
/// Response bodies are read without a size limit.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.full_url();
        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            params = request.query.len(),
            "sending request"
        );

        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // ureq otherwise stops at 10 MiB.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse { status, headers, body })
    }
}
