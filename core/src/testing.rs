//! In-memory transport for unit tests.

use std::cell::RefCell;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Records every request and answers with a fixed response.
pub(crate) struct RecordingTransport {
    status: u16,
    body: String,
    pub(crate) requests: RefCell<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn ok_json() -> Self {
        Self::new(200, r#"{"ok":true}"#)
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request recorded")
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        Ok(HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body: self.body.clone(),
        })
    }
}

/// Always fails at the network level.
pub(crate) struct UnreachableTransport;

impl Transport for UnreachableTransport {
    fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }
}
