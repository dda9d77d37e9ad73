use crate::error::TransportError;
use std::fmt::Debug;
use std::io::Read;

/// A synchronous HTTP-like request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Sends requests and hands back the response body as a stream.
///
/// This is the contract consumed by protocol clients (e.g., SPARQL endpoints). It has no retry,
/// timeout, or streaming semantics of its own. Implementations own these concerns.
pub trait RequestTransport: Debug + Send + Sync {
    /// Sends `request` and blocks until the response body is available.
    fn send_request(
        &self,
        request: &TransportRequest,
    ) -> Result<Box<dyn Read + Send>, TransportError>;
}

/// The [RequestTransport] of environments that forbid synchronous network calls.
///
/// Every request fails with [TransportError::NotSupported].
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedTransport;

impl RequestTransport for UnsupportedTransport {
    fn send_request(
        &self,
        request: &TransportRequest,
    ) -> Result<Box<dyn Read + Send>, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "Rejected synchronous request");
        Err(TransportError::NotSupported)
    }
}
