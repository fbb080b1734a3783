//! The transport seam and the connection that drives it.
//!
//! The library builds and signs requests but never performs I/O itself.
//! [`Transport`] is the single integration point for an HTTP client; the
//! bundled service clients only require that it exchanges a finished
//! [`Request`] for a [`RawResponse`].

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;

/// The raw result of one HTTP exchange, before parsing or error
/// classification.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers as received.
    pub headers: BTreeMap<String, String>,
    /// The response body as a string.
    pub body: String,
}

impl RawResponse {
    /// The `Content-Type` header, matched case-insensitively.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP client capable of sending a signed request.
///
/// Implementations handle the actual wire exchange: URL escaping of the
/// path, query-string encoding of `request.params` for GET requests (or
/// form encoding for POST), header transmission, and body upload.
pub trait Transport: Send + Sync {
    /// Send the request and return the raw exchange result. HTTP error
    /// statuses are returned as a `RawResponse`, not as `Err`; `Err` is
    /// reserved for transport-level failures (DNS, TLS, timeouts).
    fn send(&self, request: &Request) -> Result<RawResponse, anyhow::Error>;
}

/// A handle to a transport, shared by the service clients.
#[derive(Clone)]
pub struct Connection {
    transport: Arc<dyn Transport>,
}

impl Connection {
    /// Wrap a transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a finished request and wrap the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the exchange itself fails, or the
    /// classified AWS error when the service responds with a non-2xx status.
    pub fn call(&self, request: &Request) -> Result<Response, Error> {
        debug!(
            method = %request.method(),
            uri = %request.uri(),
            params = request.params.len(),
            "sending request"
        );

        let raw = self.transport.send(request).map_err(Error::Transport)?;

        debug!(status = raw.status, bytes = raw.body.len(), "received response");

        Response::from_raw(raw)
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;

    struct FixedTransport {
        raw: RawResponse,
    }

    impl Transport for FixedTransport {
        fn send(&self, _request: &Request) -> Result<RawResponse, anyhow::Error> {
            Ok(self.raw.clone())
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn send(&self, _request: &Request) -> Result<RawResponse, anyhow::Error> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_should_wrap_successful_exchanges() {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_owned(), "text/xml".to_owned());
        let connection = Connection::new(Arc::new(FixedTransport {
            raw: RawResponse {
                status: 200,
                headers,
                body: "<R><requestId>id-1</requestId></R>".to_owned(),
            },
        }));

        let request = Request::new(HttpMethod::Get, "https://ec2.amazonaws.com", "/");
        let response = connection.call(&request).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.request_id(), Some("id-1"));
    }

    #[test]
    fn test_should_map_transport_failures() {
        let connection = Connection::new(Arc::new(FailingTransport));
        let request = Request::new(HttpMethod::Get, "https://ec2.amazonaws.com", "/");

        let result = connection.call(&request);
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[test]
    fn test_should_match_content_type_case_insensitively() {
        let mut headers = BTreeMap::new();
        headers.insert("Content-TYPE".to_owned(), "application/json".to_owned());
        let raw = RawResponse {
            status: 200,
            headers,
            body: String::new(),
        };
        assert_eq!(raw.content_type(), Some("application/json"));
    }
}
