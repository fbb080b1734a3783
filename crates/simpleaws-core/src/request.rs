//! Request values sent through the transport.

use std::collections::BTreeMap;

use crate::params::Params;

/// HTTP methods understood by the AWS APIs this library targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
    /// HTTP HEAD.
    Head,
}

impl HttpMethod {
    /// The uppercase wire form of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request body: text (XML/JSON documents) or raw bytes (object uploads).
///
/// Streaming bodies are a transport capability and are deliberately not
/// modeled here; callers that need streaming wrap their own transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A UTF-8 text body.
    Text(String),
    /// A binary body.
    Bytes(Vec<u8>),
}

impl RequestBody {
    /// The body content as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Bytes(b) => b,
        }
    }

    /// The body content as text, if it is a text body.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bytes(_) => None,
        }
    }

    /// The body length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl From<String> for RequestBody {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RequestBody {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

/// A request to an AWS API, built up by the call types and finished by a
/// signer before being handed to the transport.
///
/// The `host` carries its scheme (`https://ec2.amazonaws.com`); `uri()` is
/// pure concatenation of host and path with no escaping; escaping is a
/// signer/transport concern.
#[derive(Debug, Clone)]
pub struct Request {
    method: HttpMethod,
    host: String,
    path: String,
    /// Query-protocol parameters, flattened on assignment.
    pub params: Params,
    /// Request headers. Names are stored as given by the caller.
    pub headers: BTreeMap<String, String>,
    /// Optional request body.
    pub body: Option<RequestBody>,
}

impl Request {
    /// Create a request. An empty path is normalized to `/`.
    pub fn new(method: HttpMethod, host: impl Into<String>, path: impl Into<String>) -> Self {
        let mut request = Self {
            method,
            host: host.into(),
            path: String::new(),
            params: Params::new(),
            headers: BTreeMap::new(),
            body: None,
        };
        request.set_path(path);
        request
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The host including scheme.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The request path, never empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the path, normalizing empty input to `/`.
    pub fn set_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.path = if path.is_empty() { "/".to_owned() } else { path };
    }

    /// The full URI: host and path concatenated, unescaped.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("{}{}", self.host, self.path)
    }

    /// The host with its scheme stripped, as used in canonical signing
    /// strings.
    #[must_use]
    pub fn plain_host(&self) -> &str {
        self.host
            .split_once("://")
            .map_or(self.host.as_str(), |(_, rest)| rest)
    }

    /// Set a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Look up a header by exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
