//! Options for the REST-style call types (S3, CloudFront).

use serde_json::Value;
use simpleaws_core::{ParamValue, Params, Request, RequestBody};

/// Per-call options for a REST request: bucket, query parameters, headers,
/// and a body (raw or built from a hash as XML).
#[derive(Debug, Default)]
pub struct CallOptions {
    pub(crate) bucket: Option<String>,
    pub(crate) params: Params,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) xml: Option<(String, Value)>,
}

impl CallOptions {
    /// Empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Address a resource inside a bucket (S3 only). The bucket is joined
    /// onto the request path.
    #[must_use]
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Add a query parameter. Structured values flatten as usual.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.set(&key.into(), value);
        self
    }

    /// Add a request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a raw request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the request body as XML from a tree, rooted at `root`
    /// (CloudFront only). Takes precedence over [`body`](Self::body).
    #[must_use]
    pub fn xml(mut self, root: impl Into<String>, content: Value) -> Self {
        self.xml = Some((root.into(), content));
        self
    }

    /// Apply the header options to a request.
    pub(crate) fn apply_headers(&self, request: &mut Request) {
        for (name, value) in &self.headers {
            request.set_header(name.clone(), value.clone());
        }
    }
}
