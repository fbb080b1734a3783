//! Amazon Simple Storage Service.
//!
//! S3 is REST-shaped: calls are made with the five HTTP methods against
//! resource paths, exactly as the S3 API reference writes them. "GET
//! Service" is `s3.get("/", CallOptions::new())`; operations on a bucket
//! pass the bucket through [`CallOptions::bucket`] and the bucket is joined
//! onto the path.
//!
//! Object data in a response stays raw; fetch it with
//! [`Response::raw_body`]. Streaming downloads are not provided; use HEAD
//! for `Content-Length` and ranged GETs if an object is too large to hold
//! in memory.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use simpleaws_auth::header_auth::{self, AuthorizationHeader};
use simpleaws_auth::{Credentials, RequestSigner};
use simpleaws_core::{
    Connection, Error, HttpMethod, Request, RequestBody, Response, Transport,
};

use crate::api::{HostStyle, ServiceConfig};
use crate::rest::CallOptions;

const CONFIG: ServiceConfig =
    ServiceConfig::regional("s3", "2006-03-01", None).with_host_style(HostStyle::Dash);

/// Client for the S3 REST API.
#[derive(Debug)]
pub struct S3 {
    connection: Connection,
    credentials: Credentials,
    host: String,
}

impl S3 {
    /// Connect to the default endpoint (`s3.amazonaws.com`).
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            connection: Connection::new(transport),
            credentials,
            host: CONFIG.default_host(),
        }
    }

    /// Connect to a specific region (`s3-{region}.amazonaws.com`).
    pub fn with_region(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
        region: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            connection: Connection::new(transport),
            credentials,
            host: CONFIG.host_for(region)?,
        })
    }

    /// Send a GET request.
    pub fn get(&self, path: &str, options: CallOptions) -> Result<Response, Error> {
        self.call(HttpMethod::Get, path, options)
    }

    /// Send a POST request.
    pub fn post(&self, path: &str, options: CallOptions) -> Result<Response, Error> {
        self.call(HttpMethod::Post, path, options)
    }

    /// Send a PUT request.
    pub fn put(&self, path: &str, options: CallOptions) -> Result<Response, Error> {
        self.call(HttpMethod::Put, path, options)
    }

    /// Send a DELETE request.
    pub fn delete(&self, path: &str, options: CallOptions) -> Result<Response, Error> {
        self.call(HttpMethod::Delete, path, options)
    }

    /// Send a HEAD request.
    pub fn head(&self, path: &str, options: CallOptions) -> Result<Response, Error> {
        self.call(HttpMethod::Head, path, options)
    }

    /// Execute a request against S3.
    pub fn call(
        &self,
        method: HttpMethod,
        path: &str,
        options: CallOptions,
    ) -> Result<Response, Error> {
        let mut request = self.build_request(method, path, options);
        AuthorizationHeader::new().finish_and_sign(&mut request, &self.credentials);
        self.connection.call(&request)
    }

    /// Build a request without sending it. Helpful for debugging.
    #[must_use]
    pub fn build_request(&self, method: HttpMethod, path: &str, options: CallOptions) -> Request {
        let path = match &options.bucket {
            Some(bucket) => format!("/{bucket}/{path}").replace("//", "/"),
            None => path.to_owned(),
        };
        let mut request = Request::new(method, &self.host, path);

        // response-* params alter the response and must be part of the
        // signed resource, so they move into the path's query string.
        let mut signed_query = Vec::new();
        for (key, value) in &options.params {
            if key.to_ascii_lowercase().starts_with("response-") {
                signed_query.push(format!("{key}={value}"));
            } else {
                request.params.insert(key, value);
            }
        }
        if !signed_query.is_empty() {
            request.set_path(format!("{}?{}", request.path(), signed_query.join("&")));
        }

        options.apply_headers(&mut request);

        if let Some(body) = options.body {
            if matches!(body, RequestBody::Bytes(_)) && request.header("Content-Type").is_none() {
                request.set_header("Content-Type", "application/octet-stream");
            }
            request.body = Some(body);
        }

        request
    }

    /// Build a URL for the resource at `path`.
    ///
    /// With `expires_at`, the URL is presigned: the expiry timestamp takes
    /// the Date slot of the string to sign and the URL carries `Signature`,
    /// `AWSAccessKeyId`, and `Expires`. Header and body options are ignored
    /// for URLs.
    #[must_use]
    pub fn url_for(
        &self,
        path: &str,
        options: CallOptions,
        expires_at: Option<DateTime<Utc>>,
    ) -> String {
        let request = self.build_request(HttpMethod::Get, path, options);

        let mut url = request.uri();
        let mut separator = if url.contains('?') { '&' } else { '?' };

        if !request.params.is_empty() {
            let query = request
                .params
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("&");
            url.push(separator);
            url.push_str(&query);
            separator = '&';
        }

        if let Some(expires_at) = expires_at {
            let expires = expires_at.timestamp();

            let mut signing = request.clone();
            signing.set_header("Date", expires.to_string());
            let signature = header_auth::compute_signature(
                self.credentials.secret_key(),
                &header_auth::string_to_sign(&signing),
            );

            url.push(separator);
            url.push_str(&format!(
                "Signature={signature}&AWSAccessKeyId={}&Expires={expires}",
                self.credentials.access_key()
            ));
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use chrono::TimeZone;

    fn s3(transport: Arc<MockTransport>) -> S3 {
        S3::new(Credentials::new("key", "secret"), transport)
    }

    #[test]
    fn test_should_join_bucket_onto_the_path() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport.clone());

        s3.get("/object/name.txt", CallOptions::new().bucket("mybucket"))
            .unwrap();

        assert_eq!(transport.last_request().path(), "/mybucket/object/name.txt");
    }

    #[test]
    fn test_should_fix_a_missing_leading_slash() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport.clone());

        s3.get("object/name.txt", CallOptions::new().bucket("mybucket"))
            .unwrap();

        assert_eq!(transport.last_request().path(), "/mybucket/object/name.txt");
    }

    #[test]
    fn test_should_fold_response_params_into_the_signed_path() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport.clone());

        s3.get(
            "/object.txt",
            CallOptions::new()
                .bucket("b")
                .param("response-content-disposition", "attachment")
                .param("versionId", "3"),
        )
        .unwrap();

        let request = transport.last_request();
        assert_eq!(
            request.path(),
            "/b/object.txt?response-content-disposition=attachment"
        );
        assert_eq!(request.params.get("versionId"), Some("3"));
        assert!(!request.params.contains_key("response-content-disposition"));
    }

    #[test]
    fn test_should_default_content_type_for_byte_bodies() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport.clone());

        s3.put(
            "/file.bin",
            CallOptions::new().bucket("b").body(vec![0u8, 1, 2]),
        )
        .unwrap();

        let request = transport.last_request();
        assert_eq!(request.header("Content-Type"), Some("application/octet-stream"));
    }

    #[test]
    fn test_should_keep_caller_content_type_for_byte_bodies() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport.clone());

        s3.put(
            "/image.png",
            CallOptions::new()
                .bucket("b")
                .header("Content-Type", "image/png")
                .body(vec![0u8]),
        )
        .unwrap();

        assert_eq!(transport.last_request().header("Content-Type"), Some("image/png"));
    }

    #[test]
    fn test_should_sign_requests_with_the_authorization_header() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport.clone());

        s3.get("/", CallOptions::new()).unwrap();

        let request = transport.last_request();
        assert!(request.header("Date").is_some());
        assert!(request.header("Authorization").unwrap().starts_with("AWS key:"));
    }

    #[test]
    fn test_should_build_plain_urls() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport);

        let url = s3.url_for("/object.txt", CallOptions::new().bucket("b"), None);
        assert_eq!(url, "https://s3.amazonaws.com/b/object.txt");
    }

    #[test]
    fn test_should_presign_urls_with_expiry() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = s3(transport);

        let expires_at = Utc.with_ymd_and_hms(2014, 6, 15, 12, 0, 0).unwrap();
        let url = s3.url_for("/object.txt", CallOptions::new().bucket("b"), Some(expires_at));

        assert!(url.starts_with("https://s3.amazonaws.com/b/object.txt?Signature="));
        assert!(url.contains("&AWSAccessKeyId=key"));
        assert!(url.ends_with(&format!("&Expires={}", expires_at.timestamp())));
    }

    #[test]
    fn test_should_use_dashed_regional_hosts() {
        let transport = MockTransport::ok("", "application/xml");
        let s3 = S3::with_region(Credentials::new("key", "secret"), transport.clone(), "eu-west-1")
            .unwrap();

        s3.get("/", CallOptions::new()).unwrap();

        assert_eq!(
            transport.last_request().host(),
            "https://s3-eu-west-1.amazonaws.com"
        );
    }
}
