//! Amazon CloudFront.
//!
//! CloudFront is REST-shaped like S3, with two twists: every path is
//! prefixed with the API version (handled here, so callers write
//! `/distribution` rather than `/2014-05-31/distribution`), and request
//! details travel as XML bodies. [`CallOptions::xml`] builds the body from
//! a tree with the CloudFront document namespace on the root element;
//! [`CallOptions::body`] passes a prebuilt XML string through untouched.

use std::sync::Arc;

use simpleaws_auth::header_auth::AuthorizationHeader;
use simpleaws_auth::{Credentials, RequestSigner};
use simpleaws_core::{Connection, Error, HttpMethod, Request, Response, Transport};
use simpleaws_xml::build_xml;

use crate::api::ServiceConfig;
use crate::rest::CallOptions;

const CONFIG: ServiceConfig = ServiceConfig::single_endpoint("cloudfront", "2014-05-31", None);

/// Client for the CloudFront REST API.
#[derive(Debug)]
pub struct CloudFront {
    connection: Connection,
    credentials: Credentials,
    host: String,
}

impl CloudFront {
    /// Connect to the CloudFront endpoint.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            connection: Connection::new(transport),
            credentials,
            host: CONFIG.default_host(),
        }
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

    /// Execute a request against CloudFront.
    pub fn call(
        &self,
        method: HttpMethod,
        path: &str,
        options: CallOptions,
    ) -> Result<Response, Error> {
        let mut request = Request::new(method, &self.host, format!("/{}{path}", CONFIG.version()));

        for (key, value) in &options.params {
            request.params.insert(key, value);
        }
        options.apply_headers(&mut request);

        if let Some((root, content)) = &options.xml {
            let namespace = format!("http://cloudfront.amazonaws.com/doc/{}", CONFIG.version());
            let body = build_xml(root, content, Some(&namespace))
                .map_err(|e| Error::InvalidArgument(format!("cannot build XML body: {e}")))?;
            request.body = Some(body.into());
            request.set_header("Content-Type", "text/xml");
        } else {
            request.body = options.body;
        }

        AuthorizationHeader::new().finish_and_sign(&mut request, &self.credentials);
        self.connection.call(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use serde_json::json;

    fn cloud_front(transport: Arc<MockTransport>) -> CloudFront {
        CloudFront::new(Credentials::new("key", "secret"), transport)
    }

    #[test]
    fn test_should_prefix_paths_with_the_api_version() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let client = cloud_front(transport.clone());

        client.get("/distribution", CallOptions::new()).unwrap();

        let request = transport.last_request();
        assert_eq!(request.host(), "https://cloudfront.amazonaws.com");
        assert_eq!(request.path(), "/2014-05-31/distribution");
    }

    #[test]
    fn test_should_build_xml_bodies_with_the_document_namespace() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let client = cloud_front(transport.clone());

        client
            .post(
                "/distribution",
                CallOptions::new().xml(
                    "DistributionConfig",
                    json!({"CallerReference": "ref-1", "Enabled": "true"}),
                ),
            )
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.header("Content-Type"), Some("text/xml"));

        let body = request.body.as_ref().unwrap().as_text().unwrap();
        assert!(body.contains(
            "<DistributionConfig xmlns=\"http://cloudfront.amazonaws.com/doc/2014-05-31\">"
        ));
        assert!(body.contains("<CallerReference>ref-1</CallerReference>"));
    }

    #[test]
    fn test_should_pass_raw_xml_bodies_through() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let client = cloud_front(transport.clone());

        client
            .post("/distribution", CallOptions::new().body("<Raw/>"))
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.body.as_ref().unwrap().as_text(), Some("<Raw/>"));
        assert_eq!(request.header("Content-Type"), None);
    }
}
