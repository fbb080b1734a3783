//! Amazon DynamoDB.
//!
//! DynamoDB speaks JSON over POST: the operation travels in the
//! `x-amz-target` header and the request details in an
//! `application/x-amz-json-1.0` body. Every call must carry an STS session
//! token. [`DynamoDb::new`] fetches one with a single `GetSessionToken` hop
//! at construction; [`DynamoDb::with_session_token`] accepts one that was
//! obtained elsewhere.
//!
//! The token is fetched once and never refreshed. A long-lived client will
//! start failing when the token expires; construct a fresh client to renew.

use std::sync::Arc;

use simpleaws_auth::{Credentials, NativeV3, RequestSigner};
use simpleaws_core::{
    Connection, Error, HttpMethod, Params, Request, Response, Transport, util,
};
use tracing::debug;

use crate::api::ServiceConfig;
use crate::sts::Sts;

const CONFIG: ServiceConfig = ServiceConfig::regional("dynamodb", "2011-12-05", Some("us-east-1"));

/// Client for the DynamoDB JSON API.
#[derive(Debug)]
pub struct DynamoDb {
    connection: Connection,
    credentials: Credentials,
    host: String,
    session_token: String,
}

impl DynamoDb {
    /// Connect to the default region, fetching a session token from STS.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        Self::build(credentials, transport, CONFIG.default_host())
    }

    /// Connect to a specific region, fetching a session token from STS.
    pub fn with_region(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
        region: &str,
    ) -> Result<Self, Error> {
        let host = CONFIG.host_for(region)?;
        Self::build(credentials, transport, host)
    }

    /// Connect to the default region with a session token obtained
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty token.
    pub fn with_session_token(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
        session_token: impl Into<String>,
    ) -> Result<Self, Error> {
        let session_token = session_token.into();
        if session_token.is_empty() {
            return Err(Error::InvalidArgument(
                "session token cannot be empty".to_owned(),
            ));
        }

        Ok(Self {
            connection: Connection::new(transport),
            credentials,
            host: CONFIG.default_host(),
            session_token,
        })
    }

    fn build(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
        host: String,
    ) -> Result<Self, Error> {
        let session_token = fetch_session_token(&credentials, transport.clone())?;
        Ok(Self {
            connection: Connection::new(transport),
            credentials,
            host,
            session_token,
        })
    }

    /// Invoke a DynamoDB operation with a JSON request body.
    pub fn call(&self, action: &str, body: &serde_json::Value) -> Result<Response, Error> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| Error::InvalidArgument(format!("request body is not serializable: {e}")))?;
        self.call_raw(action, encoded)
    }

    /// Invoke a DynamoDB operation with a pre-encoded JSON body.
    pub fn call_raw(&self, action: &str, body: impl Into<String>) -> Result<Response, Error> {
        let mut request = Request::new(HttpMethod::Post, &self.host, "/");

        request.set_header("Content-Type", "application/x-amz-json-1.0");
        request.set_header(
            "x-amz-target",
            format!(
                "DynamoDB_{}.{}",
                CONFIG.version().replace('-', ""),
                util::upper_camelcase(action)
            ),
        );
        request.set_header("x-amz-security-token", self.session_token.clone());
        request.body = Some(body.into().into());

        NativeV3::new().finish_and_sign(&mut request, &self.credentials);
        self.connection.call(&request)
    }
}

/// One GetSessionToken hop against STS.
fn fetch_session_token(
    credentials: &Credentials,
    transport: Arc<dyn Transport>,
) -> Result<String, Error> {
    debug!("fetching STS session token");

    let sts = Sts::new(credentials.clone(), transport);
    let response = sts.call("get_session_token", Params::new())?;

    response
        .field("credentials")?
        .field("session_token")?
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| Error::InvalidArgument("STS returned no session token".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use serde_json::json;

    const STS_BODY: &str = "<GetSessionTokenResponse>\
        <GetSessionTokenResult><Credentials>\
          <SessionToken>session-token</SessionToken>\
        </Credentials></GetSessionTokenResult>\
      </GetSessionTokenResponse>";

    fn transport_with_sts() -> Arc<MockTransport> {
        MockTransport::sequence(vec![
            MockTransport::response(200, "text/xml", STS_BODY),
            MockTransport::response(200, "application/x-amz-json-1.0", r#"{"TableNames":[]}"#),
        ])
    }

    #[test]
    fn test_should_fetch_a_session_token_at_construction() {
        let transport = transport_with_sts();
        let dynamo =
            DynamoDb::new(Credentials::new("key", "secret"), transport.clone()).unwrap();

        let sts_request = transport.request(0);
        assert_eq!(sts_request.host(), "https://sts.amazonaws.com");
        assert_eq!(sts_request.params.get("Action"), Some("GetSessionToken"));

        dynamo.call("list_tables", &json!({})).unwrap();
        assert_eq!(
            transport.last_request().header("x-amz-security-token"),
            Some("session-token")
        );
    }

    #[test]
    fn test_should_shape_the_target_header() {
        let transport = transport_with_sts();
        let dynamo = DynamoDb::new(Credentials::new("key", "secret"), transport.clone()).unwrap();

        dynamo.call("list_tables", &json!({"Limit": 10})).unwrap();

        let request = transport.last_request();
        assert_eq!(
            request.header("x-amz-target"),
            Some("DynamoDB_20111205.ListTables")
        );
        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-amz-json-1.0")
        );
        assert_eq!(
            request.body.as_ref().unwrap().as_text(),
            Some(r#"{"Limit":10}"#)
        );
    }

    #[test]
    fn test_should_sign_with_the_aws3_native_header() {
        let transport = transport_with_sts();
        let dynamo = DynamoDb::new(Credentials::new("key", "secret"), transport.clone()).unwrap();

        dynamo.call("list_tables", &json!({})).unwrap();

        let request = transport.last_request();
        assert!(request.header("x-amz-date").is_some());
        assert!(
            request
                .header("x-amzn-authorization")
                .unwrap()
                .starts_with("AWS3 AWSAccessKeyId=key,Algorithm=HmacSHA256,Signature=")
        );
    }

    #[test]
    fn test_should_accept_an_explicit_session_token() {
        let transport = MockTransport::ok(r#"{"TableNames":[]}"#, "application/x-amz-json-1.0");
        let dynamo = DynamoDb::with_session_token(
            Credentials::new("key", "secret"),
            transport.clone(),
            "external-token",
        )
        .unwrap();

        dynamo.call("list_tables", &json!({})).unwrap();

        // No STS hop happened; the first request is the DynamoDB call.
        let request = transport.request(0);
        assert_eq!(request.host(), "https://dynamodb.us-east-1.amazonaws.com");
        assert_eq!(request.header("x-amz-security-token"), Some("external-token"));
    }

    #[test]
    fn test_should_reject_an_empty_session_token() {
        let transport = MockTransport::ok("", "application/x-amz-json-1.0");
        let result =
            DynamoDb::with_session_token(Credentials::new("key", "secret"), transport, "");

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
