//! The `?Action` query call type.
//!
//! Query-protocol services (EC2, ELB, SQS, SNS, IAM, CloudWatch, STS, SES)
//! all speak the same dialect: POST to `/` with an `Action` parameter plus
//! flattened call parameters, signed by whichever strategy the service
//! requires.

use std::sync::Arc;

use simpleaws_auth::{Credentials, RequestSigner};
use simpleaws_core::{Connection, Error, HttpMethod, Params, Request, Response, Transport, util};

/// A query-protocol caller bound to one host and one signing strategy.
pub struct ActionClient {
    connection: Connection,
    credentials: Credentials,
    signer: Box<dyn RequestSigner>,
    host: String,
}

impl ActionClient {
    /// Bind a host, signer, and credentials to a transport.
    pub fn new(
        host: impl Into<String>,
        signer: Box<dyn RequestSigner>,
        credentials: Credentials,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            connection: Connection::new(transport),
            credentials,
            signer,
            host: host.into(),
        }
    }

    /// The host requests are sent to.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Invoke `action` with the given parameters.
    ///
    /// The action name may be snake_case (`describe_instances`) or CamelCase
    /// (`DescribeInstances`).
    pub fn call(&self, action: &str, params: Params) -> Result<Response, Error> {
        self.call_at(&self.host, "/", action, params)
    }

    /// Invoke `action` against an explicit host and path. Used by SQS, where
    /// queue operations go to the queue's own URL.
    pub fn call_at(
        &self,
        host: &str,
        path: &str,
        action: &str,
        params: Params,
    ) -> Result<Response, Error> {
        let mut request = Request::new(HttpMethod::Post, host, path);
        request
            .params
            .insert("Action", util::upper_camelcase(action));
        request.params.merge(params);

        self.signer.finish_and_sign(&mut request, &self.credentials);
        self.connection.call(&request)
    }
}

impl std::fmt::Debug for ActionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionClient")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use simpleaws_auth::QueryStringV2;

    fn client(transport: Arc<MockTransport>) -> ActionClient {
        ActionClient::new(
            "https://example.amazonaws.com",
            Box::new(QueryStringV2::new("2011-01-01")),
            Credentials::new("key", "secret"),
            transport,
        )
    }

    #[test]
    fn test_should_post_action_to_root_path() {
        let transport = MockTransport::ok("<R><requestId>1</requestId></R>", "text/xml");
        let client = client(transport.clone());

        client.call("describe_things", Params::new()).unwrap();

        let request = transport.last_request();
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "/");
        assert_eq!(request.params.get("Action"), Some("DescribeThings"));
        assert!(request.params.get("Signature").is_some());
    }

    #[test]
    fn test_should_accept_camel_case_action_names() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let client = client(transport.clone());

        client.call("DescribeThings", Params::new()).unwrap();

        assert_eq!(
            transport.last_request().params.get("Action"),
            Some("DescribeThings")
        );
    }

    #[test]
    fn test_should_forward_call_parameters() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let client = client(transport.clone());

        let mut params = Params::new();
        params.set("InstanceId", vec!["i-1", "i-2"]);
        client.call("describe_instances", params).unwrap();

        let request = transport.last_request();
        assert_eq!(request.params.get("InstanceId.1"), Some("i-1"));
        assert_eq!(request.params.get("InstanceId.2"), Some("i-2"));
    }
}
