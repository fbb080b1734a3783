//! Amazon Mechanical Turk.
//!
//! Turk has no regions; instead it offers a sandbox endpoint for testing
//! against fake workers. Use [`MechanicalTurk::sandbox`] to target it.
//!
//! The API is Query-shaped but predates `Action`: the operation name
//! travels in an `Operation` parameter and requests are signed with the
//! legacy Signature Version 0 scheme.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV0, RequestSigner};
use simpleaws_core::{Connection, Error, HttpMethod, Params, Request, Response, Transport, util};

use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::regional("mechanicalturk", "2011-10-01", None);

const SERVICE: &str = "AWSMechanicalTurkRequester";

/// Client for the Mechanical Turk Requester API.
#[derive(Debug)]
pub struct MechanicalTurk {
    connection: Connection,
    credentials: Credentials,
    host: String,
}

impl MechanicalTurk {
    /// Connect to the production endpoint.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            connection: Connection::new(transport),
            credentials,
            host: CONFIG.default_host(),
        }
    }

    /// Connect to the sandbox endpoint
    /// (`mechanicalturk.sandbox.amazonaws.com`).
    pub fn sandbox(credentials: Credentials, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        Ok(Self {
            connection: Connection::new(transport),
            credentials,
            host: CONFIG.host_for("sandbox")?,
        })
    }

    /// Invoke a Turk operation, e.g. `search_hits`.
    pub fn call(&self, operation: &str, params: Params) -> Result<Response, Error> {
        let mut request = Request::new(HttpMethod::Post, &self.host, "/");
        request
            .params
            .insert("Operation", util::upper_camelcase(operation));
        request.params.merge(params);

        QueryStringV0::new(SERVICE, CONFIG.version())
            .finish_and_sign(&mut request, &self.credentials);
        self.connection.call(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;

    #[test]
    fn test_should_call_the_production_endpoint_with_operation() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let turk = MechanicalTurk::new(Credentials::new("key", "secret"), transport.clone());

        // Turk operation names are acronym-heavy, so the CamelCase
        // passthrough matters here.
        turk.call("SearchHITs", Params::new()).unwrap();

        let request = transport.last_request();
        assert_eq!(request.host(), "https://mechanicalturk.amazonaws.com");
        assert_eq!(request.params.get("Operation"), Some("SearchHITs"));
        assert_eq!(request.params.get("Service"), Some(SERVICE));
        assert_eq!(request.params.get("Version"), Some("2011-10-01"));
        assert!(request.params.get("Signature").is_some());
        assert!(!request.params.contains_key("Action"));
    }

    #[test]
    fn test_should_target_the_sandbox_host() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let turk = MechanicalTurk::sandbox(Credentials::new("key", "secret"), transport.clone())
            .unwrap();

        turk.call("SearchHITs", Params::new()).unwrap();

        assert_eq!(
            transport.last_request().host(),
            "https://mechanicalturk.sandbox.amazonaws.com"
        );
    }
}
