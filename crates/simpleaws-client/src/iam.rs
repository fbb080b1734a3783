//! AWS Identity and Access Management. IAM has a single, regionless
//! endpoint.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::single_endpoint("iam", "2010-05-08", None);

/// Client for the IAM Query API.
#[derive(Debug)]
pub struct Iam {
    inner: ActionClient,
}

impl Iam {
    /// Connect to the IAM endpoint.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ActionClient::new(
                CONFIG.default_host(),
                Box::new(QueryStringV2::new(CONFIG.version())),
                credentials,
                transport,
            ),
        }
    }

    /// Invoke an IAM action, e.g. `list_users`.
    pub fn call(&self, action: &str, params: Params) -> Result<Response, Error> {
        self.inner.call(action, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;

    #[test]
    fn test_should_target_the_single_iam_endpoint() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let iam = Iam::new(Credentials::new("key", "secret"), transport.clone());

        iam.call("list_users", Params::new()).unwrap();

        let request = transport.last_request();
        assert_eq!(request.host(), "https://iam.amazonaws.com");
        assert_eq!(request.params.get("Version"), Some("2010-05-08"));
    }
}
