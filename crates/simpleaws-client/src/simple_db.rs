//! Amazon SimpleDB.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::regional("sdb", "2009-04-15", None);

/// Client for the SimpleDB Query API.
#[derive(Debug)]
pub struct SimpleDb {
    inner: ActionClient,
}

impl SimpleDb {
    /// Connect to the default endpoint.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: bind(CONFIG.default_host(), credentials, transport),
        }
    }

    /// Connect to a specific region.
    pub fn with_region(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
        region: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            inner: bind(CONFIG.host_for(region)?, credentials, transport),
        })
    }

    /// Invoke a SimpleDB action, e.g. `list_domains`.
    pub fn call(&self, action: &str, params: Params) -> Result<Response, Error> {
        self.inner.call(action, params)
    }
}

fn bind(host: String, credentials: Credentials, transport: Arc<dyn Transport>) -> ActionClient {
    ActionClient::new(
        host,
        Box::new(QueryStringV2::new(CONFIG.version())),
        credentials,
        transport,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;

    #[test]
    fn test_should_target_the_simple_db_endpoint() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let simple_db = SimpleDb::new(Credentials::new("key", "secret"), transport.clone());

        simple_db.call("list_domains", Params::new()).unwrap();

        let request = transport.last_request();
        assert_eq!(request.host(), "https://sdb.amazonaws.com");
        assert_eq!(request.params.get("Version"), Some("2009-04-15"));
    }
}
