//! Amazon CloudWatch. The endpoint subdomain is `monitoring`, not
//! `cloudwatch`.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::regional("monitoring", "2010-08-01", Some("us-east-1"));

/// Client for the CloudWatch Query API.
#[derive(Debug)]
pub struct CloudWatch {
    inner: ActionClient,
}

impl CloudWatch {
    /// Connect to the default region.
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

    /// Invoke a CloudWatch action, e.g. `list_metrics`.
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
    fn test_should_use_the_monitoring_subdomain() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let cloud_watch = CloudWatch::new(Credentials::new("key", "secret"), transport.clone());

        cloud_watch.call("list_metrics", Params::new()).unwrap();

        assert_eq!(
            transport.last_request().host(),
            "https://monitoring.us-east-1.amazonaws.com"
        );
    }
}
