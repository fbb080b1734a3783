//! Auto Scaling.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::regional("autoscaling", "2011-01-01", None);

/// Client for the Auto Scaling Query API.
#[derive(Debug)]
pub struct AutoScaling {
    inner: ActionClient,
}

impl AutoScaling {
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

    /// Invoke an Auto Scaling action, e.g. `describe_auto_scaling_groups`.
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
