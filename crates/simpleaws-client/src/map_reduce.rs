//! Amazon Elastic MapReduce.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::regional("elasticmapreduce", "2009-03-31", None);

/// Client for the Elastic MapReduce Query API.
#[derive(Debug)]
pub struct MapReduce {
    inner: ActionClient,
}

impl MapReduce {
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

    /// Invoke an Elastic MapReduce action, e.g. `describe_job_flows`.
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
