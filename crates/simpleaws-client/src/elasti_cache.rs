//! Amazon ElastiCache.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig =
    ServiceConfig::regional("elasticache", "2011-07-15", Some("us-east-1"));

/// Client for the ElastiCache Query API.
#[derive(Debug)]
pub struct ElastiCache {
    inner: ActionClient,
}

impl ElastiCache {
    /// Connect to the default (us-east-1) endpoint.
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

    /// Invoke an ElastiCache action, e.g. `describe_cache_clusters`.
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
