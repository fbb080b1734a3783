//! AWS Security Token Service. STS has a single, regionless endpoint.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::single_endpoint("sts", "2011-06-15", None);

/// Client for the STS Query API.
#[derive(Debug)]
pub struct Sts {
    inner: ActionClient,
}

impl Sts {
    /// Connect to the STS endpoint.
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

    /// Invoke an STS action, e.g. `get_session_token`.
    pub fn call(&self, action: &str, params: Params) -> Result<Response, Error> {
        self.inner.call(action, params)
    }
}
