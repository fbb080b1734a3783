//! Amazon Simple Email Service. SES has a single endpoint (`email`) and
//! signs with the AWS3-HTTPS header scheme instead of SigV2.

use std::sync::Arc;

use simpleaws_auth::{Credentials, HttpsV3};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::single_endpoint("email", "2010-12-01", Some("us-east-1"));

/// Client for the SES Query API.
#[derive(Debug)]
pub struct Ses {
    inner: ActionClient,
}

impl Ses {
    /// Connect to the SES endpoint.
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ActionClient::new(
                CONFIG.default_host(),
                Box::new(HttpsV3::new(CONFIG.version())),
                credentials,
                transport,
            ),
        }
    }

    /// Invoke an SES action, e.g. `send_email`.
    pub fn call(&self, action: &str, params: Params) -> Result<Response, Error> {
        self.inner.call(action, params)
    }
}
