//! Amazon Simple Queue Service.
//!
//! Operations that act on a queue (SendMessage, ReceiveMessage, …) go to the
//! queue's own URL, not the service endpoint. Pass that URL to
//! [`Sqs::call_queue`]; queue URLs come from `ListQueues`/`GetQueueUrl` and
//! are never reconstructed locally.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::regional("sqs", "2012-11-05", Some("us-east-1"));

/// Client for the SQS Query API.
#[derive(Debug)]
pub struct Sqs {
    inner: ActionClient,
}

impl Sqs {
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

    /// Invoke a service-level action, e.g. `list_queues`.
    pub fn call(&self, action: &str, params: Params) -> Result<Response, Error> {
        self.inner.call(action, params)
    }

    /// Invoke an action against a queue URL, e.g. `send_message`.
    pub fn call_queue(
        &self,
        queue_url: &str,
        action: &str,
        params: Params,
    ) -> Result<Response, Error> {
        let (host, path) = split_queue_url(queue_url)?;
        self.inner.call_at(host, path, action, params)
    }
}

/// Split a queue URL into its host (scheme included) and path parts.
fn split_queue_url(queue_url: &str) -> Result<(&str, &str), Error> {
    let after_scheme = queue_url
        .split_once("://")
        .map(|(_, rest)| rest)
        .ok_or_else(|| Error::InvalidArgument(format!("not a queue URL: {queue_url:?}")))?;

    match after_scheme.find('/') {
        Some(slash) => {
            let host_len = queue_url.len() - after_scheme.len() + slash;
            Ok((&queue_url[..host_len], &queue_url[host_len..]))
        }
        None => Ok((queue_url, "/")),
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
