//! AWS Import/Export. The service has a single, regionless endpoint.

use std::sync::Arc;

use simpleaws_auth::{Credentials, QueryStringV2};
use simpleaws_core::{Error, Params, Response, Transport};

use crate::action::ActionClient;
use crate::api::ServiceConfig;

const CONFIG: ServiceConfig = ServiceConfig::single_endpoint("importexport", "2010-06-03", None);

/// Client for the Import/Export Query API.
#[derive(Debug)]
pub struct ImportExport {
    inner: ActionClient,
}

impl ImportExport {
    /// Connect to the Import/Export endpoint.
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

    /// Invoke an Import/Export action, e.g. `list_jobs`.
    pub fn call(&self, action: &str, params: Params) -> Result<Response, Error> {
        self.inner.call(action, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;

    #[test]
    fn test_should_target_the_single_import_export_endpoint() {
        let transport = MockTransport::ok("<R/>", "text/xml");
        let import_export = ImportExport::new(Credentials::new("key", "secret"), transport.clone());

        import_export.call("list_jobs", Params::new()).unwrap();

        let request = transport.last_request();
        assert_eq!(request.host(), "https://importexport.amazonaws.com");
        assert_eq!(request.params.get("Version"), Some("2010-06-03"));
    }
}
