//! Static endpoint configuration shared by the service clients.

use simpleaws_core::Error;

/// How a region is joined to the endpoint in the host name.
///
/// Most services use `{endpoint}.{region}.amazonaws.com`; S3 historically
/// uses `{endpoint}-{region}.amazonaws.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStyle {
    /// `sqs.us-west-2.amazonaws.com`
    Dot,
    /// `s3-eu-west-1.amazonaws.com`
    Dash,
}

/// Endpoint, API version, and region rules for one AWS service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    endpoint: &'static str,
    version: &'static str,
    use_https: bool,
    default_region: Option<&'static str>,
    single_endpoint: bool,
    host_style: HostStyle,
}

impl ServiceConfig {
    /// Describe a regional service with a default region.
    #[must_use]
    pub const fn regional(
        endpoint: &'static str,
        version: &'static str,
        default_region: Option<&'static str>,
    ) -> Self {
        Self {
            endpoint,
            version,
            use_https: true,
            default_region,
            single_endpoint: false,
            host_style: HostStyle::Dot,
        }
    }

    /// Describe a service with exactly one endpoint (IAM, STS, SES,
    /// CloudFront). Region overrides are rejected.
    #[must_use]
    pub const fn single_endpoint(
        endpoint: &'static str,
        version: &'static str,
        default_region: Option<&'static str>,
    ) -> Self {
        Self {
            endpoint,
            version,
            use_https: true,
            default_region,
            single_endpoint: true,
            host_style: HostStyle::Dot,
        }
    }

    /// Override the region host style.
    #[must_use]
    pub const fn with_host_style(mut self, host_style: HostStyle) -> Self {
        self.host_style = host_style;
        self
    }

    /// The API version string (e.g. `"2014-06-15"`).
    #[must_use]
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// The host for the default region (or the regionless host when no
    /// default exists).
    #[must_use]
    pub fn default_host(&self) -> String {
        self.format_host(self.default_region)
    }

    /// The host for an explicit region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for single-endpoint services.
    pub fn host_for(&self, region: &str) -> Result<String, Error> {
        if self.single_endpoint {
            return Err(Error::InvalidArgument(format!(
                "{} has a single endpoint, a region cannot be given",
                self.endpoint
            )));
        }
        Ok(self.format_host(Some(region)))
    }

    fn format_host(&self, region: Option<&str>) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        match region {
            Some(region) => {
                let separator = match self.host_style {
                    HostStyle::Dot => '.',
                    HostStyle::Dash => '-',
                };
                format!("{scheme}://{}{separator}{region}.amazonaws.com", self.endpoint)
            }
            None => format!("{scheme}://{}.amazonaws.com", self.endpoint),
        }
    }
}
