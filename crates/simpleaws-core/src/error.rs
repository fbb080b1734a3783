//! Error taxonomy for SimpleAWS.
//!
//! Only two failure shapes coming back from AWS are classified:
//! [`Error::UnsuccessfulResponse`] for well-formed AWS error payloads and
//! [`Error::UnknownErrorResponse`] when a failing status carries a body no
//! known pattern matches. Everything else is a local usage or transport
//! error. Signing and encoding have no error paths of their own.

/// Errors surfaced by SimpleAWS request/response handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// AWS returned a well-formed error payload for a failing status.
    #[error("{error_type} ({code}): {message}")]
    UnsuccessfulResponse {
        /// HTTP status code of the failing response.
        code: u16,
        /// The AWS error code, e.g. `AuthFailure`.
        error_type: String,
        /// The human-readable error message from AWS.
        message: String,
    },

    /// AWS returned a failing status but the body matched no known error
    /// shape. The raw body is carried for diagnostics.
    #[error("unable to parse error code from {body:?}")]
    UnknownErrorResponse {
        /// The raw, unparsed response body.
        body: String,
    },

    /// A response field accessor missed: neither the lower-camel nor the
    /// upper-camel form of the requested name exists at this node.
    #[error("no such field: {0}")]
    NoSuchField(String),

    /// `keys()` was called on an array-backed proxy node.
    #[error("keys are only available on map-backed response nodes")]
    NotAnObject,

    /// A malformed construction call, e.g. a region passed to a
    /// single-endpoint service.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying HTTP transport failed before a response was produced.
    #[error("transport error: {0}")]
    Transport(#[source] anyhow::Error),
}
