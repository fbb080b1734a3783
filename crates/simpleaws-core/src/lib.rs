//! Core request/response machinery for SimpleAWS.
//!
//! This crate provides the pieces shared by every AWS service binding:
//!
//! - [`Request`] and [`Params`]: request values with the AWS Query-protocol
//!   parameter flattening (`Filter.1.Name`, `InstanceId.2`, …)
//! - [`Response`] and [`ResponseProxy`]: schema-agnostic traversal over
//!   parsed XML/JSON response trees, squashing AWS's `item`/`member`
//!   collection wrappers
//! - [`Connection`] and the [`Transport`] trait: the boundary to the
//!   caller-supplied HTTP client
//! - the [`Error`] taxonomy for AWS error payloads and local usage errors

pub mod body;
pub mod connection;
pub mod error;
pub mod params;
pub mod proxy;
pub mod request;
pub mod response;
pub mod util;

pub use body::BodyValue;
pub use connection::{Connection, RawResponse, Transport};
pub use error::Error;
pub use params::{ParamValue, Params};
pub use proxy::ResponseProxy;
pub use request::{HttpMethod, Request, RequestBody};
pub use response::Response;
