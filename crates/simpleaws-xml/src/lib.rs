//! Generic XML handling for SimpleAWS.
//!
//! AWS REST-style services (CloudFront in particular) take request bodies as
//! XML documents with a namespace on the root element, and every XML-speaking
//! service returns responses whose schema is not known ahead of time. This
//! crate provides both directions without any per-service schema:
//!
//! - [`build_xml`] turns a literal-matching [`serde_json::Value`] tree into an
//!   XML document (maps become elements, arrays repeat the enclosing element,
//!   scalars become text).
//! - [`parse_xml`] turns an arbitrary XML document into a
//!   [`serde_json::Value`] tree (repeated sibling elements become arrays,
//!   text-only elements become strings, empty elements become null).

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::parse_xml;
pub use error::XmlError;
pub use serialize::build_xml;
