//! Request signing strategies for SimpleAWS.
//!
//! AWS services of this era authenticate with one of three schemes:
//!
//! - [`QueryStringV2`]: Signature Version 2, HMAC-SHA256 over a canonical,
//!   sorted, percent-escaped parameter string, carried as query parameters
//!   (EC2, ELB, SQS, SNS, IAM, CloudWatch, STS)
//! - [`AuthorizationHeader`]: HMAC-SHA1 over method/content/date/amz-header
//!   lines, carried in the `Authorization` header (S3, CloudFront)
//! - [`HttpsV3`] and [`NativeV3`]: the two "AWS3" header schemes, HMAC-SHA256
//!   over the Date header (SES) or over a digested canonical request
//!   (DynamoDB)
//! - [`QueryStringV0`]: the legacy `Service`/`Operation`/`Timestamp`
//!   concatenation scheme still required by Mechanical Turk
//!
//! All strategies implement [`RequestSigner`]. Signing is idempotent-unsafe:
//! every [`RequestSigner::finish_and_sign`] call derives a fresh timestamp,
//! so signing the same request twice produces different, both-valid
//! signatures. Never re-sign a request that already carries a signature.

pub mod credentials;
pub mod header_auth;
pub mod signer;
pub mod sigv0;
pub mod sigv2;
pub mod sigv3;

pub use credentials::Credentials;
pub use header_auth::AuthorizationHeader;
pub use signer::RequestSigner;
pub use sigv0::QueryStringV0;
pub use sigv2::QueryStringV2;
pub use sigv3::{HttpsV3, NativeV3};
