//! Authorization-header signing with HMAC-SHA1, as used by S3 and CloudFront.
//!
//! ```text
//! Authorization: AWS <AccessKeyId>:<Signature>
//! ```
//!
//! Where `Signature = Base64(HMAC-SHA1(SecretKey, StringToSign))` and:
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                Content-MD5 + "\n" +
//!                Content-Type + "\n" +
//!                Date + "\n" +
//!                CanonicalizedAmzHeaders +
//!                Path
//! ```
//!
//! The `x-amz-*` header lines are lowercased and sorted. The path signed is
//! the request path as built by the caller, including any sub-resource query
//! suffix the caller folded into it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use simpleaws_core::Request;
use tracing::debug;

use crate::credentials::Credentials;
use crate::signer::{RequestSigner, sorted_amz_header_lines};

type HmacSha1 = Hmac<Sha1>;

/// The `Authorization: AWS key:signature` signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationHeader;

impl AuthorizationHeader {
    /// Create the signer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RequestSigner for AuthorizationHeader {
    fn sign_at(&self, request: &mut Request, credentials: &Credentials, now: DateTime<Utc>) {
        request.set_header("Date", http_date(now));

        let to_sign = string_to_sign(request);

        debug!(string_to_sign = ?to_sign, "built header-auth string to sign");

        let signature = compute_signature(credentials.secret_key(), &to_sign);
        request.set_header(
            "Authorization",
            format!("AWS {}:{signature}", credentials.access_key()),
        );
    }
}

/// Format an instant as an RFC-1123 HTTP-date (`Sun, 15 Jun 2014 12:00:00
/// GMT`).
#[must_use]
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Build the string to sign from the request's current headers and path.
///
/// Exposed so presigned-URL construction can sign an expiry value in the
/// Date slot.
#[must_use]
pub fn string_to_sign(request: &Request) -> String {
    let mut lines = vec![
        request.method().as_str().to_owned(),
        header_value(request, "content-md5"),
        header_value(request, "content-type"),
        header_value(request, "date"),
    ];
    lines.extend(sorted_amz_header_lines(request));
    lines.push(request.path().to_owned());
    lines.join("\n")
}

/// Base64(HMAC-SHA1(secret, string_to_sign)).
#[must_use]
pub fn compute_signature(secret_key: &str, string_to_sign: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret_key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(string_to_sign.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

fn header_value(request: &Request, name: &str) -> String {
    request
        .headers
        .iter()
        .find(|(header, _)| header.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use simpleaws_core::HttpMethod;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2014, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_should_format_http_date() {
        assert_eq!(http_date(fixed_time()), "Sun, 15 Jun 2014 12:00:00 GMT");
    }

    #[test]
    fn test_should_build_string_to_sign_with_content_headers() {
        let mut request = Request::new(HttpMethod::Put, "https://s3.amazonaws.com", "/bucket/key");
        request.set_header("Content-Type", "text/plain");
        request.set_header("Content-Md5", "md5value");
        request.set_header("Date", "Sun, 15 Jun 2014 12:00:00 GMT");

        assert_eq!(
            string_to_sign(&request),
            "PUT\nmd5value\ntext/plain\nSun, 15 Jun 2014 12:00:00 GMT\n/bucket/key"
        );
    }

    #[test]
    fn test_should_include_sorted_amz_headers() {
        let mut request = Request::new(HttpMethod::Put, "https://s3.amazonaws.com", "/bucket/key");
        request.set_header("Date", "d");
        request.set_header("X-Amz-Meta-Owner", "ops");
        request.set_header("x-amz-acl", "public-read");

        assert_eq!(
            string_to_sign(&request),
            "PUT\n\n\nd\nx-amz-acl:public-read\nx-amz-meta-owner:ops\n/bucket/key"
        );
    }

    #[test]
    fn test_should_set_date_and_authorization_headers() {
        let signer = AuthorizationHeader::new();
        let credentials = Credentials::new("key", "secret");
        let mut request = Request::new(HttpMethod::Get, "https://s3.amazonaws.com", "/bucket");

        signer.sign_at(&mut request, &credentials, fixed_time());

        assert_eq!(request.header("Date"), Some("Sun, 15 Jun 2014 12:00:00 GMT"));
        let authorization = request.header("Authorization").unwrap();
        assert!(authorization.starts_with("AWS key:"));
        // HMAC-SHA1 output is 20 bytes, so the base64 form is 28 chars.
        assert_eq!(authorization.len(), "AWS key:".len() + 28);
    }

    #[test]
    fn test_should_compute_deterministic_signatures() {
        let first = compute_signature("secret", "data");
        let second = compute_signature("secret", "data");
        assert_eq!(first, second);
        assert_ne!(first, compute_signature("other", "data"));
    }
}
