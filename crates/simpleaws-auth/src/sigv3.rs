//! The two "AWS3" header signing schemes.
//!
//! [`HttpsV3`] is the HTTPS-only variant used by SES: the signature covers
//! nothing but the `Date` header value, and rides in `X-Amzn-Authorization`
//! as `AWS3-HTTPS`. [`NativeV3`] is the variant used by DynamoDB: the
//! signature covers a multi-line canonical request which is SHA-256-digested
//! before the HMAC, and rides in `x-amzn-authorization` as `AWS3`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use sha2::{Digest, Sha256};
use simpleaws_core::Request;
use tracing::debug;

use crate::credentials::Credentials;
use crate::header_auth::http_date;
use crate::signer::{RequestSigner, sorted_amz_header_lines};

type HmacSha256 = Hmac<Sha256>;

/// The SES-style `AWS3-HTTPS` signer.
///
/// Relies on the transport layer's TLS for request integrity; only the Date
/// header value is signed.
#[derive(Debug, Clone)]
pub struct HttpsV3 {
    version: String,
}

impl HttpsV3 {
    /// Create a signer for the given API version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl RequestSigner for HttpsV3 {
    fn sign_at(&self, request: &mut Request, credentials: &Credentials, now: DateTime<Utc>) {
        request
            .params
            .insert("AWSAccessKeyId", credentials.access_key());
        request
            .params
            .insert("Timestamp", now.format("%Y-%m-%dT%H:%M:%SZ").to_string());
        request.params.insert("Version", self.version.clone());

        let date = http_date(now);
        request.set_header("Date", date.clone());

        let signature = hmac_sha256_b64(credentials.secret_key(), date.as_bytes());
        request.set_header(
            "X-Amzn-Authorization",
            format!(
                "AWS3-HTTPS AWSAccessKeyId={}, Algorithm=HmacSHA256, Signature={signature}",
                credentials.access_key()
            ),
        );
    }
}

/// The DynamoDB-style `AWS3` signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeV3;

impl NativeV3 {
    /// Create the signer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RequestSigner for NativeV3 {
    fn sign_at(&self, request: &mut Request, credentials: &Credentials, now: DateTime<Utc>) {
        // Callers usually stamp x-amz-date themselves; only fill the gap.
        if request.header("x-amz-date").is_none() {
            request.set_header("x-amz-date", now.to_rfc2822());
        }

        let to_sign = build_string_to_sign(request);

        debug!(string_to_sign = ?to_sign, "built AWS3 string to sign");

        let digested = Sha256::digest(to_sign.as_bytes());
        let signature = hmac_sha256_b64(credentials.secret_key(), &digested);
        request.set_header(
            "x-amzn-authorization",
            format!(
                "AWS3 AWSAccessKeyId={},Algorithm=HmacSHA256,Signature={signature}",
                credentials.access_key()
            ),
        );
    }
}

/// The AWS3 canonical request: method, path, empty query slot, host line,
/// sorted `x-amz-*` lines, a blank separator, then the body.
fn build_string_to_sign(request: &Request) -> String {
    let mut lines = vec![
        request.method().as_str().to_owned(),
        request.path().to_owned(),
        String::new(),
        format!("host:{}", request.plain_host()),
    ];
    lines.extend(sorted_amz_header_lines(request));
    lines.push(String::new());
    lines.push(
        request
            .body
            .as_ref()
            .and_then(|body| body.as_text())
            .unwrap_or_default()
            .to_owned(),
    );
    lines.join("\n")
}

fn hmac_sha256_b64(secret_key: &str, message: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(message);
    BASE64.encode(mac.finalize().into_bytes())
}
