//! The signing strategy seam.

use chrono::{DateTime, Utc};
use simpleaws_core::Request;

use crate::credentials::Credentials;

/// A request signing strategy.
///
/// Implementations finish a request (auth parameters, date headers) and
/// attach its signature. The clock is injected through [`sign_at`] so tests
/// can sign deterministically; production callers use
/// [`finish_and_sign`], which stamps the current time.
///
/// [`sign_at`]: RequestSigner::sign_at
/// [`finish_and_sign`]: RequestSigner::finish_and_sign
pub trait RequestSigner: Send + Sync {
    /// Sign `request` as of the given instant.
    fn sign_at(&self, request: &mut Request, credentials: &Credentials, now: DateTime<Utc>);

    /// Sign `request` with a fresh timestamp.
    fn finish_and_sign(&self, request: &mut Request, credentials: &Credentials) {
        self.sign_at(request, credentials, Utc::now());
    }
}

/// Collect `x-amz-*` headers (case-insensitive) as lowercased `name:value`
/// lines, sorted by name.
pub(crate) fn sorted_amz_header_lines(request: &Request) -> Vec<String> {
    let mut lines: Vec<String> = request
        .headers
        .iter()
        .filter(|(name, _)| name.to_ascii_lowercase().starts_with("x-amz-"))
        .map(|(name, value)| format!("{}:{value}", name.to_ascii_lowercase()))
        .collect();
    lines.sort_unstable();
    lines
}
