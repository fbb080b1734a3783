//! String helpers shared across the library.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The set of characters percent-encoded by [`uri_escape`].
///
/// Everything outside the RFC 3986 unreserved set
/// (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`) is encoded.
const AWS_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Convert a snake_case name to UpperCamelCase.
///
/// Input that already contains an uppercase character is returned unchanged,
/// so callers can pass either `describe_instances` or `DescribeInstances`.
#[must_use]
pub fn upper_camelcase(input: &str) -> String {
    if input.chars().any(|c| c.is_ascii_uppercase()) {
        return input.to_owned();
    }

    input.split('_').map(capitalize).collect()
}

/// Convert a snake_case name to lowerCamelCase.
///
/// Like [`upper_camelcase`], input already containing an uppercase character
/// passes through unchanged.
#[must_use]
pub fn lower_camelcase(input: &str) -> String {
    if input.chars().any(|c| c.is_ascii_uppercase()) {
        return input.to_owned();
    }

    let upper = upper_camelcase(input);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// AWS URI escaping for signing canonicalization.
///
/// A value that already contains a `%` is assumed pre-escaped and returned
/// unchanged so it is not escaped twice. A literal percent in a value will
/// therefore defeat escaping; no AWS parameter value legitimately carries
/// one.
#[must_use]
pub fn uri_escape(value: &str) -> String {
    if value.contains('%') {
        return value.to_owned();
    }

    utf8_percent_encode(value, AWS_ESCAPE_SET).to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
