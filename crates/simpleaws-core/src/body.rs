//! Response body parsing and content sniffing.
//!
//! AWS responds with XML for the Query and REST services, JSON for DynamoDB
//! (`application/x-amz-json-1.0`), and raw data for object downloads. The
//! body format is chosen by content type, with a leading `<?xml` sniff as a
//! fallback; anything unrecognized passes through as a raw string.

use serde_json::Value;

/// A parsed response body: a navigable tree or a raw passthrough string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyValue {
    /// A parsed XML or JSON document.
    Tree(Value),
    /// An unparsed body (object data, HTML error pages, empty bodies).
    Raw(String),
}

impl BodyValue {
    /// The parsed tree, if this body was XML or JSON.
    #[must_use]
    pub fn tree(&self) -> Option<&Value> {
        match self {
            Self::Tree(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// The raw string, if this body was not parsed.
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(s) => Some(s),
            Self::Tree(_) => None,
        }
    }
}

/// Parse a raw body according to its content type, sniffing `<?xml` when the
/// content type is absent or unrecognized.
#[must_use]
pub fn parse_body(content_type: Option<&str>, body: &str) -> BodyValue {
    if body.is_empty() {
        return BodyValue::Raw(String::new());
    }

    let content_type = content_type.unwrap_or("");

    if content_type.contains("json") {
        return match serde_json::from_str(body) {
            Ok(value) => BodyValue::Tree(value),
            Err(_) => BodyValue::Raw(body.to_owned()),
        };
    }

    if content_type.contains("xml") || body.trim_start().starts_with("<?xml") {
        return match simpleaws_xml::parse_xml(body) {
            Ok(value) => BodyValue::Tree(value),
            Err(_) => BodyValue::Raw(body.to_owned()),
        };
    }

    BodyValue::Raw(body.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_should_parse_json_by_content_type() {
        let body = parse_body(Some("application/x-amz-json-1.0"), r#"{"TableNames":["users"]}"#);
        assert_eq!(body.tree(), Some(&json!({"TableNames": ["users"]})));
    }

    #[test]
    fn test_should_parse_xml_by_content_type() {
        let body = parse_body(Some("text/xml"), "<Root><Name>n</Name></Root>");
        assert_eq!(body.tree(), Some(&json!({"Root": {"Name": "n"}})));
    }

    #[test]
    fn test_should_sniff_xml_without_content_type() {
        let body = parse_body(
            None,
            "<?xml version=\"1.0\"?><Root><Name>n</Name></Root>",
        );
        assert_eq!(body.tree(), Some(&json!({"Root": {"Name": "n"}})));
    }

    #[test]
    fn test_should_pass_through_unrecognized_bodies() {
        let body = parse_body(Some("application/octet-stream"), "raw object data");
        assert_eq!(body.as_raw(), Some("raw object data"));
    }

    #[test]
    fn test_should_pass_through_empty_bodies() {
        let body = parse_body(Some("text/xml"), "");
        assert_eq!(body.as_raw(), Some(""));
    }
}
