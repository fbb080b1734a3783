//! Building XML request bodies from literal-matching value trees.
//!
//! The conversion is intentionally simple and schema-free, meant for request
//! bodies like what CloudFront expects:
//!
//! - map keys become element names, in map order
//! - arrays repeat the enclosing element once per entry
//! - scalars become text content, booleans as lowercase `true`/`false`
//! - `null` becomes an empty element
//!
//! Element attributes are not supported; the only attribute ever written is
//! the optional `xmlns` namespace on the root element.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use serde_json::Value;

use crate::error::XmlError;

/// Build a complete XML document from a value tree.
///
/// Produces an XML declaration followed by a single `root` element carrying
/// the optional `xmlns` namespace, with `body` serialized inside it.
///
/// # Errors
///
/// Returns [`XmlError::InvalidBody`] if `body` is not a map, or an
/// I/O / quick-xml error if writing fails.
pub fn build_xml(root: &str, body: &Value, namespace: Option<&str>) -> Result<String, XmlError> {
    let Value::Object(map) = body else {
        return Err(XmlError::InvalidBody(
            "top-level XML body must be a map".to_owned(),
        ));
    };

    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let element = writer.create_element(root);
    let element = match namespace {
        Some(ns) => element.with_attribute(("xmlns", ns)),
        None => element,
    };
    element.write_inner_content(|w| {
        for (key, value) in map {
            write_entry(w, key, value)?;
        }
        Ok(())
    })?;

    String::from_utf8(buf).map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Write one `key -> value` pair as child element(s).
///
/// Arrays do not introduce a wrapper element; each entry is written as its
/// own `<key>` element.
fn write_entry<W: Write>(writer: &mut Writer<W>, key: &str, value: &Value) -> io::Result<()> {
    match value {
        Value::Object(map) => {
            writer.create_element(key).write_inner_content(|w| {
                for (inner_key, inner_value) in map {
                    write_entry(w, inner_key, inner_value)?;
                }
                Ok(())
            })?;
        }
        Value::Array(entries) => {
            for entry in entries {
                write_entry(writer, key, entry)?;
            }
        }
        Value::Null => {
            writer.create_element(key).write_empty()?;
        }
        Value::String(s) => {
            writer
                .create_element(key)
                .write_text_content(BytesText::new(s))?;
        }
        Value::Bool(b) => {
            writer
                .create_element(key)
                .write_text_content(BytesText::new(if *b { "true" } else { "false" }))?;
        }
        Value::Number(n) => {
            writer
                .create_element(key)
                .write_text_content(BytesText::new(&n.to_string()))?;
        }
    }
    Ok(())
}
