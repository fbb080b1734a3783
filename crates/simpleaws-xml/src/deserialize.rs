//! Parsing arbitrary XML documents into generic value trees.
//!
//! AWS response schemas are open-ended, so instead of typed deserialization
//! this module produces a [`serde_json::Value`] tree that the response proxy
//! can traverse:
//!
//! - an element containing child elements becomes a map
//! - repeated sibling elements with the same name become an array
//! - an element containing only text becomes a string, with surrounding
//!   whitespace trimmed after the fragments are assembled
//! - an empty element becomes `null`
//!
//! Element attributes are dropped; AWS response payloads carry their data in
//! element text, and the namespace declaration on the root is of no interest
//! to callers.

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use serde_json::{Map, Value};

use crate::error::XmlError;

/// Parse an XML document into a value tree.
///
/// The returned value is always a single-key map: the root element's name
/// mapped to its parsed content, mirroring how the document nests.
///
/// # Errors
///
/// Returns [`XmlError`] if the document is malformed or has no root element.
pub fn parse_xml(xml: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_reader(xml.as_bytes());

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e);
                let value = parse_element(&mut reader)?;
                let mut root = Map::new();
                root.insert(name, value);
                return Ok(Value::Object(root));
            }
            Event::Empty(e) => {
                let mut root = Map::new();
                root.insert(element_name(&e), Value::Null);
                return Ok(Value::Object(root));
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_owned()));
            }
            // Skip declaration, comments, processing instructions.
            _ => {}
        }
    }
}

/// Parse the content of one element, positioned just after its start tag,
/// consuming through the matching end tag.
fn parse_element(reader: &mut Reader<&[u8]>) -> Result<Value, XmlError> {
    let mut text = String::new();
    let mut children = Map::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e);
                let value = parse_element(reader)?;
                insert_child(&mut children, name, value);
            }
            Event::Empty(e) => {
                insert_child(&mut children, element_name(&e), Value::Null);
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            // Entity references arrive as separate events between text
            // fragments; resolving them in place keeps the interior
            // spacing of the surrounding text.
            Event::GeneralRef(e) => {
                text.push(resolve_entity(&e)?);
            }
            Event::CData(e) => {
                text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::ParseError(
                    "unexpected EOF inside element".to_owned(),
                ));
            }
            _ => {}
        }
    }

    if children.is_empty() {
        let text = text.trim();
        if text.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(Value::String(text.to_owned()))
        }
    } else {
        Ok(Value::Object(children))
    }
}

/// Resolve a general entity reference: numeric character references and the
/// five predefined XML entities.
fn resolve_entity(e: &BytesRef<'_>) -> Result<char, XmlError> {
    if let Some(resolved) = e
        .resolve_char_ref()
        .map_err(|err| XmlError::ParseError(err.to_string()))?
    {
        return Ok(resolved);
    }

    let name = e
        .decode()
        .map_err(|err| XmlError::ParseError(err.to_string()))?;
    match name.as_ref() {
        "lt" => Ok('<'),
        "gt" => Ok('>'),
        "amp" => Ok('&'),
        "apos" => Ok('\''),
        "quot" => Ok('"'),
        other => Err(XmlError::ParseError(format!(
            "unresolvable entity reference: &{other};"
        ))),
    }
}

/// Insert a parsed child, merging repeated sibling names into an array.
fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(existing)) => existing.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

/// The element's local name, with any namespace prefix stripped.
fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}
