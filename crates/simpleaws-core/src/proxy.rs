//! Recursive, case-insensitive traversal over parsed response trees.
//!
//! AWS wraps every XML collection in an `<item>` or `<member>` element, and
//! the XML-to-tree parser returns a lone child as a bare map rather than a
//! one-element array. [`ResponseProxy`] hides both quirks: a map whose only
//! key is `item` or `member` is transparently replaced by an array of child
//! proxies, with a lone child normalized to a length-1 array.
//!
//! Field access is logical rather than literal: [`ResponseProxy::field`]
//! takes a snake_case name and tries both the lowerCamel and UpperCamel
//! forms against the map's actual keys, so `field("domain_name")` finds
//! either `domainName` or `DomainName`.

use serde_json::{Map, Value};

use crate::error::Error;
use crate::util;

/// The collection-wrapper element names AWS uses, squashed on sight.
const TO_SQUASH: [&str; 2] = ["item", "member"];

/// A read-only wrapper around one node of a parsed response tree.
#[derive(Debug, Clone)]
pub struct ResponseProxy<'a> {
    raw: &'a Value,
    node: ProxyNode<'a>,
}

#[derive(Debug, Clone)]
enum ProxyNode<'a> {
    Map(&'a Map<String, Value>),
    List(Vec<ResponseProxy<'a>>),
    Scalar,
}

impl<'a> ResponseProxy<'a> {
    /// Wrap a tree node, squashing `item`/`member` collection wrappers.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        let node = match value {
            Value::Object(map) => match squash_key(map) {
                Some(child) => ProxyNode::List(flatten(child)),
                None => ProxyNode::Map(map),
            },
            Value::Array(items) => ProxyNode::List(items.iter().map(Self::new).collect()),
            _ => ProxyNode::Scalar,
        };

        Self { raw: value, node }
    }

    /// Tolerant literal key lookup. Returns `None` on a miss or when this
    /// node is not map-backed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ResponseProxy<'a>> {
        match &self.node {
            ProxyNode::Map(map) => map.get(key).map(Self::new),
            _ => None,
        }
    }

    /// Case-insensitive logical field access: tries the lowerCamel then the
    /// UpperCamel form of `name` as literal keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchField`] if neither form is present, or if this
    /// node is not map-backed.
    pub fn field(&self, name: &str) -> Result<ResponseProxy<'a>, Error> {
        let ProxyNode::Map(map) = &self.node else {
            return Err(Error::NoSuchField(name.to_owned()));
        };

        let lower = util::lower_camelcase(name);
        let upper = util::upper_camelcase(name);

        map.get(&lower)
            .or_else(|| map.get(&upper))
            .map(Self::new)
            .ok_or_else(|| Error::NoSuchField(name.to_owned()))
    }

    /// All keys at this node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] when the backing store is an array or
    /// a scalar.
    pub fn keys(&self) -> Result<Vec<&'a str>, Error> {
        match &self.node {
            ProxyNode::Map(map) => Ok(map.keys().map(String::as_str).collect()),
            _ => Err(Error::NotAnObject),
        }
    }

    /// Number of entries: map size, array length, or 0 for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.node {
            ProxyNode::Map(map) => map.len(),
            ProxyNode::List(items) => items.len(),
            ProxyNode::Scalar => 0,
        }
    }

    /// Whether this node has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this node is array-backed (a squashed collection or a plain
    /// array).
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self.node, ProxyNode::List(_))
    }

    /// Positional access for array-backed nodes.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&ResponseProxy<'a>> {
        match &self.node {
            ProxyNode::List(items) => items.get(index),
            _ => None,
        }
    }

    /// Iterate the elements of an array-backed node. Empty for maps and
    /// scalars.
    pub fn iter(&self) -> std::slice::Iter<'_, ResponseProxy<'a>> {
        match &self.node {
            ProxyNode::List(items) => items.iter(),
            _ => [].iter(),
        }
    }

    /// The scalar string value, if this node is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        self.raw.as_str()
    }

    /// The scalar integer value; XML text nodes are parsed on demand.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.raw
            .as_i64()
            .or_else(|| self.raw.as_str()?.parse().ok())
    }

    /// The scalar boolean value; XML text nodes are parsed on demand.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.raw.as_bool().or_else(|| match self.raw.as_str()? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        })
    }

    /// Escape hatch: the underlying tree node, untouched by squashing.
    #[must_use]
    pub fn raw(&self) -> &'a Value {
        self.raw
    }
}

impl<'p, 'a> IntoIterator for &'p ResponseProxy<'a> {
    type Item = &'p ResponseProxy<'a>;
    type IntoIter = std::slice::Iter<'p, ResponseProxy<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// If the map's key set is exactly `{"item"}` or `{"member"}`, return the
/// wrapped child node.
fn squash_key<'a>(map: &'a Map<String, Value>) -> Option<&'a Value> {
    if map.len() != 1 {
        return None;
    }
    let (key, child) = map.iter().next()?;
    TO_SQUASH.contains(&key.as_str()).then_some(child)
}

/// Normalize the squashed child into an array of proxies: a bare map (the
/// single-element case) becomes a one-element array.
fn flatten(child: &Value) -> Vec<ResponseProxy<'_>> {
    match child {
        Value::Array(items) => items.iter().map(ResponseProxy::new).collect(),
        other => vec![ResponseProxy::new(other)],
    }
}
