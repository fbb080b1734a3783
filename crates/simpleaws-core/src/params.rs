//! AWS Query-protocol parameter encoding.
//!
//! The Query protocol takes nested structures as flat, dot-indexed keys.
//! [`Params`] accepts plain Rust structures through [`ParamValue`] and
//! flattens them on assignment, so that after any `set` call every stored
//! value is a plain string:
//!
//! ```
//! use simpleaws_core::params::{ParamValue, Params};
//!
//! let mut params = Params::new();
//! params.set(
//!     "Filter",
//!     ParamValue::list([ParamValue::map([
//!         ("Name", ParamValue::from("domain")),
//!         ("Value", ParamValue::from("vpc")),
//!     ])]),
//! );
//!
//! assert_eq!(params.get("Filter.1.Name"), Some("domain"));
//! assert_eq!(params.get("Filter.1.Value"), Some("vpc"));
//! ```
//!
//! Sequences are 1-indexed (`K.1`, `K.2`, …); maps recurse under
//! `K.subkey` in insertion order. The `Name`/`Value` filter-pair idiom is a
//! separate, explicitly named helper ([`Params::set_name_value_pairs`])
//! rather than an overload of plain map assignment.

use chrono::{DateTime, NaiveDate, Utc};

/// A parameter value before flattening: a scalar, a sequence, or a map.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A string scalar, stored as-is.
    Str(String),
    /// An integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A boolean scalar, stored as `true`/`false`.
    Bool(bool),
    /// A UTC timestamp, stored in ISO-8601 (`%Y-%m-%dT%H:%M:%SZ`).
    Timestamp(DateTime<Utc>),
    /// A calendar date, stored as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// A sequence, flattened to 1-indexed `key.n` entries.
    List(Vec<ParamValue>),
    /// A map, flattened to `key.subkey` entries in insertion order.
    Map(Vec<(String, ParamValue)>),
}

impl ParamValue {
    /// Build a sequence value.
    pub fn list(items: impl IntoIterator<Item = ParamValue>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Build a map value, preserving entry order.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, ParamValue)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Render a scalar to its wire string. Returns `None` for structured
    /// values, which must be flattened instead.
    fn to_scalar_string(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(if *b { "true" } else { "false" }.to_owned()),
            Self::Timestamp(t) => Some(t.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            Self::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Self::List(_) | Self::Map(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// The flattened parameter container carried by a request.
///
/// Insertion order is preserved; assigning the same flat key twice
/// overwrites in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a flat key directly, bypassing flattening.
    ///
    /// An existing entry with the same key is overwritten in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Assign a value under `key`, flattening structured values.
    ///
    /// Scalars store directly; sequences expand to `key.1`..`key.n`; maps
    /// recurse under `key.subkey`. Empty sequences and maps emit no keys.
    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.set_value(key, value.into());
    }

    fn set_value(&mut self, key: &str, value: ParamValue) {
        match value {
            ParamValue::List(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    self.set_value(&format!("{key}.{}", index + 1), item);
                }
            }
            ParamValue::Map(entries) => {
                for (subkey, subvalue) in entries {
                    self.set_value(&format!("{key}.{subkey}"), subvalue);
                }
            }
            scalar => {
                // to_scalar_string is total for non-structured variants.
                if let Some(rendered) = scalar.to_scalar_string() {
                    self.insert(key, rendered);
                }
            }
        }
    }

    /// Assign the AWS `Name`/`Value` filter-pair idiom under `key`.
    ///
    /// Pairs are sorted ascending by name, then entry `i` (1-indexed) emits
    /// `key.i.Name` and `key.i.Value`, the value itself flattened when it is
    /// a sequence (`key.i.Value.j`).
    pub fn set_name_value_pairs<K: Into<String>>(
        &mut self,
        key: &str,
        pairs: impl IntoIterator<Item = (K, ParamValue)>,
    ) {
        let mut pairs: Vec<(String, ParamValue)> =
            pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        for (index, (name, value)) in pairs.into_iter().enumerate() {
            self.insert(format!("{key}.{}.Name", index + 1), name);
            self.set_value(&format!("{key}.{}.Value", index + 1), value);
        }
    }

    /// Merge pre-flattened pairs, overwriting existing keys.
    pub fn merge(&mut self, pairs: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Look up a flat key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a flat key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of flat entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the entries as owned pairs, in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
