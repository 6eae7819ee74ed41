//! Document metadata
//!
//! [`Metadata`] is the default [`MetadataSink`]: an ordered, multi-valued
//! mapping from metadata name to values. It also knows how to carry the
//! document's media type under [`CONTENT_TYPE`].

pub mod sink;

pub use sink::MetadataSink;

use crate::core::media_type::MediaType;
use std::collections::BTreeMap;

/// Name under which the document media type is stored
pub const CONTENT_TYPE: &str = "Content-Type";

/// Multi-valued metadata container
///
/// Names are case-sensitive and iterated in sorted order. Values for one
/// name keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: BTreeMap<String, Vec<String>>,
}

impl Metadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single value of `name`, dropping any previous values
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), vec![value.into()]);
    }

    /// Append a value to `name`
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(name.into()).or_default().push(value.into());
    }

    /// Get the first value of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Get every value of `name`
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove `name`, returning its values
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.remove(name)
    }

    /// Whether any value is stored for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over the stored names
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs, one per stored value
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Number of names with at least one value
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no metadata is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store the canonical form of `media` as the content type
    pub fn set_content_type(&mut self, media: &MediaType) {
        self.set(CONTENT_TYPE, media.to_string());
    }

    /// Read the content type back, if present and parseable
    pub fn content_type(&self) -> Option<MediaType> {
        self.get(CONTENT_TYPE)
            .and_then(|raw| MediaType::parse(raw).ok())
    }
}

impl MetadataSink for Metadata {
    fn set(&mut self, name: &str, value: &str) {
        Metadata::set(self, name, value);
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serde::ser::Serialize::serialize(&self.entries, serializer)
    }
}
