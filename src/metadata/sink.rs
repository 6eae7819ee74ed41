//! Metadata sink trait
//!
//! Adapters that pull metadata out of a document write `(name, value)` pairs
//! into a caller-supplied sink. The sink decides how to store them.

use std::collections::{BTreeMap, HashMap};

/// Receiver of `(name, value)` metadata pairs
pub trait MetadataSink {
    /// Record a value for `name`, replacing whatever the sink held for it
    fn set(&mut self, name: &str, value: &str);
}

impl MetadataSink for HashMap<String, String> {
    fn set(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl MetadataSink for BTreeMap<String, String> {
    fn set(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

/// Keeps every pair in arrival order, duplicates included
impl MetadataSink for Vec<(String, String)> {
    fn set(&mut self, name: &str, value: &str) {
        self.push((name.to_string(), value.to_string()));
    }
}

impl<S: MetadataSink + ?Sized> MetadataSink for &mut S {
    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value);
    }
}
