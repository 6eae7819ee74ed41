//! Media type parameters
//!
//! Parameters are an ordered mapping from a case-insensitive name to a
//! case-sensitive value. Names are trimmed and lower-cased on the way in,
//! values are stored verbatim. Iteration is always sorted by name so that
//! rendering a media type is reproducible.

use std::collections::BTreeMap;

/// Shared parameter store used by every media type without parameters
///
/// It is only ever handed out by shared reference, so it cannot be modified.
pub static NO_PARAMETERS: Parameters = Parameters::new();

/// Parameters of a media type
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Parameters {
    entries: BTreeMap<String, String>,
}

/// Normalize a parameter name (trim, lower-case)
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Parameters {
    /// Create an empty parameter set
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a parameter set from `(name, value)` pairs
    ///
    /// Names are trimmed and lower-cased, values are kept as given. When two
    /// pairs share a name after normalization, the later one wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::new();
        params.extend_pairs(pairs);
        params
    }

    fn extend_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.entries
                .insert(normalize_name(name.as_ref()), value.into());
        }
    }

    /// Union of two parameter sets, `b` wins on name collisions
    ///
    /// When either side is empty the other one is returned as is.
    pub fn union(a: &Parameters, b: &Parameters) -> Parameters {
        if a.is_empty() {
            b.clone()
        } else if b.is_empty() {
            a.clone()
        } else {
            let mut union = a.clone();
            union
                .entries
                .extend(b.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
            union
        }
    }

    /// Overlay raw `(name, value)` pairs onto this set, returning a new set
    pub fn overlay<I, K, V>(&self, pairs: I) -> Parameters
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Parameters::union(self, &Parameters::from_pairs(pairs))
    }

    /// Get a parameter value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&normalize_name(name)).map(String::as_str)
    }

    /// Check whether a parameter is present (case-insensitive)
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_name(name))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check that every entry of `self` appears, with the same value, in `other`
    pub fn is_subset_of(&self, other: &Parameters) -> bool {
        self.entries
            .iter()
            .all(|(name, value)| other.entries.get(name) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for Parameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serde::ser::Serialize::serialize(&self.entries, serializer)
    }
}
