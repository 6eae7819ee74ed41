//! Media type values
//!
//! A [`MediaType`] is an immutable `(type, subtype, parameters)` triple.
//! Type and subtype are trimmed and lower-cased when the value is built;
//! parameters follow the rules of [`Parameters`].

use crate::core::error::ParseResult;
use crate::core::parameters::{Parameters, NO_PARAMETERS};
use std::borrow::Cow;
use std::str::FromStr;

/// Generic binary data, `application/octet-stream`
pub static OCTET_STREAM: MediaType = MediaType::from_static("application", "octet-stream");

/// Plain text, `text/plain`
pub static TEXT_PLAIN: MediaType = MediaType::from_static("text", "plain");

/// Generic XML, `application/xml`
pub static APPLICATION_XML: MediaType = MediaType::from_static("application", "xml");

/// Internet media type
///
/// # Example
///
/// ```rust
/// use mimekit::MediaType;
///
/// let html: MediaType = "Text/HTML; charset=UTF-8".parse()?;
/// assert_eq!(html.type_(), "text");
/// assert_eq!(html.subtype(), "html");
/// assert_eq!(html.parameter("Charset"), Some("UTF-8"));
/// assert_eq!(html.to_string(), "text/html; charset=UTF-8");
/// # Ok::<(), mimekit::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    type_: Cow<'static, str>,
    subtype: Cow<'static, str>,
    parameters: Parameters,
}

fn normalize(part: &str) -> Cow<'static, str> {
    Cow::Owned(part.trim().to_lowercase())
}

impl MediaType {
    /// Build a constant from parts that are already in canonical form
    pub(crate) const fn from_static(type_: &'static str, subtype: &'static str) -> Self {
        Self {
            type_: Cow::Borrowed(type_),
            subtype: Cow::Borrowed(subtype),
            parameters: Parameters::new(),
        }
    }

    /// Create a media type without parameters
    ///
    /// Type and subtype are trimmed and lower-cased. Use [`MediaType::parse`]
    /// when the input comes from outside and has to be validated.
    pub fn new(type_: &str, subtype: &str) -> Self {
        Self {
            type_: normalize(type_),
            subtype: normalize(subtype),
            parameters: Parameters::new(),
        }
    }

    /// Create a media type with parameters
    ///
    /// Parameter names are trimmed and lower-cased, values are kept verbatim.
    pub fn with_parameters<I, K, V>(type_: &str, subtype: &str, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            type_: normalize(type_),
            subtype: normalize(subtype),
            parameters: Parameters::from_pairs(parameters),
        }
    }

    /// Create a new media type from this one with extra parameters laid over
    /// the existing ones (the new values win on name collisions)
    pub fn overlay<I, K, V>(&self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            type_: self.type_.clone(),
            subtype: self.subtype.clone(),
            parameters: self.parameters.overlay(parameters),
        }
    }

    /// Parse a media type string of the form `type/subtype(; name=value)*`
    pub fn parse(raw: &str) -> ParseResult<Self> {
        crate::core::parser::parse(raw)
    }

    /// Get the base type (this type without parameters)
    ///
    /// Borrows `self` when there are no parameters to strip.
    pub fn base_type(&self) -> Cow<'_, MediaType> {
        if self.parameters.is_empty() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(Self {
                type_: self.type_.clone(),
                subtype: self.subtype.clone(),
                parameters: Parameters::new(),
            })
        }
    }

    /// Get the top-level type (e.g. "text")
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Get the subtype (e.g. "plain")
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Get all parameters
    pub fn parameters(&self) -> &Parameters {
        if self.parameters.is_empty() {
            &NO_PARAMETERS
        } else {
            &self.parameters
        }
    }

    /// Get a single parameter value by name (case-insensitive)
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// Whether this media type carries any parameters
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

impl FromStr for MediaType {
    type Err = crate::core::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for MediaType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let raw = <Cow<'de, str> as serde::de::Deserialize>::deserialize(deserializer)?;
        MediaType::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(value: &MediaType) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_normalizes() {
        let media = MediaType::new("  TEXT ", " Plain");
        assert_eq!(media.type_(), "text");
        assert_eq!(media.subtype(), "plain");
        assert!(!media.has_parameters());
        assert_eq!(media, TEXT_PLAIN);
    }

    #[test]
    fn test_with_parameters() {
        let media = MediaType::with_parameters("text", "plain", [(" CharSet", " UTF-8 ")]);
        // Values built from a map are not trimmed
        assert_eq!(media.parameter("charset"), Some(" UTF-8 "));
        assert_eq!(media.parameters().len(), 1);
    }

    #[test]
    fn test_equality_and_hash() {
        let a = MediaType::with_parameters("text", "plain", [("a", "1"), ("b", "2")]);
        let b = MediaType::with_parameters("TEXT", "PLAIN", [("b", "2"), ("a", "1")]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = MediaType::with_parameters("text", "plain", [("a", "1")]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_constants_compare_like_any_value() {
        assert_eq!(OCTET_STREAM, MediaType::new("application", "octet-stream"));
        assert_eq!(APPLICATION_XML, MediaType::new("Application", "XML"));
        assert_eq!(hash_of(&TEXT_PLAIN), hash_of(&MediaType::new("text", "plain")));
        assert!(!OCTET_STREAM.has_parameters());
    }

    #[test]
    fn test_base_type_borrows_without_parameters() {
        let plain = MediaType::new("text", "plain");
        let base = plain.base_type();
        assert!(matches!(base, Cow::Borrowed(_)));
        assert!(std::ptr::eq(base.as_ref(), &plain));
    }

    #[test]
    fn test_base_type_strips_parameters() {
        let media = MediaType::with_parameters("text", "plain", [("charset", "UTF-8")]);
        let base = media.base_type();
        assert!(matches!(base, Cow::Owned(_)));
        assert_eq!(*base, TEXT_PLAIN);
        assert!(base.parameters().is_empty());
    }

    #[test]
    fn test_overlay_builds_new_value() {
        let media = MediaType::with_parameters("text", "plain", [("charset", "ascii")]);
        let overlaid = media.overlay([("Charset", "UTF-8"), ("format", "flowed")]);

        assert_eq!(media.parameter("charset"), Some("ascii"));
        assert_eq!(overlaid.parameter("charset"), Some("UTF-8"));
        assert_eq!(overlaid.parameter("format"), Some("flowed"));
        assert_eq!(overlaid.base_type(), media.base_type());
    }

    #[test]
    fn test_overlay_with_nothing_is_equal() {
        let media = MediaType::with_parameters("text", "plain", [("charset", "ascii")]);
        let overlaid = media.overlay(std::iter::empty::<(&str, &str)>());
        assert_eq!(overlaid, media);
    }

    #[test]
    fn test_empty_parameters_are_shared() {
        let media = MediaType::new("image", "png");
        assert!(std::ptr::eq(media.parameters(), &NO_PARAMETERS));
    }
}
