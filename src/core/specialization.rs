//! Media type specialization
//!
//! Decides whether a concrete media type satisfies a requested one, for
//! example whether an `application/xhtml+xml` document can be handed to
//! something that accepts `application/xml`. This is a rule-ordered test, not a
//! lattice: it is neither symmetric nor meant to build a type hierarchy.

use crate::core::media_type::{MediaType, APPLICATION_XML, OCTET_STREAM, TEXT_PLAIN};

impl MediaType {
    /// Check whether this media type is a specialization of `that`
    ///
    /// The first matching rule decides:
    ///
    /// 1. everything specializes `application/octet-stream` (compared with
    ///    its parameters, so a parameterized octet stream does not match here)
    /// 2. the top-level types must be equal
    /// 3. every parameter of `that` must appear with the same value in `self`
    /// 4. every subtype specializes `text/plain`
    /// 5. every `+xml` subtype specializes `application/xml`
    /// 6. otherwise the subtypes must be equal
    ///
    /// # Example
    ///
    /// ```rust
    /// use mimekit::{MediaType, APPLICATION_XML, TEXT_PLAIN};
    ///
    /// let rss = MediaType::new("application", "rss+xml");
    /// assert!(rss.is_specialization_of(&APPLICATION_XML));
    ///
    /// // The top-level type still has to match
    /// let svg = MediaType::new("image", "svg+xml");
    /// assert!(!svg.is_specialization_of(&APPLICATION_XML));
    /// assert!(MediaType::new("text", "html").is_specialization_of(&TEXT_PLAIN));
    /// ```
    pub fn is_specialization_of(&self, that: &MediaType) -> bool {
        if *that == OCTET_STREAM {
            return true;
        }
        if self.type_() != that.type_() {
            return false;
        }
        if !that.parameters().is_subset_of(self.parameters()) {
            return false;
        }

        let that_base = that.base_type();
        if *that_base == TEXT_PLAIN {
            return true;
        }
        if *that_base == APPLICATION_XML && self.subtype().ends_with("+xml") {
            return true;
        }

        self.subtype() == that.subtype()
    }
}
