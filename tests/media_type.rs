//! Tests for the MediaType API
//!
//! These exercise parsing, formatting, equality and specialization through
//! the public crate interface only.

use mimekit::{MediaType, ParseError, APPLICATION_XML, OCTET_STREAM, TEXT_PLAIN};

mod parse {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_and_subtype_are_normalized() {
        for (type_, subtype) in [("text", "plain"), ("IMAGE", "Png"), (" application ", "pdf ")] {
            let media = mimekit::parse(&format!("{}/{}", type_, subtype)).unwrap();
            assert_eq!(media.type_(), type_.trim().to_lowercase());
            assert_eq!(media.subtype(), subtype.trim().to_lowercase());
            assert!(media.parameters().is_empty());
        }
    }

    #[test]
    fn parameter_case() {
        let media = mimekit::parse("text/plain; charset=UTF-8").unwrap();
        let params: Vec<(&str, &str)> = media.parameters().iter().collect();
        assert_eq!(params, vec![("charset", "UTF-8")]);
    }

    #[test]
    fn from_str() {
        let media: MediaType = "Text/HTML".parse().unwrap();
        assert_eq!(media, MediaType::new("text", "html"));
    }

    #[test]
    fn failures() {
        assert_eq!(mimekit::parse("bogus"), Err(ParseError::MissingSlash));
        assert_eq!(mimekit::parse("a/"), Err(ParseError::EmptyTypeOrSubtype));
        assert_eq!(mimekit::parse("/b"), Err(ParseError::EmptyTypeOrSubtype));
        assert_eq!(mimekit::parse("a/b;c"), Err(ParseError::MalformedParameter));
    }

    #[test]
    fn failure_converts_into_crate_error() {
        fn detect(raw: &str) -> mimekit::MimeResult<MediaType> {
            Ok(raw.parse::<MediaType>()?)
        }

        let err = detect("bogus").unwrap_err();
        assert!(matches!(
            err,
            mimekit::MimeError::Parse(ParseError::MissingSlash)
        ));
    }
}

mod format {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_form() {
        let media = mimekit::parse("text/plain; charset=UTF-8").unwrap();
        assert_eq!(mimekit::format(&media), "text/plain; charset=UTF-8");
        assert_eq!(media.to_string(), "text/plain; charset=UTF-8");
    }

    #[test]
    fn quoting() {
        let spaced = MediaType::with_parameters("text", "plain", [("p", "a b")]);
        assert_eq!(spaced.to_string(), r#"text/plain; p="a b""#);

        let special = MediaType::with_parameters("text", "plain", [("p", "a;b")]);
        assert_eq!(special.to_string(), r#"text/plain; p="a\;b""#);
    }

    #[test]
    fn parse_format_is_stable() {
        let raw = "Multipart/Form-Data; Boundary=abc123 ; charset=UTF-8";
        let once = mimekit::parse(raw).unwrap().to_string();
        let twice = mimekit::parse(&once).unwrap().to_string();
        assert_eq!(once, "multipart/form-data; boundary=abc123; charset=UTF-8");
        assert_eq!(once, twice);
    }

    #[test]
    fn write_into_existing_buffer() {
        let mut header = String::from("Content-Type: ");
        mimekit::write_media_type(&mut header, &TEXT_PLAIN).unwrap();
        assert_eq!(header, "Content-Type: text/plain");
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = MediaType::with_parameters("text", "plain", [("charset", "UTF-8"), ("format", "flowed")]);
        let b = MediaType::with_parameters("text", "plain", [("format", "flowed"), ("charset", "UTF-8")]);
        assert_eq!(a, b);

        let set: HashSet<MediaType> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn parameter_values_are_case_sensitive() {
        let upper = mimekit::parse("text/plain; charset=UTF-8").unwrap();
        let lower = mimekit::parse("text/plain; charset=utf-8").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn base_type() {
        let plain = MediaType::new("text", "plain");
        assert!(std::ptr::eq(plain.base_type().as_ref(), &plain));

        let with_charset = mimekit::parse("text/plain; charset=UTF-8").unwrap();
        let base = with_charset.base_type();
        assert_eq!(*base, TEXT_PLAIN);
        assert!(base.parameters().is_empty());
    }

    #[test]
    fn overlay() {
        let media = mimekit::parse("text/plain; charset=ascii").unwrap();
        let updated = media.overlay([("charset", "UTF-8")]);
        assert_eq!(updated.to_string(), "text/plain; charset=UTF-8");
        assert_eq!(media.to_string(), "text/plain; charset=ascii");
    }
}

mod specialization {
    use super::*;

    fn media(raw: &str) -> MediaType {
        mimekit::parse(raw).unwrap()
    }

    #[test]
    fn octet_stream_accepts_everything() {
        for raw in ["image/png", "text/html; charset=UTF-8", "application/xhtml+xml", "x/y"] {
            assert!(media(raw).is_specialization_of(&OCTET_STREAM), "{}", raw);
        }
    }

    #[test]
    fn xml_family() {
        assert!(media("application/atom+xml").is_specialization_of(&APPLICATION_XML));
        assert!(!media("image/svg+xml").is_specialization_of(&APPLICATION_XML));
    }

    #[test]
    fn text_family() {
        assert!(media("text/html").is_specialization_of(&TEXT_PLAIN));
    }

    #[test]
    fn type_mismatch() {
        assert!(!media("application/pdf").is_specialization_of(&media("image/png")));
    }

    #[test]
    fn parameters_must_be_subset() {
        let with_charset = media("text/plain; charset=UTF-8");
        assert!(with_charset.is_specialization_of(&media("text/plain")));
        assert!(!media("text/plain").is_specialization_of(&with_charset));
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_as_canonical_string() {
        let media = mimekit::parse("text/plain; charset=UTF-8").unwrap();
        let json = serde_json::to_string(&media).unwrap();
        assert_eq!(json, r#""text/plain; charset=UTF-8""#);

        let back: MediaType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, media);
    }

    #[test]
    fn rejects_invalid_strings() {
        let result: Result<MediaType, _> = serde_json::from_str(r#""bogus""#);
        assert!(result.is_err());
    }
}
