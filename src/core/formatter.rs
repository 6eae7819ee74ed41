//! Media type formatter
//!
//! Renders a [`MediaType`] in its canonical form:
//! `type/subtype` followed by `; name=value` for every parameter, in name
//! order. Values containing a special character or whitespace are quoted,
//! with every special character escaped by a backslash.

use crate::core::media_type::MediaType;
use std::fmt::{self, Write};

/// Characters that force quoting and are backslash-escaped inside quotes
const SPECIALS: &[char] = &[
    '(', ')', '<', '>', '@', ',', ';', ':', '\\', '"', '/', '[', ']', '?', '=',
];

fn is_special(c: char) -> bool {
    SPECIALS.contains(&c)
}

// Space, tab, line feed, vertical tab, form feed, carriage return
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn needs_quoting(value: &str) -> bool {
    value.chars().any(|c| is_special(c) || is_whitespace(c))
}

/// Write a parameter value, quoting and escaping it when needed
fn write_value<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    if !needs_quoting(value) {
        return out.write_str(value);
    }

    out.write_char('"')?;
    for c in value.chars() {
        if is_special(c) {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_char('"')
}

/// Write the canonical form of a media type into any [`fmt::Write`] sink
pub fn write_media_type<W: Write>(out: &mut W, media: &MediaType) -> fmt::Result {
    out.write_str(media.type_())?;
    out.write_char('/')?;
    out.write_str(media.subtype())?;
    for (name, value) in media.parameters().iter() {
        out.write_str("; ")?;
        out.write_str(name)?;
        out.write_char('=')?;
        write_value(out, value)?;
    }
    Ok(())
}

/// Render the canonical form of a media type
///
/// # Example
///
/// ```rust
/// use mimekit::{format, MediaType};
///
/// let media = MediaType::with_parameters("text", "plain", [("title", "a b")]);
/// assert_eq!(format(&media), r#"text/plain; title="a b""#);
/// ```
pub fn format(media: &MediaType) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_media_type(&mut out, media);
    out
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_media_type(f, self)
    }
}
