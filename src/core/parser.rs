//! Media type parser
//!
//! This module turns strings of the form `type/subtype(; name=value)*` into
//! [`MediaType`] values.
//!
//! The rules are deliberately lenient about what a token may contain: the
//! type, subtype, parameter names and values are only trimmed, never checked
//! against the RFC 2045 token grammar.

use crate::core::error::{ParseError, ParseResult};
use crate::core::media_type::MediaType;
use log::debug;

/// Parse a media type string
///
/// # Errors
///
/// * [`ParseError::MissingSlash`] if there is no `/` in the type part
/// * [`ParseError::EmptyTypeOrSubtype`] if the type or subtype is blank
/// * [`ParseError::MalformedParameter`] if a parameter has no `=` or no name
///
/// # Example
///
/// ```rust
/// use mimekit::{parse, ParseError};
///
/// let media = parse("text/plain; charset=UTF-8")?;
/// assert_eq!(media.parameter("charset"), Some("UTF-8"));
///
/// assert_eq!(parse("bogus"), Err(ParseError::MissingSlash));
/// # Ok::<(), ParseError>(())
/// ```
pub fn parse(raw: &str) -> ParseResult<MediaType> {
    let result = match raw.find(';') {
        // A trailing ';' is not a parameter separator, the whole string is
        // treated as "type/subtype"
        Some(semicolon) if semicolon + 1 < raw.len() => {
            parse_with_parameters(&raw[..semicolon], &raw[semicolon + 1..])
        }
        _ => parse_base(raw),
    };

    if let Err(err) = &result {
        debug!("Rejected media type {:?}: {}", raw, err);
    }
    result
}

/// Parse the `type/subtype` part
fn parse_base(raw: &str) -> ParseResult<MediaType> {
    let (type_, subtype) = raw.split_once('/').ok_or(ParseError::MissingSlash)?;

    let type_ = type_.trim();
    let subtype = subtype.trim();
    if type_.is_empty() || subtype.is_empty() {
        return Err(ParseError::EmptyTypeOrSubtype);
    }

    Ok(MediaType::new(type_, subtype))
}

/// Parse `type/subtype` followed by the `;`-separated parameter list
fn parse_with_parameters(base: &str, parameters: &str) -> ParseResult<MediaType> {
    let media = parse_base(base)?;

    let mut fragments: Vec<&str> = parameters.split(';').collect();
    // Empty fragments at the end ("a/b; c=d;;") carry nothing
    while fragments.last().is_some_and(|fragment| fragment.is_empty()) {
        fragments.pop();
    }

    let pairs = fragments
        .into_iter()
        .map(parse_parameter)
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(media.overlay(pairs))
}

/// Parse a single `name=value` fragment
///
/// Only the first `=` separates name from value, so values may contain `=`.
fn parse_parameter(fragment: &str) -> ParseResult<(&str, &str)> {
    let (name, value) = fragment
        .split_once('=')
        .ok_or(ParseError::MalformedParameter)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::MalformedParameter);
    }

    Ok((name, value.trim()))
}
