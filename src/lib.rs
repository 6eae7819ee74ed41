//! # MIMEKit
//!
//! Internet media types (MIME types) as plain values.
//!
//! - [`parse`] turns `type/subtype; name=value` strings into [`MediaType`]
//!   values, normalizing case and whitespace
//! - [`format`] (and `Display`) renders the canonical form, quoting and
//!   escaping parameter values where needed
//! - [`MediaType::is_specialization_of`] decides whether one type is a more
//!   specific case of another
//! - [`Metadata`] and [`MetadataSink`] receive what metadata adapters such
//!   as [`JpegParser`] extract from documents
//!
//! ## Example
//!
//! ```rust
//! use mimekit::{MediaType, APPLICATION_XML, OCTET_STREAM};
//!
//! let xhtml: MediaType = "application/xhtml+xml; charset=UTF-8".parse()?;
//! assert!(xhtml.is_specialization_of(&APPLICATION_XML));
//! assert!(xhtml.is_specialization_of(&OCTET_STREAM));
//! assert_eq!(xhtml.base_type().to_string(), "application/xhtml+xml");
//! # Ok::<(), mimekit::ParseError>(())
//! ```
//!
//! All values are immutable and can be shared between threads freely.

pub mod core;
pub mod metadata;
pub mod parsers;

pub use crate::core::{
    format, parse, write_media_type, MediaType, MimeError, MimeResult, ParseError, ParseResult,
    Parameters, APPLICATION_XML, NO_PARAMETERS, OCTET_STREAM, TEXT_PLAIN,
};
pub use metadata::{Metadata, MetadataSink, CONTENT_TYPE};
pub use parsers::MetadataParser;
#[cfg(feature = "jpeg")]
pub use parsers::{JpegError, JpegParser, IMAGE_JPEG};
