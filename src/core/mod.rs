//! MIMEKit core module
//!
//! This module contains the media type value model, including parsing,
//! formatting and the specialization relation.

pub mod error;
pub mod formatter;
pub mod media_type;
pub mod parameters;
pub mod parser;
pub mod specialization;

pub use error::{MimeError, MimeResult, ParseError, ParseResult};
pub use formatter::{format, write_media_type};
pub use media_type::{MediaType, APPLICATION_XML, OCTET_STREAM, TEXT_PLAIN};
pub use parameters::{Parameters, NO_PARAMETERS};
pub use parser::parse;
