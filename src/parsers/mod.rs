//! Metadata adapters
//!
//! An adapter reads a document supplied by the caller and writes what it
//! finds into a [`MetadataSink`]. Choosing the adapter for a document is up
//! to the caller; [`MetadataParser::supports`] answers whether a detected
//! media type is one the adapter can handle.

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "jpeg")]
pub use jpeg::{JpegError, JpegParser, IMAGE_JPEG};

use crate::core::error::MimeResult;
use crate::core::media_type::MediaType;
use crate::metadata::MetadataSink;
use std::io::Read;

/// Trait for metadata adapters
pub trait MetadataParser {
    /// Media types this adapter accepts
    fn supported_types(&self) -> &'static [MediaType];

    /// Read `reader` and write every metadata pair found into `sink`
    ///
    /// # Errors
    ///
    /// Failures of the underlying reader are reported as
    /// [`MimeError::Extraction`](crate::MimeError::Extraction), with the
    /// adapter-specific error as its source.
    fn parse<R: Read, S: MetadataSink>(&self, reader: R, sink: &mut S) -> MimeResult<()>;

    /// Name of the format this adapter reads (e.g. "JPEG")
    fn format_name(&self) -> &'static str;

    /// Whether a document of type `media` can be handed to this adapter
    ///
    /// True when `media` is a specialization of one of the supported types.
    fn supports(&self, media: &MediaType) -> bool {
        self.supported_types()
            .iter()
            .any(|supported| media.is_specialization_of(supported))
    }
}
