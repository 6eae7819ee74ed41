//! JPEG metadata adapter
//!
//! Walks the marker segments of a JPEG stream up to the first scan and
//! reports what the headers say about the image:
//!
//! - SOFn frame headers: compression process, precision, dimensions and
//!   component count
//! - COM segments: comments
//! - APP0 JFIF headers: version and pixel density
//!
//! Everything else (Exif, XMP, ICC, quantization and Huffman tables) is
//! skipped. The reader only needs `Read`; skipped segments are drained.

use crate::core::error::{MimeError, MimeResult};
use crate::core::media_type::MediaType;
use crate::metadata::{Metadata, MetadataSink};
use crate::parsers::MetadataParser;
use log::{trace, warn};
use std::io::{self, Read};
use thiserror::Error;

/// JPEG images, `image/jpeg`
pub static IMAGE_JPEG: MediaType = MediaType::from_static("image", "jpeg");

static SUPPORTED_TYPES: &[MediaType] = &[MediaType::from_static("image", "jpeg")];

/// JPEG segment markers
const MARKER_SOI: u8 = 0xD8; // Start of Image
const MARKER_EOI: u8 = 0xD9; // End of Image
const MARKER_SOS: u8 = 0xDA; // Start of Scan
const MARKER_COM: u8 = 0xFE; // Comment
const MARKER_APP0: u8 = 0xE0;
const MARKER_TEM: u8 = 0x01;
const MARKER_RST0: u8 = 0xD0;
const MARKER_RST7: u8 = 0xD7;
const MARKER_SOF0: u8 = 0xC0;
const MARKER_SOF15: u8 = 0xCF;
const MARKER_DHT: u8 = 0xC4;
const MARKER_JPG: u8 = 0xC8;
const MARKER_DAC: u8 = 0xCC;

/// JFIF identifier in APP0 segment
const JFIF_IDENTIFIER: &[u8] = b"JFIF\0";

/// Tag names written to the sink
pub mod tags {
    pub const COMPRESSION_TYPE: &str = "Compression Type";
    pub const DATA_PRECISION: &str = "Data Precision";
    pub const IMAGE_HEIGHT: &str = "Image Height";
    pub const IMAGE_WIDTH: &str = "Image Width";
    pub const NUMBER_OF_COMPONENTS: &str = "Number of Components";
    pub const COMMENT: &str = "Jpeg Comment";
    pub const JFIF_VERSION: &str = "Version";
    pub const RESOLUTION_UNITS: &str = "Resolution Units";
    pub const X_RESOLUTION: &str = "X Resolution";
    pub const Y_RESOLUTION: &str = "Y Resolution";
}

/// Errors raised while reading the JPEG headers
///
/// These never reach callers directly: they are wrapped in
/// [`MimeError::Extraction`] and available through `source()`.
#[derive(Debug, Error)]
pub enum JpegError {
    /// The stream does not start with an SOI marker
    #[error("missing SOI marker, not a JPEG stream")]
    NotJpeg,

    /// A segment declares a length that cannot hold its own header
    #[error("segment 0x{marker:02X} has invalid length {length}")]
    BadSegmentLength { marker: u8, length: u16 },

    /// The stream ended in the middle of a segment or the reader failed
    #[error("could not read segment data: {0}")]
    Truncated(#[from] io::Error),
}

/// JPEG metadata adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegParser;

impl MetadataParser for JpegParser {
    fn supported_types(&self) -> &'static [MediaType] {
        SUPPORTED_TYPES
    }

    fn parse<R: Read, S: MetadataSink>(&self, reader: R, sink: &mut S) -> MimeResult<()> {
        Self::read_headers(reader, sink).map_err(|e| MimeError::extraction(self.format_name(), e))
    }

    fn format_name(&self) -> &'static str {
        "JPEG"
    }
}

impl JpegParser {
    /// Read a JPEG stream into a fresh [`Metadata`], with the content type set
    pub fn parse_into_metadata<R: Read>(&self, reader: R) -> MimeResult<Metadata> {
        let mut metadata = Metadata::new();
        metadata.set_content_type(&IMAGE_JPEG);
        self.parse(reader, &mut metadata)?;
        Ok(metadata)
    }

    fn read_headers<R: Read, S: MetadataSink>(
        mut reader: R,
        sink: &mut S,
    ) -> Result<(), JpegError> {
        let mut header = [0u8; 2];
        match reader.read_exact(&mut header) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Err(JpegError::NotJpeg),
            Err(e) => return Err(e.into()),
        }
        if header[0] != 0xFF || header[1] != MARKER_SOI {
            return Err(JpegError::NotJpeg);
        }

        loop {
            let marker = Self::find_marker(&mut reader)?;
            if marker == MARKER_SOS || marker == MARKER_EOI {
                break;
            }
            // Standalone markers carry no length
            if marker == MARKER_TEM || (MARKER_RST0..=MARKER_RST7).contains(&marker) {
                continue;
            }

            let length = Self::read_segment_length(&mut reader, marker)?;
            trace!("JPEG segment 0x{:02X}, {} bytes", marker, length);

            if Self::is_frame_header(marker) {
                let data = Self::read_segment(&mut reader, length)?;
                Self::report_frame(marker, length, &data, sink)?;
            } else if marker == MARKER_COM {
                let data = Self::read_segment(&mut reader, length)?;
                Self::report_comment(&data, sink);
            } else if marker == MARKER_APP0 {
                let data = Self::read_segment(&mut reader, length)?;
                Self::report_jfif(&data, sink);
            } else {
                Self::skip_segment(&mut reader, length)?;
            }
        }

        Ok(())
    }

    /// SOF0..SOF15, minus the markers sharing that range (DHT, JPG, DAC)
    fn is_frame_header(marker: u8) -> bool {
        (MARKER_SOF0..=MARKER_SOF15).contains(&marker)
            && marker != MARKER_DHT
            && marker != MARKER_JPG
            && marker != MARKER_DAC
    }

    /// Find the next JPEG marker, skipping fill bytes
    fn find_marker<R: Read>(reader: &mut R) -> Result<u8, JpegError> {
        let mut buffer = [0u8; 1];
        loop {
            reader.read_exact(&mut buffer)?;
            if buffer[0] == 0xFF {
                reader.read_exact(&mut buffer)?;
                while buffer[0] == 0xFF {
                    reader.read_exact(&mut buffer)?;
                }
                if buffer[0] != 0x00 {
                    return Ok(buffer[0]);
                }
            }
        }
    }

    /// Read segment length (2 bytes, big-endian, includes itself)
    fn read_segment_length<R: Read>(reader: &mut R, marker: u8) -> Result<u16, JpegError> {
        let mut length_bytes = [0u8; 2];
        reader.read_exact(&mut length_bytes)?;
        let length = u16::from_be_bytes(length_bytes);
        if length < 2 {
            return Err(JpegError::BadSegmentLength { marker, length });
        }
        Ok(length)
    }

    fn read_segment<R: Read>(reader: &mut R, length: u16) -> Result<Vec<u8>, JpegError> {
        let mut data = vec![0u8; length as usize - 2];
        reader.read_exact(&mut data)?;
        Ok(data)
    }

    fn skip_segment<R: Read>(reader: &mut R, length: u16) -> Result<(), JpegError> {
        let expected = u64::from(length - 2);
        let skipped = io::copy(&mut reader.by_ref().take(expected), &mut io::sink())?;
        if skipped < expected {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(())
    }

    fn report_frame<S: MetadataSink>(
        marker: u8,
        length: u16,
        data: &[u8],
        sink: &mut S,
    ) -> Result<(), JpegError> {
        if data.len() < 6 {
            return Err(JpegError::BadSegmentLength { marker, length });
        }

        let precision = data[0];
        let height = u16::from_be_bytes([data[1], data[2]]);
        let width = u16::from_be_bytes([data[3], data[4]]);
        let components = data[5];

        sink.set(tags::COMPRESSION_TYPE, Self::compression_type(marker));
        sink.set(tags::DATA_PRECISION, &format!("{} bits", precision));
        sink.set(tags::IMAGE_HEIGHT, &format!("{} pixels", height));
        sink.set(tags::IMAGE_WIDTH, &format!("{} pixels", width));
        sink.set(tags::NUMBER_OF_COMPONENTS, &components.to_string());
        Ok(())
    }

    fn compression_type(marker: u8) -> &'static str {
        match marker - MARKER_SOF0 {
            0 => "Baseline",
            1 => "Extended sequential, Huffman",
            2 => "Progressive, Huffman",
            3 => "Lossless, Huffman",
            5 => "Differential sequential, Huffman",
            6 => "Differential progressive, Huffman",
            7 => "Differential lossless, Huffman",
            9 => "Extended sequential, arithmetic",
            10 => "Progressive, arithmetic",
            11 => "Lossless, arithmetic",
            13 => "Differential sequential, arithmetic",
            14 => "Differential progressive, arithmetic",
            15 => "Differential lossless, arithmetic",
            _ => "Unknown",
        }
    }

    fn report_comment<S: MetadataSink>(data: &[u8], sink: &mut S) {
        let comment = String::from_utf8_lossy(data);
        sink.set(tags::COMMENT, comment.trim_end_matches('\0'));
    }

    fn report_jfif<S: MetadataSink>(data: &[u8], sink: &mut S) {
        if !data.starts_with(JFIF_IDENTIFIER) {
            // JFXX extensions and vendor APP0 segments
            return;
        }
        let Some(fields) = data.get(JFIF_IDENTIFIER.len()..JFIF_IDENTIFIER.len() + 7) else {
            warn!("Skipping truncated JFIF header ({} bytes)", data.len());
            return;
        };

        let units = match fields[2] {
            0 => "none",
            1 => "inch",
            2 => "centimetre",
            _ => "unit",
        };
        let x_density = u16::from_be_bytes([fields[3], fields[4]]);
        let y_density = u16::from_be_bytes([fields[5], fields[6]]);

        sink.set(tags::JFIF_VERSION, &format!("{}.{:02}", fields[0], fields[1]));
        sink.set(tags::RESOLUTION_UNITS, units);
        sink.set(tags::X_RESOLUTION, &format!("{} dots", x_density));
        sink.set(tags::Y_RESOLUTION, &format!("{} dots", y_density));
    }
}
