//! Error types for media type operations
//!
//! This module defines all error types used throughout MIMEKit.

use thiserror::Error;

/// Reason a string could not be recognized as a media type
///
/// Every variant is recoverable: callers should treat it as "no media type
/// could be recognized" rather than as a fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// No `/` separates the type from the subtype
    #[error("missing '/' between type and subtype")]
    MissingSlash,

    /// The type or the subtype is empty after trimming
    #[error("empty type or subtype")]
    EmptyTypeOrSubtype,

    /// A parameter fragment is not of the form `name=value`
    #[error("malformed parameter, expected name=value")]
    MalformedParameter,
}

/// Result type alias for media type parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Error types for MIMEKit operations
#[derive(Debug, Error)]
pub enum MimeError {
    /// Media type string could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A metadata adapter failed to read its input
    ///
    /// The adapter-specific error is kept as the source so callers only ever
    /// have to handle this one variant.
    #[error("Can't read {format} metadata")]
    Extraction {
        /// Name of the format being read (e.g. "JPEG")
        format: &'static str,
        /// Underlying reader error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MimeError {
    /// Wrap an adapter-specific error for the given format
    pub fn extraction(
        format: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        MimeError::Extraction {
            format,
            source: source.into(),
        }
    }
}

/// Result type alias for MIMEKit operations
pub type MimeResult<T> = Result<T, MimeError>;
