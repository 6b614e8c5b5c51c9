//! Error types for the extractor.
//!
//! `DwmlError` is the error surfaced to library consumers. `TimestampError`
//! is kept separate because it is cached alongside a time layout and must
//! therefore be cloneable.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum DwmlError {
    /// Missing required XML element.
    #[error("Missing required XML element: <{element}> in {context}")]
    MissingElement { element: String, context: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// A valid-time entry could not be parsed.
    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A `start-valid-time` or `end-valid-time` value that is not an
/// offset-qualified timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid <{element}> #{index} in time layout {}: '{value}' ({source})",
    .layout_key.as_deref().unwrap_or("<unkeyed>")
)]
pub struct TimestampError {
    /// Key of the owning time layout, if it has one.
    pub layout_key: Option<String>,
    /// Tag name of the offending element.
    pub element: &'static str,
    /// Zero-based position among its siblings of the same tag.
    pub index: usize,
    /// The offending text, trimmed.
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, DwmlError>;
