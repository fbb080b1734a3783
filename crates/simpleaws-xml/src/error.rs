//! Error types for XML building and parsing.

use std::io;

/// Errors that can occur while building or parsing XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The input tree is not usable as an XML document body.
    #[error("invalid XML body: {0}")]
    InvalidBody(String),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An error decoding XML text content.
    #[error("failed to parse XML content: {0}")]
    ParseError(String),
}
