//! Error types for XML rendering and parsing.

use modinput_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlError {
    /// The value being rendered failed its own validation.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Well-formed XML that is not the document we expected.
    #[error("invalid document: {reason}")]
    InvalidDocument { reason: String },

    /// Malformed XML.
    #[error("XML parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    /// The document ended before `element` was closed.
    #[error("XML parse error: unexpected end of document inside <{element}>")]
    UnexpectedEof { element: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl XmlError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// True for syntax errors, as opposed to structural ones.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::UnexpectedEof { .. })
    }

    /// True when the underlying reader failed, as opposed to the document.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Parse(quick_xml::Error::Io(_)))
    }
}

pub type Result<T> = std::result::Result<T, XmlError>;
