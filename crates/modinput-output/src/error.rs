//! Error types for the channel writer.

use std::fmt;

use modinput_xml::XmlError;
use thiserror::Error;

/// One of the two output channels owned by a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Records,
    Diagnostics,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Records => "records",
            Channel::Diagnostics => "diagnostics",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// The write would not fit in the channel's remaining capacity.
    #[error("{channel} channel overflow: {requested} bytes requested, {remaining} remaining")]
    BufferOverflow {
        channel: Channel,
        requested: usize,
        remaining: usize,
    },

    /// The record could not be rendered.
    #[error("record rejected: {0}")]
    Render(#[from] XmlError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OutputError {
    /// True when the failure came from the record rather than the channel.
    pub fn is_rejected_record(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
