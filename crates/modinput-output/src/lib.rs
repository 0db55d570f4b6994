//! Output channels for a modular input.
//!
//! A [`ChannelWriter`] owns two capacity-bounded buffers: the records
//! channel, carrying `<event>` elements inside an open `<stream>` envelope,
//! and the diagnostics channel, carrying severity-tagged lines. Every write
//! is all-or-nothing and returns the channel's new position.

mod buffer;
mod error;
mod writer;

pub use buffer::{ChannelBuffer, DEFAULT_CHANNEL_CAPACITY};
pub use error::{Channel, OutputError, Result};
pub use writer::ChannelWriter;
