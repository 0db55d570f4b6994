//! Capacity-bounded byte sink backing one output channel.

use std::io::{self, Write};

use crate::error::{Channel, OutputError, Result};

/// Default capacity of each channel buffer (64 KiB).
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64 * 1024;

/// An owned, append-only byte buffer with a hard capacity.
///
/// The write position is the buffer length. An append either fits entirely
/// and moves the position, or fails and leaves the buffer as it was.
#[derive(Debug, Clone)]
pub struct ChannelBuffer {
    channel: Channel,
    bytes: Vec<u8>,
    capacity: usize,
}

impl ChannelBuffer {
    pub fn new(channel: Channel, capacity: usize) -> Self {
        Self {
            channel,
            bytes: Vec::new(),
            capacity,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current write position.
    pub fn position(&self) -> usize {
        self.bytes.len()
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    /// Bytes written so far.
    pub fn contents(&self) -> &[u8] {
        &self.bytes
    }

    /// Append `bytes` as one write and return the new position.
    pub fn append(&mut self, bytes: &[u8]) -> Result<usize> {
        let requested = bytes.len();
        if requested > self.remaining() {
            return Err(OutputError::BufferOverflow {
                channel: self.channel,
                requested,
                remaining: self.remaining(),
            });
        }
        self.bytes.extend_from_slice(bytes);
        Ok(self.bytes.len())
    }

    /// Copy the contents to `sink` and reset the position to zero.
    ///
    /// Bytes are removed as the sink accepts them. On error the buffer holds
    /// only what the sink has not taken yet, so a retry does not repeat
    /// bytes already delivered.
    pub fn drain_to<W: Write>(&mut self, sink: &mut W) -> Result<usize> {
        let mut written = 0;
        while !self.bytes.is_empty() {
            match sink.write(&self.bytes) {
                Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero).into()),
                Ok(accepted) => {
                    self.bytes.drain(..accepted);
                    written += accepted;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        if written > 0 {
            sink.flush()?;
        }
        Ok(written)
    }
}
