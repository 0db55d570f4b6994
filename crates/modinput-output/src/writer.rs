//! Writer for the records and diagnostics channels.
//!
//! The records channel is an open-ended `<stream>` document: the opening tag
//! goes out with the first record and the writer never closes it. The host
//! reads the channel incrementally as a sequence of sibling `<event>`
//! elements. A finite consumer appends [`STREAM_CLOSE`] itself before
//! parsing a snapshot.
//!
//! The diagnostics channel carries one `"<SEVERITY> <message>"` line per
//! [`ChannelWriter::log`] call.
//!
//! A writer has no internal locking; callers issue writes one at a time.
//!
//! [`STREAM_CLOSE`]: modinput_xml::STREAM_CLOSE

use std::io::Write;

use modinput_model::{Record, Severity};
use modinput_xml::{STREAM_OPEN, XmlFragment};

use crate::buffer::{ChannelBuffer, DEFAULT_CHANNEL_CAPACITY};
use crate::error::{Channel, OutputError, Result};

#[derive(Debug, Clone)]
pub struct ChannelWriter {
    records: ChannelBuffer,
    diagnostics: ChannelBuffer,
    stream_opened: bool,
}

impl Default for ChannelWriter {
    fn default() -> Self {
        Self::with_capacities(DEFAULT_CHANNEL_CAPACITY, DEFAULT_CHANNEL_CAPACITY)
    }
}

impl ChannelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacities(records_capacity: usize, diagnostics_capacity: usize) -> Self {
        Self {
            records: ChannelBuffer::new(Channel::Records, records_capacity),
            diagnostics: ChannelBuffer::new(Channel::Diagnostics, diagnostics_capacity),
            stream_opened: false,
        }
    }

    /// Append `record` as an `<event>` inside the stream envelope.
    ///
    /// Returns the records channel position after the write.
    ///
    /// # Errors
    ///
    /// - [`OutputError::Render`] when the record is invalid. Nothing is
    ///   written to the records channel and a `WARN` line describing the
    ///   rejection goes to the diagnostics channel.
    /// - [`OutputError::BufferOverflow`] when the event does not fit. The
    ///   records channel is left unchanged.
    pub fn write_record(&mut self, record: &Record) -> Result<usize> {
        let fragment = match record.to_xml_bytes() {
            Ok(fragment) => fragment,
            Err(err) => {
                tracing::warn!(
                    stanza = record.stanza().unwrap_or_default(),
                    error = %err,
                    "rejected record"
                );
                let message = format!("Rejected record: {err}");
                if let Err(log_err) = self.log(Severity::Warn, &message) {
                    tracing::warn!(error = %log_err, "could not report rejected record");
                }
                return Err(OutputError::Render(err));
            }
        };

        let position = if self.stream_opened {
            self.records.append(&fragment)?
        } else {
            let mut bytes = Vec::with_capacity(STREAM_OPEN.len() + fragment.len());
            bytes.extend_from_slice(STREAM_OPEN.as_bytes());
            bytes.extend_from_slice(&fragment);
            let position = self.records.append(&bytes)?;
            self.stream_opened = true;
            position
        };
        tracing::debug!(
            stanza = record.stanza().unwrap_or_default(),
            bytes = fragment.len(),
            position,
            "wrote record"
        );
        Ok(position)
    }

    /// Append pre-formed XML or text verbatim to the records channel.
    ///
    /// Used for one-shot documents outside the stream envelope. Returns the
    /// records channel position after the write.
    pub fn write_raw(&mut self, xml: &str) -> Result<usize> {
        let position = self.records.append(xml.as_bytes())?;
        tracing::debug!(bytes = xml.len(), position, "wrote raw document");
        Ok(position)
    }

    /// Append `"<SEVERITY> <message>\n"` to the diagnostics channel.
    ///
    /// Returns the diagnostics channel position after the write.
    pub fn log(&mut self, severity: Severity, message: &str) -> Result<usize> {
        let line = format!("{severity} {message}\n");
        self.diagnostics.append(line.as_bytes())
    }

    /// Bytes written to the records channel since the last flush.
    pub fn records(&self) -> &[u8] {
        self.records.contents()
    }

    /// Bytes written to the diagnostics channel since the last flush.
    pub fn diagnostics(&self) -> &[u8] {
        self.diagnostics.contents()
    }

    pub fn records_position(&self) -> usize {
        self.records.position()
    }

    pub fn diagnostics_position(&self) -> usize {
        self.diagnostics.position()
    }

    /// True once the `<stream>` opening tag has been written.
    pub fn stream_opened(&self) -> bool {
        self.stream_opened
    }

    /// Move both channels to real sinks and empty the buffers.
    ///
    /// The stream stays open; later records continue the same envelope.
    pub fn flush_to<O: Write, E: Write>(
        &mut self,
        records_out: &mut O,
        diagnostics_out: &mut E,
    ) -> Result<()> {
        let records = self.records.drain_to(records_out)?;
        let diagnostics = self.diagnostics.drain_to(diagnostics_out)?;
        if records > 0 || diagnostics > 0 {
            tracing::debug!(records, diagnostics, "flushed channels");
        }
        Ok(())
    }
}
