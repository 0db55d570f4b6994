//! The three host interactions, over plain readers and writers.
//!
//! Each function drives a [`ChannelWriter`] and flushes it to the given
//! records and diagnostics sinks, so the binary can pass stdout and stderr
//! while tests pass byte vectors.

use std::io::{BufRead, Read, Write};

use anyhow::{Context, Result, bail};
use modinput_model::{ParameterDescriptor, Record, Severity, ValidationRequest};
use modinput_output::{ChannelWriter, OutputError};
use modinput_xml::{XmlFragment, parse_validation_request_from_reader, render_error_document};
use tracing::{debug, info, warn};

/// Result of checking a proposed configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Accepted(ValidationRequest),
    Rejected(String),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Per-run overrides applied to every emitted record.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    pub stanza: String,
    pub source: Option<String>,
    pub sourcetype: Option<String>,
    pub index: Option<String>,
    pub host: Option<String>,
}

impl EmitOptions {
    fn record(&self, line: &str) -> Record {
        let mut record = Record::new(line).with_stanza(self.stanza.as_str());
        if let Some(source) = &self.source {
            record = record.with_source(source.as_str());
        }
        if let Some(sourcetype) = &self.sourcetype {
            record = record.with_sourcetype(sourcetype.as_str());
        }
        if let Some(index) = &self.index {
            record = record.with_index(index.as_str());
        }
        if let Some(host) = &self.host {
            record = record.with_host(host.as_str());
        }
        record
    }
}

/// Counts from one emit run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub written: usize,
    pub rejected: usize,
}

/// Parse a validation request from `input` and answer it.
///
/// An accepted request gets an `INFO` diagnostic naming the stanza. A
/// malformed one is answered with an `<error>` document on the records
/// channel and an `ERROR` diagnostic; it is not an `Err`. Failing to read
/// `input` is an `Err` and writes nothing.
pub fn validate<R, O, E>(
    input: R,
    records_out: &mut O,
    diagnostics_out: &mut E,
) -> Result<ValidationOutcome>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut writer = ChannelWriter::new();
    let outcome = match parse_validation_request_from_reader(input) {
        Ok(request) => {
            let stanza = request.name().unwrap_or_default();
            info!(stanza, parameters = request.parameters.len(), "configuration accepted");
            writer.log(Severity::Info, &format!("Configuration for {stanza} is valid"))?;
            ValidationOutcome::Accepted(request)
        }
        Err(err) if err.is_io_error() => {
            return Err(anyhow::Error::new(err).context("read validation request"));
        }
        Err(err) => {
            let message = format!("Invalid configuration: {err}");
            warn!(error = %err, "configuration rejected");
            writer.write_raw(&render_error_document(&message)?)?;
            writer.log(Severity::Error, &message)?;
            ValidationOutcome::Rejected(message)
        }
    };
    writer
        .flush_to(records_out, diagnostics_out)
        .context("flush validation response")?;
    Ok(outcome)
}

/// Render a JSON array of parameter descriptors as `<arg>` fragments, one per line.
///
/// Returns the number of fragments written.
pub fn describe<R, O, E>(input: R, records_out: &mut O, diagnostics_out: &mut E) -> Result<usize>
where
    R: Read,
    O: Write,
    E: Write,
{
    let descriptors: Vec<ParameterDescriptor> =
        serde_json::from_reader(input).context("parse parameter descriptors")?;
    if let Some(position) = descriptors.iter().position(|arg| arg.name.is_empty()) {
        bail!("parameter descriptor #{} has an empty name", position + 1);
    }

    let mut writer = ChannelWriter::new();
    for descriptor in &descriptors {
        let mut fragment = descriptor
            .to_xml_string()
            .with_context(|| format!("render parameter {}", descriptor.name))?;
        fragment.push('\n');
        writer
            .write_raw(&fragment)
            .with_context(|| format!("write parameter {}", descriptor.name))?;
        writer.flush_to(records_out, diagnostics_out)?;
    }
    debug!(count = descriptors.len(), "described parameters");
    Ok(descriptors.len())
}

/// Stream each input line to the records channel as one record.
///
/// Lines that cannot be written (empty, or larger than the channel) are
/// reported on the diagnostics channel and skipped.
pub fn emit<R, O, E>(
    input: R,
    options: &EmitOptions,
    records_out: &mut O,
    diagnostics_out: &mut E,
) -> Result<EmitSummary>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut writer = ChannelWriter::new();
    let mut summary = EmitSummary::default();
    for (number, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("read input line {}", number + 1))?;
        match writer.write_record(&options.record(&line)) {
            Ok(_) => summary.written += 1,
            Err(OutputError::Render(_)) => summary.rejected += 1,
            Err(err @ OutputError::BufferOverflow { .. }) => {
                warn!(line = number + 1, error = %err, "record does not fit the channel");
                writer.log(Severity::Error, &format!("Dropped line {}: {err}", number + 1))?;
                summary.rejected += 1;
            }
            Err(err) => return Err(err.into()),
        }
        writer.flush_to(records_out, diagnostics_out)?;
    }
    info!(
        stanza = options.stanza.as_str(),
        written = summary.written,
        rejected = summary.rejected,
        "emit finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_apply_every_override() {
        let options = EmitOptions {
            stanza: "in://a".to_string(),
            source: Some("src".to_string()),
            sourcetype: None,
            index: Some("main".to_string()),
            host: Some("h".to_string()),
        };
        let record = options.record("line");
        assert_eq!(record.stanza(), Some("in://a"));
        assert_eq!(record.source(), Some("src"));
        assert_eq!(record.sourcetype(), None);
        assert_eq!(record.index(), Some("main"));
        assert_eq!(record.host(), Some("h"));
    }

    #[test]
    fn rejected_outcome_is_not_accepted() {
        assert!(!ValidationOutcome::Rejected("x".to_string()).is_accepted());
    }
}
