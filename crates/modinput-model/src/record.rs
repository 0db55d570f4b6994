use crate::error::{ModelError, Result};
use crate::time::Timestamp;

/// One data record for the records channel.
///
/// Only `data` is required. Every other field is an optional override the
/// host applies to this record alone. `done` and `unbroken` describe records
/// that belong to a multi-part logical entry: `unbroken` marks a piece that
/// is not yet complete, `done` marks the final piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub data: String,
    /// Time of the record; the renderer substitutes "now" when absent.
    pub time: Option<Timestamp>,
    /// Name of the configured input instance the record belongs to.
    pub stanza: Option<String>,
    pub source: Option<String>,
    pub sourcetype: Option<String>,
    pub index: Option<String>,
    pub host: Option<String>,
    pub done: bool,
    pub unbroken: bool,
}

impl Record {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: Timestamp) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn with_stanza(mut self, stanza: impl Into<String>) -> Self {
        self.stanza = Some(stanza.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_sourcetype(mut self, sourcetype: impl Into<String>) -> Self {
        self.sourcetype = Some(sourcetype.into());
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    #[must_use]
    pub fn with_unbroken(mut self, unbroken: bool) -> Self {
        self.unbroken = unbroken;
        self
    }

    /// Check that the record may be serialized.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRequiredField`] when `data` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(ModelError::MissingRequiredField { field: "data" });
        }
        Ok(())
    }

    pub fn stanza(&self) -> Option<&str> {
        non_empty(self.stanza.as_deref())
    }

    pub fn source(&self) -> Option<&str> {
        non_empty(self.source.as_deref())
    }

    pub fn sourcetype(&self) -> Option<&str> {
        non_empty(self.sourcetype.as_deref())
    }

    pub fn index(&self) -> Option<&str> {
        non_empty(self.index.as_deref())
    }

    pub fn host(&self) -> Option<&str> {
        non_empty(self.host.as_deref())
    }
}

/// Returns the value when present and non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_is_invalid() {
        let err = Record::default().validate().unwrap_err();
        assert_eq!(err, ModelError::MissingRequiredField { field: "data" });
    }

    #[test]
    fn record_with_data_is_valid() {
        assert!(Record::new("hello").validate().is_ok());
    }

    #[test]
    fn empty_overrides_read_as_absent() {
        let record = Record::new("x").with_host("").with_index("main");
        assert_eq!(record.host(), None);
        assert_eq!(record.index(), Some("main"));
        assert_eq!(record.source(), None);
    }

    #[test]
    fn builders_set_flags() {
        let record = Record::new("x").with_done(true).with_unbroken(true);
        assert!(record.done);
        assert!(record.unbroken);
    }
}
