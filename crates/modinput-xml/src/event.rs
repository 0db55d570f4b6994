//! `<event>` rendering for records.

use std::borrow::Cow;
use std::io::Write;

use modinput_model::{Record, Timestamp};
use quick_xml::Writer;

use crate::common::XmlFragment;
use crate::error::Result;
use crate::fields::{FieldRule, Placement, flag, text, write_fields};

pub const EVENT_TAG: &str = "event";

const EVENT_FIELDS: &[FieldRule<Record>] = &[
    FieldRule {
        name: "stanza",
        placement: Placement::Attribute,
        value: event_stanza,
    },
    FieldRule {
        name: "unbroken",
        placement: Placement::Attribute,
        value: event_unbroken,
    },
    FieldRule {
        name: "time",
        placement: Placement::Element,
        value: event_time,
    },
    FieldRule {
        name: "data",
        placement: Placement::Element,
        value: event_data,
    },
    FieldRule {
        name: "index",
        placement: Placement::Element,
        value: event_index,
    },
    FieldRule {
        name: "source",
        placement: Placement::Element,
        value: event_source,
    },
    FieldRule {
        name: "sourcetype",
        placement: Placement::Element,
        value: event_sourcetype,
    },
    FieldRule {
        name: "host",
        placement: Placement::Element,
        value: event_host,
    },
    FieldRule {
        name: "done",
        placement: Placement::Marker,
        value: event_done,
    },
];

fn event_stanza(record: &Record) -> Option<Cow<'_, str>> {
    text(record.stanza())
}

fn event_unbroken(record: &Record) -> Option<Cow<'_, str>> {
    flag(record.unbroken, "1")
}

fn event_time(record: &Record) -> Option<Cow<'_, str>> {
    Some(match &record.time {
        Some(time) => Cow::Borrowed(time.as_str()),
        None => Cow::Owned(Timestamp::now().to_string()),
    })
}

fn event_data(record: &Record) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(record.data.as_str()))
}

fn event_index(record: &Record) -> Option<Cow<'_, str>> {
    text(record.index())
}

fn event_source(record: &Record) -> Option<Cow<'_, str>> {
    text(record.source())
}

fn event_sourcetype(record: &Record) -> Option<Cow<'_, str>> {
    text(record.sourcetype())
}

fn event_host(record: &Record) -> Option<Cow<'_, str>> {
    text(record.host())
}

fn event_done(record: &Record) -> Option<Cow<'_, str>> {
    flag(record.done, "")
}

impl XmlFragment for Record {
    /// Write the record as `<event>`.
    ///
    /// # Errors
    ///
    /// Fails with a `MissingRequiredField` model error, before writing
    /// anything, when the record has no data.
    fn write_xml<W: Write>(&self, xml: &mut Writer<W>) -> Result<()> {
        self.validate()?;
        write_fields(xml, EVENT_TAG, self, EVENT_FIELDS)
    }
}
