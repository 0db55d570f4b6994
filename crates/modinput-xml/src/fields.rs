//! Ordered field-to-XML tables.
//!
//! Each renderable type lists its fields once, in output order, with a rule
//! saying where the value goes. A rule whose accessor returns `None` is
//! skipped, which is how empty and false fields stay out of the output.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::common::write_text_element;
use crate::error::Result;

/// Where a field value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Attribute on the root element.
    Attribute,
    /// Child element holding the value as text.
    Element,
    /// Empty child element; only presence matters.
    Marker,
}

pub(crate) struct FieldRule<T> {
    pub name: &'static str,
    pub placement: Placement,
    pub value: fn(&T) -> Option<Cow<'_, str>>,
}

/// Write `subject` as `<tag>` using `rules`.
///
/// Attributes are collected before any child is written, so rule order only
/// matters among rules of the same kind.
pub(crate) fn write_fields<T, W: Write>(
    xml: &mut Writer<W>,
    tag: &str,
    subject: &T,
    rules: &[FieldRule<T>],
) -> Result<()> {
    let mut root = BytesStart::new(tag);
    let mut children = Vec::with_capacity(rules.len());
    for rule in rules {
        let Some(value) = (rule.value)(subject) else {
            continue;
        };
        match rule.placement {
            Placement::Attribute => root.push_attribute((rule.name, value.as_ref())),
            Placement::Element | Placement::Marker => children.push((rule, value)),
        }
    }

    if children.is_empty() {
        xml.write_event(Event::Empty(root))?;
        return Ok(());
    }

    xml.write_event(Event::Start(root))?;
    for (rule, value) in children {
        match rule.placement {
            Placement::Marker => xml.write_event(Event::Empty(BytesStart::new(rule.name)))?,
            _ => write_text_element(xml, rule.name, &value)?,
        }
    }
    xml.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Emit `value` when it is set.
pub(crate) fn text(value: Option<&str>) -> Option<Cow<'_, str>> {
    value.map(Cow::Borrowed)
}

/// Emit `text` when `flag` is set.
pub(crate) fn flag(flag: bool, text: &'static str) -> Option<Cow<'static, str>> {
    flag.then_some(Cow::Borrowed(text))
}
