//! Shared writer helpers and the fragment trait.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Result, XmlError};

/// Root element of the records channel envelope.
pub const STREAM_TAG: &str = "stream";

/// Opening tag of the records channel envelope.
pub const STREAM_OPEN: &str = "<stream>";

/// Closing tag a finite consumer appends before parsing a snapshot.
pub const STREAM_CLOSE: &str = "</stream>";

/// A value that renders as a single XML element with no declaration.
pub trait XmlFragment {
    /// Write the element into `xml`.
    ///
    /// Implementations validate before writing, so a failed call leaves
    /// `xml` untouched.
    fn write_xml<W: Write>(&self, xml: &mut Writer<W>) -> Result<()>;

    fn to_xml_bytes(&self) -> Result<Vec<u8>> {
        let mut xml = Writer::new(Vec::new());
        self.write_xml(&mut xml)?;
        Ok(xml.into_inner())
    }

    fn to_xml_string(&self) -> Result<String> {
        let bytes = self.to_xml_bytes()?;
        String::from_utf8(bytes)
            .map_err(|err| XmlError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Render the document a child returns when it rejects a configuration.
pub fn render_error_document(message: &str) -> Result<String> {
    let mut xml = Writer::new(Vec::new());
    xml.write_event(Event::Start(BytesStart::new("error")))?;
    write_text_element(&mut xml, "message", message)?;
    xml.write_event(Event::End(BytesEnd::new("error")))?;
    String::from_utf8(xml.into_inner())
        .map_err(|err| XmlError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_document_wraps_message() {
        let doc = render_error_document("interval must be > 0").unwrap();
        assert_eq!(
            doc,
            "<error><message>interval must be &gt; 0</message></error>"
        );
    }
}
