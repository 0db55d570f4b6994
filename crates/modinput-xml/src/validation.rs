//! Parsing of validation requests sent by the host.
//!
//! ```text
//! <items>
//!   <server_host>myHost</server_host>
//!   <server_uri>https://127.0.0.1:8089</server_uri>
//!   <session_key>123102983109283019283</session_key>
//!   <checkpoint_dir>/opt/splunk/var/lib/splunk/modinputs</checkpoint_dir>
//!   <item name="myScheme">
//!     <param name="param1">value1</param>
//!     <param_list name="param2">
//!       <value>value2</value>
//!       <value>value3</value>
//!     </param_list>
//!   </item>
//! </items>
//! ```
//!
//! Every child of `<items>` other than `<item>` becomes a metadata entry.
//! Only the first `<item>` is read; its `name` becomes `metadata["name"]`.
//! Parsing stops at the first error.

use std::collections::BTreeMap;
use std::io::BufRead;

use modinput_model::{ParamValue, ValidationRequest};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::error::{Result, XmlError};

const ITEMS: &[u8] = b"items";
const ITEM: &[u8] = b"item";
const PARAM: &[u8] = b"param";
const PARAM_LIST: &[u8] = b"param_list";
const VALUE: &[u8] = b"value";

/// Parse a validation request from a string.
pub fn parse_validation_request(xml: &str) -> Result<ValidationRequest> {
    parse_validation_request_from_reader(xml.as_bytes())
}

/// Parse a validation request from any buffered reader.
pub fn parse_validation_request_from_reader<R: BufRead>(source: R) -> Result<ValidationRequest> {
    let mut parser = Parser::new(source);
    let request = parser.request()?;
    tracing::debug!(
        stanza = request.name().unwrap_or_default(),
        metadata = request.metadata.len(),
        parameters = request.parameters.len(),
        "parsed validation request"
    );
    Ok(request)
}

struct Parser<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> Parser<R> {
    fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
        }
    }

    fn next(&mut self) -> Result<Event<'static>> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf)?;
        Ok(event.into_owned())
    }

    fn request(&mut self) -> Result<ValidationRequest> {
        let root_is_empty = loop {
            match self.next()? {
                Event::Start(start) if start.name().as_ref() == ITEMS => break false,
                Event::Empty(start) if start.name().as_ref() == ITEMS => break true,
                Event::Start(start) | Event::Empty(start) => {
                    return Err(XmlError::invalid(format!(
                        "expected <items> root, found <{}>",
                        tag_name(&start)
                    )));
                }
                Event::Eof => return Err(XmlError::invalid("missing <items> root")),
                _ => {}
            }
        };

        let mut request = ValidationRequest::default();
        let mut seen_item = false;
        if !root_is_empty {
            loop {
                match self.next()? {
                    Event::Start(start) if start.name().as_ref() == ITEM => {
                        if seen_item {
                            self.skip(ITEM)?;
                        } else {
                            seen_item = true;
                            self.item(&start, false, &mut request)?;
                        }
                    }
                    Event::Empty(start) if start.name().as_ref() == ITEM => {
                        if !seen_item {
                            seen_item = true;
                            self.item(&start, true, &mut request)?;
                        }
                    }
                    Event::Start(start) => {
                        let key = tag_name(&start);
                        let value = self.text(start.name().as_ref())?;
                        request.metadata.entry(key).or_insert(value);
                    }
                    Event::Empty(start) => {
                        request.metadata.entry(tag_name(&start)).or_default();
                    }
                    Event::End(_) => break,
                    Event::Eof => return Err(eof(ITEMS)),
                    _ => {}
                }
            }
        }

        if !seen_item {
            return Err(XmlError::invalid("missing <item> element"));
        }
        Ok(request)
    }

    fn item(
        &mut self,
        start: &BytesStart<'_>,
        is_empty: bool,
        request: &mut ValidationRequest,
    ) -> Result<()> {
        let name = required_name(start)?;
        request
            .metadata
            .insert(ValidationRequest::NAME_KEY.to_string(), name);
        if is_empty {
            return Ok(());
        }

        let mut parameters = BTreeMap::new();
        loop {
            match self.next()? {
                Event::Start(start) if start.name().as_ref() == PARAM => {
                    let name = required_name(&start)?;
                    let value = self.text(PARAM)?;
                    parameters.insert(name, ParamValue::Single(value));
                }
                Event::Empty(start) if start.name().as_ref() == PARAM => {
                    parameters.insert(required_name(&start)?, ParamValue::Single(String::new()));
                }
                Event::Start(start) if start.name().as_ref() == PARAM_LIST => {
                    let name = required_name(&start)?;
                    let values = self.values()?;
                    parameters.insert(name, ParamValue::List(values));
                }
                Event::Empty(start) if start.name().as_ref() == PARAM_LIST => {
                    parameters.insert(required_name(&start)?, ParamValue::List(Vec::new()));
                }
                Event::Start(start) => self.skip(start.name().as_ref())?,
                Event::End(_) => break,
                Event::Eof => return Err(eof(ITEM)),
                _ => {}
            }
        }
        request.parameters = parameters;
        Ok(())
    }

    /// Read the `<value>` children of an open `<param_list>`.
    fn values(&mut self) -> Result<Vec<String>> {
        let mut values = Vec::new();
        loop {
            match self.next()? {
                Event::Start(start) if start.name().as_ref() == VALUE => {
                    values.push(self.text(VALUE)?);
                }
                Event::Empty(start) if start.name().as_ref() == VALUE => values.push(String::new()),
                Event::Start(start) => self.skip(start.name().as_ref())?,
                Event::End(_) => return Ok(values),
                Event::Eof => return Err(eof(PARAM_LIST)),
                _ => {}
            }
        }
    }

    /// Collect the text content of an open element, including text in nested
    /// elements, up to its end tag.
    fn text(&mut self, element: &[u8]) -> Result<String> {
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            match self.next()? {
                Event::Text(content) => {
                    text.push_str(&content.decode().map_err(quick_xml::Error::from)?);
                }
                Event::CData(content) => {
                    text.push_str(&content.decode().map_err(quick_xml::Error::from)?);
                }
                Event::GeneralRef(reference) => push_reference(&mut text, &reference)?,
                Event::Start(_) => depth += 1,
                Event::End(_) if depth == 0 => return Ok(text),
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(eof(element)),
                _ => {}
            }
        }
    }

    /// Consume an open element and everything inside it.
    fn skip(&mut self, element: &[u8]) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.next()? {
                Event::Start(_) => depth += 1,
                Event::End(_) if depth == 0 => return Ok(()),
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(eof(element)),
                _ => {}
            }
        }
    }
}

fn push_reference(text: &mut String, reference: &BytesRef<'_>) -> Result<()> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(quick_xml::Error::from)?
    {
        text.push(ch);
        return Ok(());
    }
    let name = reference.decode().map_err(quick_xml::Error::from)?;
    match resolve_predefined_entity(&name) {
        Some(value) => {
            text.push_str(value);
            Ok(())
        }
        None => Err(XmlError::invalid(format!("unknown entity &{name};"))),
    }
}

fn required_name(start: &BytesStart<'_>) -> Result<String> {
    let attribute = start
        .try_get_attribute("name")
        .map_err(quick_xml::Error::from)?
        .ok_or_else(|| {
            XmlError::invalid(format!("<{}> is missing its name attribute", tag_name(start)))
        })?;
    let value = attribute
        .unescape_value()
        .map_err(quick_xml::Error::from)?;
    Ok(value.into_owned())
}

fn tag_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn eof(element: &[u8]) -> XmlError {
    XmlError::UnexpectedEof {
        element: String::from_utf8_lossy(element).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_references_are_resolved() {
        let request = parse_validation_request(
            r#"<items><server_uri>a&amp;b&#33;</server_uri><item name="s&lt;1"><param name="p">&quot;x&quot;</param></item></items>"#,
        )
        .unwrap();
        assert_eq!(request.metadata_value("server_uri"), Some("a&b!"));
        assert_eq!(request.name(), Some("s<1"));
        assert_eq!(
            request.parameter("p"),
            Some(&ParamValue::Single("\"x\"".to_string()))
        );
    }

    #[test]
    fn cdata_is_kept_verbatim() {
        let request = parse_validation_request(
            r#"<items><item name="s"><param name="p"><![CDATA[<raw>]]></param></item></items>"#,
        )
        .unwrap();
        assert_eq!(
            request.parameter("p").and_then(ParamValue::as_single),
            Some("<raw>")
        );
    }

    #[test]
    fn empty_elements_become_empty_values() {
        let request = parse_validation_request(
            r#"<items><session_key/><item name="s"><param name="p"/><param_list name="l"/></item></items>"#,
        )
        .unwrap();
        assert_eq!(request.metadata_value("session_key"), Some(""));
        assert_eq!(request.parameter("p"), Some(&ParamValue::Single(String::new())));
        assert_eq!(request.parameter("l"), Some(&ParamValue::List(Vec::new())));
    }

    #[test]
    fn unknown_item_children_are_skipped() {
        let request = parse_validation_request(
            r#"<items><item name="s"><note><b>x</b></note><param name="p">v</param></item></items>"#,
        )
        .unwrap();
        assert_eq!(request.parameters.len(), 1);
    }

    #[test]
    fn param_without_name_is_invalid() {
        let err =
            parse_validation_request(r#"<items><item name="s"><param>v</param></item></items>"#)
                .unwrap_err();
        assert!(matches!(err, XmlError::InvalidDocument { .. }));
    }
}
