//! Minimal element walker over `quick-xml` used by the XML-backed registries.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::MasterDataError;

/// One XML element with its attributes and accumulated text content.
#[derive(Debug, Clone, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
}

impl XmlElement {
    /// Attribute value by name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value by name, or `MissingAttribute`.
    pub fn required_attr(&self, key: &'static str) -> Result<&str, MasterDataError> {
        self.attr(key)
            .ok_or_else(|| MasterDataError::MissingAttribute {
                element: self.name.clone(),
                attribute: key,
            })
    }
}

fn xml_err(e: impl std::fmt::Display) -> MasterDataError {
    MasterDataError::Xml(e.to_string())
}

fn element_from(e: &BytesStart<'_>) -> Result<XmlElement, MasterDataError> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(xml_err)?
        .to_string();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(xml_err)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(xml_err)?
            .to_string();
        let value = attr.unescape_value().map_err(xml_err)?.into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        text: String::new(),
    })
}

/// Walk every element of `xml` in closing order.
///
/// `visit` is called when an element ends, so its text is complete and its
/// children have already been visited. The first argument holds the open
/// ancestors, outermost first.
pub fn for_each_element<F>(xml: &str, mut visit: F) -> Result<(), MasterDataError>
where
    F: FnMut(&[XmlElement], &XmlElement) -> Result<(), MasterDataError>,
{
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(element_from(e)?),
            Ok(Event::Empty(ref e)) => {
                let element = element_from(e)?;
                visit(&stack, &element)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(xml_err)?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                let raw = e.into_inner();
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&raw));
                }
            }
            Ok(Event::End(_)) => {
                if let Some(element) = stack.pop() {
                    visit(&stack, &element)?;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(MasterDataError::Xml(format!(
                    "parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(MasterDataError::Xml(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }
    Ok(())
}
