//! Deserialization helpers for quick-xml.
//!
//! Provides:
//! - `read_tree`: build an owned [`Element`] tree with resolved namespaces
//! - `element_from_start`: decode one start tag into an empty element

use std::io::BufRead;

use log::trace;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

use crate::xml::deserialize::DeserializeError;
use crate::xml::tree::{Attribute, Element, QName};

/// Parse XML text into a tree rooted at its document element.
///
/// Character data is kept exactly as written. The only exception is
/// whitespace-only text inside an element that has child elements, which is
/// indentation and is dropped. Comments, processing instructions and the
/// doctype are skipped. Text and CDATA directly inside one element are
/// concatenated.
pub fn read_tree(xml: &str) -> Result<Element, DeserializeError> {
    let mut reader = NsReader::from_str(xml);
    let mut buf = Vec::new();

    // Open elements, innermost last.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        buf.clear();
        let (resolved, event) = reader.read_resolved_event_into(&mut buf)?;
        let namespace = namespace_of(resolved)?;

        match event {
            Event::Start(e) => {
                let element = element_from_start(&reader, namespace, &e)?;
                stack.push(element);
            }
            Event::Empty(e) => {
                let element = element_from_start(&reader, namespace, &e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack.pop().ok_or_else(|| {
                    DeserializeError::Custom("Closing tag without an open element".to_string())
                })?;
                drop_indentation(&mut element);
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                append_text(&mut stack, &text);
            }
            Event::CData(e) => {
                let text = reader.decoder().decode(&e)?;
                append_text(&mut stack, &text);
            }
            Event::Eof => break,
            // Decl, PI, Comment, DocType
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(DeserializeError::UnexpectedEof);
    }
    root.ok_or(DeserializeError::EmptyDocument)
}

/// Decode the name and attributes of a start tag into an empty element.
///
/// Namespace declarations (`xmlns`, `xmlns:*`) are consumed by the reader and
/// not kept as attributes.
pub fn element_from_start<R: BufRead>(
    reader: &NsReader<R>,
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<Element, DeserializeError> {
    let local_name = start.local_name();
    let local = reader.decoder().decode(local_name.as_ref())?;
    let mut element = Element::new(QName {
        namespace,
        local: local.into_owned(),
    });

    for attr_result in start.attributes() {
        let attr = attr_result?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, local) = reader.resolve_attribute(attr.key);
        let namespace = namespace_of(resolved)?;
        let local = reader.decoder().decode(local.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push(Attribute {
            name: QName { namespace, local },
            value,
        });
    }

    Ok(element)
}

fn namespace_of(resolved: ResolveResult<'_>) -> Result<Option<String>, DeserializeError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(String::from_utf8_lossy(ns.as_ref()).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(DeserializeError::UnknownPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DeserializeError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(DeserializeError::Custom(format!(
            "Second document element <{}>",
            element.name.local
        ))),
    }
}

fn drop_indentation(element: &mut Element) {
    if !element.children.is_empty()
        && element
            .text
            .as_deref()
            .is_some_and(|t| t.chars().all(char::is_whitespace))
    {
        element.text = None;
    }
}

fn append_text(stack: &mut [Element], text: &str) {
    match stack.last_mut() {
        Some(el) => el.text.get_or_insert_with(String::new).push_str(text),
        None => trace!("Ignoring text outside the document element"),
    }
}
