//! Serialization helpers for quick-xml.
//!
//! Provides:
//! - `AttrList`: attribute builder that owns formatted values
//! - `XmlEmitter`: writes an [`Element`] tree, declaring namespaces as needed
//! - `write_tree`: one-call document serialization

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::namespace::Namespace;
use crate::xml::config::WriterConfig;
use crate::xml::serialize::SerializeError;
use crate::xml::tree::Element;

/// A list of attributes with owned, already-prefixed names.
///
/// This avoids the lifetime issues with quick-xml's `BytesStart` by owning
/// every formatted string until the element is written.
#[derive(Debug, Default)]
pub struct AttrList {
    /// Stored as (key, value) pairs where both are owned strings.
    attrs: Vec<(String, String)>,
}

impl AttrList {
    /// Create a new empty attribute list.
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Add a string attribute.
    pub fn add(&mut self, key: &str, value: impl AsRef<str>) -> &mut Self {
        self.attrs
            .push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Add a namespace declaration, `xmlns` or `xmlns:prefix`.
    pub fn add_xmlns(&mut self, prefix: Option<&str>, uri: &str) -> &mut Self {
        match prefix {
            Some(p) => self.add(&format!("xmlns:{}", p), uri),
            None => self.add("xmlns", uri),
        }
    }

    /// Apply all attributes to a BytesStart element.
    pub fn apply_to(&self, start: &mut BytesStart<'_>) {
        for (key, value) in &self.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }
    }
}

/// A namespace binding in scope. `prefix: None` is the default namespace and
/// an empty `uri` undeclares it.
#[derive(Debug, Clone)]
struct Binding {
    prefix: Option<String>,
    uri: String,
}

/// Writes [`Element`] trees through a quick-xml `Writer`.
///
/// Namespace URIs are mapped back to prefixes while writing. A namespace that
/// is not yet in scope gets declared on the element that first needs it; the
/// WMC namespace is preferably bound as the default namespace.
pub struct XmlEmitter<'a, W: Write> {
    writer: &'a mut Writer<W>,
    /// One frame of bindings per open element.
    scopes: Vec<Vec<Binding>>,
    generated: usize,
}

impl<'a, W: Write> XmlEmitter<'a, W> {
    /// Create a new emitter wrapping a writer.
    pub fn new(writer: &'a mut Writer<W>) -> Self {
        Self {
            writer,
            scopes: Vec::new(),
            generated: 0,
        }
    }

    /// Write an XML declaration.
    pub fn xml_decl(&mut self) -> Result<(), SerializeError> {
        let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
        self.writer.write_event(Event::Decl(decl))?;
        Ok(())
    }

    /// Write `root` and its subtree, pre-declaring `declared` on the root.
    pub fn document(
        &mut self,
        root: &Element,
        declared: &[Namespace],
    ) -> Result<(), SerializeError> {
        let mut frame = Vec::new();
        for ns in declared {
            let prefix = if ns.is_default() {
                None
            } else {
                Some(ns.prefix().to_string())
            };
            frame.push(Binding {
                prefix,
                uri: ns.uri().to_string(),
            });
        }
        self.element_with_frame(root, frame)
    }

    /// Write an element and its subtree.
    pub fn element(&mut self, element: &Element) -> Result<(), SerializeError> {
        self.element_with_frame(element, Vec::new())
    }

    fn element_with_frame(
        &mut self,
        element: &Element,
        mut frame: Vec<Binding>,
    ) -> Result<(), SerializeError> {
        let tag = self.element_name(element, &mut frame);

        let mut names = Vec::with_capacity(element.attributes.len());
        for attr in &element.attributes {
            names.push(match &attr.name.namespace {
                Some(uri) => {
                    let prefix = self.attribute_prefix(uri, &mut frame);
                    format!("{}:{}", prefix, attr.name.local)
                }
                None => attr.name.local.clone(),
            });
        }

        let mut attrs = AttrList::new();
        for binding in &frame {
            attrs.add_xmlns(binding.prefix.as_deref(), &binding.uri);
        }
        for (name, attr) in names.iter().zip(&element.attributes) {
            attrs.add(name, &attr.value);
        }

        let mut start = BytesStart::new(tag.clone());
        attrs.apply_to(&mut start);

        if element.children.is_empty() && element.text.is_none() {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        self.writer.write_event(Event::Start(start))?;
        self.scopes.push(frame);
        if let Some(text) = &element.text {
            self.writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &element.children {
            self.element(child)?;
        }
        self.scopes.pop();
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Qualified tag for an element, declaring its namespace if needed.
    fn element_name(&mut self, element: &Element, frame: &mut Vec<Binding>) -> String {
        let local = &element.name.local;
        match &element.name.namespace {
            None => {
                if self.resolve(None, frame).is_some_and(|uri| !uri.is_empty()) {
                    frame.push(Binding {
                        prefix: None,
                        uri: String::new(),
                    });
                }
                local.clone()
            }
            Some(uri) => match self.lookup(uri, true, frame) {
                Some(None) => local.clone(),
                Some(Some(prefix)) => format!("{}:{}", prefix, local),
                None => {
                    let default_free = self
                        .resolve(None, frame)
                        .is_none_or(|bound| bound.is_empty());
                    let known = Namespace::from_uri(uri);
                    if known.is_some_and(|ns| ns.is_default()) && default_free {
                        frame.push(Binding {
                            prefix: None,
                            uri: uri.clone(),
                        });
                        local.clone()
                    } else {
                        let prefix = self.fresh_prefix(known, frame);
                        frame.push(Binding {
                            prefix: Some(prefix.clone()),
                            uri: uri.clone(),
                        });
                        format!("{}:{}", prefix, local)
                    }
                }
            },
        }
    }

    /// Prefix for a namespaced attribute. The default namespace does not
    /// apply to attributes, so a named prefix is always used.
    fn attribute_prefix(&mut self, uri: &str, frame: &mut Vec<Binding>) -> String {
        if let Some(Some(prefix)) = self.lookup(uri, false, frame) {
            return prefix;
        }
        let prefix = self.fresh_prefix(Namespace::from_uri(uri), frame);
        frame.push(Binding {
            prefix: Some(prefix.clone()),
            uri: uri.to_string(),
        });
        prefix
    }

    /// The conventional prefix of a known namespace when it is free,
    /// otherwise a generated `nsN`.
    fn fresh_prefix(&mut self, known: Option<Namespace>, frame: &[Binding]) -> String {
        if let Some(ns) = known {
            let prefix = ns.prefix();
            if self.resolve(Some(prefix), frame).is_none() {
                return prefix.to_string();
            }
        }
        loop {
            let candidate = format!("ns{}", self.generated);
            self.generated += 1;
            if self.resolve(Some(&candidate), frame).is_none() {
                return candidate;
            }
        }
    }

    fn bindings<'b>(&'b self, frame: &'b [Binding]) -> impl Iterator<Item = &'b Binding> + 'b {
        frame
            .iter()
            .rev()
            .chain(self.scopes.iter().rev().flat_map(|scope| scope.iter().rev()))
    }

    /// URI currently bound to `prefix`.
    fn resolve<'b>(&'b self, prefix: Option<&str>, frame: &'b [Binding]) -> Option<&'b str> {
        self.bindings(frame)
            .find(|b| b.prefix.as_deref() == prefix)
            .map(|b| b.uri.as_str())
    }

    /// Prefix currently mapping to `uri`, skipping shadowed bindings.
    fn lookup(&self, uri: &str, allow_default: bool, frame: &[Binding]) -> Option<Option<String>> {
        self.bindings(frame)
            .filter(|b| b.uri == uri && (allow_default || b.prefix.is_some()))
            .find(|b| self.resolve(b.prefix.as_deref(), frame) == Some(uri))
            .map(|b| b.prefix.clone())
    }
}

/// Serialize an element tree as a complete document.
pub fn write_tree(root: &Element, config: &WriterConfig) -> Result<String, SerializeError> {
    let mut writer = match config.indent {
        Some(size) => Writer::new_with_indent(Vec::new(), b' ', size),
        None => Writer::new(Vec::new()),
    };

    let mut emit = XmlEmitter::new(&mut writer);
    if config.xml_declaration {
        emit.xml_decl()?;
    }
    let declared: &[Namespace] = if config.declare_namespaces {
        Namespace::DECLARED
    } else {
        &[]
    };
    emit.document(root, declared)?;

    Ok(String::from_utf8(writer.into_inner())?)
}
