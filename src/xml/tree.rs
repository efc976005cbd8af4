//! A small namespace-aware element tree.
//!
//! Parsing produces a tree of [`Element`] values (see
//! [`crate::xml::quick::de::read_tree`]) and serialization consumes one (see
//! [`crate::xml::quick::ser::write_tree`]). The tree owns all of its data; no
//! reader or writer state survives construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::namespace::Namespace;
use crate::xml::config::WriterConfig;
use crate::xml::deserialize::DeserializeError;
use crate::xml::quick::{de, ser};
use crate::xml::serialize::SerializeError;

/// A namespace-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QName {
    /// Namespace URI, or `None` for an unqualified name.
    pub namespace: Option<String>,
    /// Local part of the name.
    pub local: String,
}

impl QName {
    /// A name qualified by one of the WMC namespaces.
    pub fn new(namespace: Namespace, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.uri().to_string()),
            local: local.into(),
        }
    }

    /// A name qualified by an arbitrary namespace URI.
    pub fn with_uri(uri: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(uri.into()),
            local: local.into(),
        }
    }

    /// An unqualified name.
    pub fn unqualified(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    /// Checks namespace and local name together.
    pub fn is(&self, namespace: Namespace, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace.uri())
    }

    fn matches(&self, namespace: Option<Namespace>, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == namespace.map(|ns| ns.uri())
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(uri) => write!(f, "{{{}}}{}", uri, self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

/// An attribute and its unescaped value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

/// An XML element with ordered attributes and children.
///
/// Mixed content is not modelled: all character data directly inside the
/// element is gathered into `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Create an empty element in the WMC namespace.
    pub fn wmc(local: &str) -> Self {
        Self::new(QName::new(Namespace::Context, local))
    }

    /// Parse XML text into a tree rooted at the document element.
    pub fn parse(xml: &str) -> Result<Self, DeserializeError> {
        de::read_tree(xml)
    }

    /// Serialize this element as a document.
    pub fn to_xml(&self, config: &WriterConfig) -> Result<String, SerializeError> {
        ser::write_tree(self, config)
    }

    /// Local name of the element.
    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    /// Character content, if any was present.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get an attribute by namespace and local name.
    pub fn attribute(&self, namespace: Option<Namespace>, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.matches(namespace, local))
            .map(|a| a.value.as_str())
    }

    /// Get an unqualified attribute.
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attribute(None, local)
    }

    /// Get an unqualified attribute as an owned String.
    pub fn attr_string(&self, local: &str) -> Option<String> {
        self.attr(local).map(str::to_string)
    }

    /// Set an attribute, replacing an existing one with the same name.
    pub fn set_attribute(&mut self, name: QName, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
        self
    }

    /// Set an unqualified attribute.
    pub fn set_attr(&mut self, local: &str, value: impl Into<String>) -> &mut Self {
        self.set_attribute(QName::unqualified(local), value)
    }

    /// Set an unqualified attribute only if a value is present.
    pub fn set_opt_attr(&mut self, local: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.set_attr(local, v);
        }
        self
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: QName, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Element::set_attr`].
    pub fn with_attr(mut self, local: &str, value: impl Into<String>) -> Self {
        self.set_attr(local, value);
        self
    }

    /// Builder form for character content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder form of [`Element::push`].
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Append a WMC text element (`<local>text</local>`) if `text` is present.
    pub fn push_opt_text(&mut self, local: &str, text: Option<&str>) -> &mut Self {
        if let Some(t) = text {
            self.push(Element::wmc(local).with_text(t));
        }
        self
    }

    /// First child with the given name.
    pub fn find(&self, namespace: Namespace, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name.is(namespace, local))
    }

    /// All children with the given name, in document order.
    pub fn find_all<'a>(
        &'a self,
        namespace: Namespace,
        local: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter(move |c| c.name.is(namespace, local))
    }

    /// Follow a path of child names, taking the first match at each step.
    pub fn find_path(&self, path: &[(Namespace, &str)]) -> Option<&Element> {
        path.iter()
            .try_fold(self, |current, (ns, local)| current.find(*ns, local))
    }

    /// All elements reachable through a path, in document order.
    ///
    /// Every step may match several elements, so `LayerList/Layer` collects
    /// the layers of all `LayerList` children.
    pub fn find_all_path(&self, path: &[(Namespace, &str)]) -> Vec<&Element> {
        path.iter().fold(vec![self], |current, (ns, local)| {
            current
                .into_iter()
                .flat_map(|el| el.children.iter().filter(|c| c.name.is(*ns, local)))
                .collect()
        })
    }

    /// Text of the first child with the given name.
    ///
    /// A present child without character content yields `Some("")`.
    pub fn child_text(&self, namespace: Namespace, local: &str) -> Option<String> {
        self.find(namespace, local)
            .map(|c| c.text().unwrap_or_default().to_string())
    }

    /// Visit this element and all descendants depth-first, mutably.
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.for_each_mut(f);
        }
    }

    /// Move this element and every descendant into `namespace`, keeping
    /// local names. Attributes are left untouched.
    pub fn rename_namespace(&mut self, namespace: Namespace) {
        self.for_each_mut(&mut |el| {
            el.name.namespace = Some(namespace.uri().to_string());
        });
    }
}
