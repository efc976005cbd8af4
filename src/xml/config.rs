//! Output settings for XML serialization.

use serde::{Deserialize, Serialize};

/// Controls how an element tree is written as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Spaces per nesting level, or `None` for a single line.
    pub indent: Option<usize>,
    /// Write `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub xml_declaration: bool,
    /// Declare the WMC, SLD and XLink namespaces on the root element.
    ///
    /// When disabled, each namespace is declared on the first element that
    /// uses it.
    pub declare_namespaces: bool,
}

impl WriterConfig {
    /// Single-line output without an XML declaration.
    pub fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
            declare_namespaces: true,
        }
    }

    pub fn with_declared_namespaces(mut self, declare: bool) -> Self {
        self.declare_namespaces = declare;
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
            declare_namespaces: true,
        }
    }
}
