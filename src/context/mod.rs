//! The `ViewContext` document root.
//!
//! A context is read from XML text with [`ViewContext::from_str`] and written
//! back with [`ViewContext::to_xml`] or [`ViewContext::dumps`]:
//!
//! ```rust
//! use wmc::ViewContext;
//!
//! let xml = r#"<ViewContext xmlns="http://www.opengis.net/context" version="1.1.0" id="demo">
//!     <General><Title>Demo</Title></General>
//! </ViewContext>"#;
//!
//! let mut context = ViewContext::from_str(xml).unwrap();
//! assert_eq!(context.general.title.as_deref(), Some("Demo"));
//!
//! context.general.abstract_ = Some("Edited".to_string());
//! let out = context.dumps().unwrap();
//! assert!(out.contains("<Abstract>Edited</Abstract>"));
//! ```
//!
//! Only the root applies defaults on write: a context without `version` or
//! `id` gets [`DEFAULT_VERSION`] and [`DEFAULT_ID`]. Every nested entity
//! writes exactly the fields it holds.

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::general::General;
use crate::layer::Layer;
use crate::xml::config::WriterConfig;
use crate::xml::deserialize::FromElement;
use crate::xml::errors::WmcError;
use crate::xml::serialize::ToElement;
use crate::xml::tree::Element;

/// Version written when a context carries none.
pub const DEFAULT_VERSION: &str = "1.1.0";

/// Identifier written when a context carries none.
pub const DEFAULT_ID: &str = "wmc-context";

/// A Web Map Context document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewContext {
    pub id: Option<String>,
    pub version: Option<String>,
    pub general: General,
    /// Layers in drawing order, bottom first.
    pub layers: Vec<Layer>,
}

impl ViewContext {
    /// An empty context with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Parse a context from XML text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(xml: &str) -> Result<Self, WmcError> {
        let root = Element::parse(xml).map_err(|e| WmcError::from(e).while_parsing("XML"))?;
        Self::from_root(&root)
    }

    /// Build a context from an already-parsed document element.
    pub fn from_root(root: &Element) -> Result<Self, WmcError> {
        let context = ViewContext::from_element(root)
            .map_err(|e| WmcError::from(e).while_parsing("ViewContext"))?;
        debug!(
            "Parsed context {:?} with {} layer(s)",
            context.id,
            context.layers.len()
        );
        Ok(context)
    }

    /// Version that will be written, after defaulting.
    pub fn effective_version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// Identifier that will be written, after defaulting.
    pub fn effective_id(&self) -> &str {
        self.id.as_deref().unwrap_or(DEFAULT_ID)
    }

    /// Serialize with the given writer settings.
    pub fn to_xml(&self, config: &WriterConfig) -> Result<String, WmcError> {
        Ok(self.to_element().to_xml(config)?)
    }

    /// Serialize with default writer settings.
    pub fn dumps(&self) -> Result<String, WmcError> {
        self.to_xml(&WriterConfig::default())
    }

    /// Find a layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Find a layer by name, mutably.
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.name == name)
    }
}

impl FromStr for ViewContext {
    type Err = WmcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewContext::from_str(s)
    }
}
