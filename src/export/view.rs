//! A map view held entirely in memory.

use serde::{Deserialize, Serialize};

use crate::export::{MapView, MapViewError};
use crate::xml::tree::Element;

/// One layer of a [`StaticMapView`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticLayer {
    pub name: String,
    pub title: String,
    pub hidden: bool,
    /// Style elements as the WMS advertises them.
    pub styles: Vec<Element>,
}

impl StaticLayer {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// A [`MapView`] described by plain values, e.g. loaded from JSON or TOML.
///
/// Unset optional fields are reported as [`MapViewError::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticMapView {
    pub id: Option<String>,
    pub size: (u32, u32),
    pub srs: Option<String>,
    pub bounds: [f64; 4],
    pub url: Option<String>,
    pub format: Option<String>,
    /// Layers, bottom first.
    pub layers: Vec<StaticLayer>,
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, MapViewError> {
    value.map(str::to_string).ok_or(MapViewError::Missing(field))
}

impl MapView for StaticMapView {
    fn id(&self) -> Result<String, MapViewError> {
        required(self.id.as_deref(), "id")
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn srs(&self) -> Result<String, MapViewError> {
        required(self.srs.as_deref(), "srs")
    }

    fn bounds(&self) -> [f64; 4] {
        self.bounds
    }

    fn layer_names(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.name.clone()).collect()
    }

    fn layer_titles(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.title.clone()).collect()
    }

    fn is_visible(&self, name: &str) -> bool {
        self.layers.iter().any(|l| l.name == name && !l.hidden)
    }

    fn layer_styles(&self, title: &str) -> Vec<Element> {
        self.layers
            .iter()
            .find(|l| l.title == title)
            .map(|l| l.styles.clone())
            .unwrap_or_default()
    }

    fn url(&self) -> Result<String, MapViewError> {
        required(self.url.as_deref(), "url")
    }

    fn format(&self) -> Result<String, MapViewError> {
        required(self.format.as_deref(), "format")
    }
}
