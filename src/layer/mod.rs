//! Map layers advertised by a context document.
//!
//! A layer binds a named dataset on a remote service (see [`Server`]) together
//! with how it should be requested: reference systems, output formats, styles
//! and dimension values. The order of layers in a context is the drawing
//! order, bottom first.

pub mod dimension;
pub mod style;

use serde::{Deserialize, Serialize};

pub use dimension::Dimension;
pub use style::{Format, Style};

use crate::url::{SIMPLE_LINK, UrlType};

/// Service binding of a layer.
///
/// Mandatory in a source document, as is its `OnlineResource` child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Service type, e.g. `OGC:WMS`.
    pub service: Option<String>,
    pub version: Option<String>,
    pub title: Option<String>,
    /// The `xlink:href` of the `OnlineResource` child.
    pub url: Option<String>,
    /// The `xlink:type` of the `OnlineResource` child.
    pub link_type: Option<String>,
}

impl Server {
    pub fn new(
        service: impl Into<String>,
        version: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            service: Some(service.into()),
            version: Some(version.into()),
            title: None,
            url: Some(url.into()),
            link_type: Some(SIMPLE_LINK.to_string()),
        }
    }
}

/// One layer of the context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// `"0"`/`"1"` flag, kept as written.
    pub queryable: Option<String>,
    /// `"0"`/`"1"` flag, kept as written.
    pub hidden: Option<String>,
    pub server: Server,
    pub name: String,
    pub title: String,
    pub abstract_: Option<String>,
    pub data_url: Option<UrlType>,
    pub metadata_url: Option<UrlType>,
    /// Text of `sld:MinScaleDenominator`.
    pub min_scale: Option<String>,
    /// Text of `sld:MaxScaleDenominator`.
    pub max_scale: Option<String>,
    pub srs: Vec<String>,
    pub formats: Vec<Format>,
    pub styles: Vec<Style>,
    pub dimensions: Vec<Dimension>,
}

impl Layer {
    pub fn new(name: impl Into<String>, title: impl Into<String>, server: Server) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            server,
            ..Self::default()
        }
    }

    /// Whether the `hidden` flag is set to a true value.
    pub fn is_hidden(&self) -> bool {
        matches!(self.hidden.as_deref(), Some("1") | Some("true"))
    }

    /// Whether the `queryable` flag is set to a true value.
    pub fn is_queryable(&self) -> bool {
        matches!(self.queryable.as_deref(), Some("1") | Some("true"))
    }

    /// The format flagged as current, if any.
    pub fn current_format(&self) -> Option<&Format> {
        self.formats.iter().find(|f| f.is_current())
    }

    /// The style flagged as current, if any.
    pub fn current_style(&self) -> Option<&Style> {
        self.styles.iter().find(|s| s.is_current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let mut layer = Layer::new("roads", "Roads", Server::default());
        assert!(!layer.is_hidden());
        assert!(!layer.is_queryable());

        layer.hidden = Some("1".to_string());
        layer.queryable = Some("true".to_string());
        assert!(layer.is_hidden());
        assert!(layer.is_queryable());
    }

    #[test]
    fn test_current_selection() {
        let mut layer = Layer::new("roads", "Roads", Server::default());
        layer.formats = vec![
            Format::new("image/gif"),
            Format::new("image/png").current(),
        ];
        layer.styles = vec![Style::new("default", "Default")];

        assert_eq!(
            layer.current_format().and_then(|f| f.name.as_deref()),
            Some("image/png")
        );
        assert!(layer.current_style().is_none());
    }
}
