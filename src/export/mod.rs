//! Building a fresh WMC document from a live map view.
//!
//! The exporter only reads from the view through [`MapView`]; nothing in this
//! module touches an existing [`crate::ViewContext`]. Two layouts exist:
//!
//! * [`MapContext`] writes one `Layer` per map layer, bottom first.
//! * [`AggregateMapContext`] writes a single `Layer` whose `Name` lists every
//!   map layer, for servers that draw them in one request.
//!
//! ```rust
//! use wmc::{StaticMapView, map_to_web_map_context};
//! use wmc::export::StaticLayer;
//!
//! let view = StaticMapView {
//!     id: Some("demo".to_string()),
//!     size: (400, 300),
//!     srs: Some("EPSG:4326".to_string()),
//!     bounds: [-180.0, -90.0, 180.0, 90.0],
//!     url: Some("http://example.com/wms".to_string()),
//!     format: Some("image/png".to_string()),
//!     layers: vec![StaticLayer::new("roads", "Roads")],
//! };
//!
//! let xml = map_to_web_map_context(&view, false).unwrap();
//! assert!(xml.contains("<Name>roads</Name>"));
//! assert!(xml.contains(r#"minx="-180""#));
//! ```

mod view;

use log::debug;
use thiserror::Error;

use crate::namespace::Namespace;
use crate::url::SIMPLE_LINK;
use crate::xml::config::WriterConfig;
use crate::xml::errors::WmcError;
use crate::xml::serialize::online_resource;
use crate::xml::tree::{Element, QName};

pub use view::{StaticLayer, StaticMapView};

/// Version written on exported roots.
pub const EXPORT_VERSION: &str = "1.0.0";

/// `xsi:schemaLocation` written on exported roots.
pub const SCHEMA_LOCATION: &str =
    "http://www.opengis.net/context http://schemas.opengis.net/context/1.0.0/context.xsd";

/// Service identifier written on every exported `Server`.
pub const WMS_SERVICE: &str = "OGC:WMS";

/// Protocol version written on every exported `Server`.
pub const WMS_VERSION: &str = "1.1.1";

/// Title of the single layer written in aggregate mode.
pub const AGGREGATE_TITLE: &str = "Aggregate Layers";

/// Errors reported by a [`MapView`] that cannot supply what the exporter needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapViewError {
    #[error("map view has no {0}")]
    Missing(&'static str),
    #[error("map view {field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Read access to a map as it is currently displayed.
pub trait MapView {
    /// Identifier of the map, written as the context `id`.
    fn id(&self) -> Result<String, MapViewError>;

    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Spatial reference system. Only the first whitespace-separated token is
    /// exported.
    fn srs(&self) -> Result<String, MapViewError>;

    /// Current extent as `[minx, miny, maxx, maxy]`.
    fn bounds(&self) -> [f64; 4];

    /// Layer names, bottom first.
    fn layer_names(&self) -> Vec<String>;

    /// Layer titles, parallel to [`MapView::layer_names`]. Extra entries on
    /// either side are not exported.
    fn layer_titles(&self) -> Vec<String>;

    fn is_visible(&self, name: &str) -> bool;

    /// Style elements for the layer with the given title, in any namespace.
    fn layer_styles(&self, title: &str) -> Vec<Element>;

    /// Base URL of the WMS serving the layers.
    fn url(&self) -> Result<String, MapViewError>;

    /// Image format requested from the WMS.
    fn format(&self) -> Result<String, MapViewError>;
}

/// Steps shared by both export layouts. Implementors decide how the map
/// layers become `LayerList` content.
pub trait ContextExport {
    fn layer_list_element(&self, view: &dyn MapView) -> Result<Element, WmcError>;

    fn root_element(&self, view: &dyn MapView) -> Result<Element, WmcError> {
        Ok(Element::wmc("ViewContext")
            .with_attribute(QName::new(Namespace::Xsi, "schemaLocation"), SCHEMA_LOCATION)
            .with_attr("id", view.id()?)
            .with_attr("version", EXPORT_VERSION))
    }

    fn window_element(&self, view: &dyn MapView) -> Element {
        let (width, height) = view.size();
        Element::wmc("Window")
            .with_attr("width", width.to_string())
            .with_attr("height", height.to_string())
    }

    fn bounding_box_element(&self, view: &dyn MapView) -> Result<Element, WmcError> {
        let srs = view.srs()?;
        let srs = srs.split_whitespace().next().unwrap_or_default();

        let mut element = Element::wmc("BoundingBox").with_attr("SRS", srs);
        for (name, value) in ["minx", "miny", "maxx", "maxy"]
            .into_iter()
            .zip(view.bounds())
        {
            element.set_attr(name, format_coordinate(value));
        }
        Ok(element)
    }

    fn general_element(&self, view: &dyn MapView) -> Result<Element, WmcError> {
        Ok(Element::wmc("General")
            .with_child(self.window_element(view))
            .with_child(self.bounding_box_element(view)?))
    }

    /// Assemble the complete document element.
    fn build(&self, view: &dyn MapView) -> Result<Element, WmcError> {
        let root = self
            .root_element(view)?
            .with_child(self.general_element(view)?)
            .with_child(self.layer_list_element(view)?);
        debug!(
            "Exported context {:?}",
            root.attr("id").unwrap_or_default()
        );
        Ok(root)
    }

    /// Build and write the document as text.
    fn to_xml(&self, view: &dyn MapView, config: &WriterConfig) -> Result<String, WmcError> {
        Ok(self.build(view)?.to_xml(config)?)
    }
}

/// Integral values are written without a fractional part. Non-finite values
/// are written as `NaN`, `inf` or `-inf`.
fn format_coordinate(value: f64) -> String {
    value.to_string()
}

/// `<Server service="OGC:WMS" version="1.1.1" title="OGC:WMS">` for `url`.
fn wms_server(url: &str) -> Element {
    Element::wmc("Server")
        .with_attr("service", WMS_SERVICE)
        .with_attr("version", WMS_VERSION)
        .with_attr("title", WMS_SERVICE)
        .with_child(online_resource(Some(SIMPLE_LINK), Some(url)))
}

fn format_list(format: &str) -> Element {
    Element::wmc("FormatList").with_child(
        Element::wmc("Format")
            .with_attr("current", "1")
            .with_text(format),
    )
}

/// One `Layer` per map layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapContext;

impl ContextExport for MapContext {
    fn layer_list_element(&self, view: &dyn MapView) -> Result<Element, WmcError> {
        let names = view.layer_names();
        let titles = view.layer_titles();
        let url = view.url()?;
        let format = view.format()?;

        let mut list = Element::wmc("LayerList");
        for (name, title) in names.iter().zip(&titles) {
            let hidden = if view.is_visible(name) { "0" } else { "1" };
            let mut layer = Element::wmc("Layer")
                .with_attr("queryable", "0")
                .with_attr("hidden", hidden)
                .with_child(wms_server(&url))
                .with_child(Element::wmc("Name").with_text(name.as_str()))
                .with_child(Element::wmc("Title").with_text(title.as_str()))
                .with_child(format_list(&format));

            let styles = view.layer_styles(title);
            if !styles.is_empty() {
                let mut style_list = Element::wmc("StyleList");
                for mut style in styles {
                    style.set_attr("current", "1");
                    style.rename_namespace(Namespace::Context);
                    style_list.push(style);
                }
                layer.push(style_list);
            }

            debug!("Exported layer {} (hidden={})", name, hidden);
            list.push(layer);
        }
        Ok(list)
    }
}

/// A single `Layer` naming every map layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateMapContext;

impl ContextExport for AggregateMapContext {
    fn layer_list_element(&self, view: &dyn MapView) -> Result<Element, WmcError> {
        let names = itertools::join(view.layer_names(), ",");
        let layer = Element::wmc("Layer")
            .with_attr("queryable", "0")
            .with_attr("hidden", "0")
            .with_child(wms_server(&view.url()?))
            .with_child(Element::wmc("Name").with_text(names))
            .with_child(Element::wmc("Title").with_text(AGGREGATE_TITLE))
            .with_child(format_list(&view.format()?));
        Ok(Element::wmc("LayerList").with_child(layer))
    }
}

/// Export `view` as WMC text, one layer per map layer or all of them in one.
pub fn map_to_web_map_context(view: &dyn MapView, aggregate: bool) -> Result<String, WmcError> {
    let config = WriterConfig::default();
    if aggregate {
        AggregateMapContext.to_xml(view, &config)
    } else {
        MapContext.to_xml(view, &config)
    }
}
