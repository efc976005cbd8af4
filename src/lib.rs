//! Document object model for OGC Web Map Context (WMC) documents.
//!
//! A [`ViewContext`] can be parsed from XML, edited as plain Rust values and
//! written back out without losing anything it held. The [`export`] module
//! goes the other way and builds a fresh context document from a live map
//! view.

pub mod contact;
pub mod context;
pub mod export;
pub mod general;
pub mod layer;
pub mod namespace;
pub mod url;
pub mod xml;

#[cfg(test)]
mod test_utils;

pub use crate::contact::{Address, ContactInformation};
pub use crate::context::{DEFAULT_ID, DEFAULT_VERSION, ViewContext};
pub use crate::export::{
    AggregateMapContext, ContextExport, MapContext, MapView, MapViewError, StaticMapView,
    map_to_web_map_context,
};
pub use crate::general::{BoundingBox, General, Window};
pub use crate::layer::{Dimension, Format, Layer, Server, Style};
pub use crate::namespace::Namespace;
pub use crate::url::UrlType;
pub use crate::xml::{Element, QName, WmcError, WriterConfig};
