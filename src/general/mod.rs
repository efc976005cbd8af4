//! Document-level metadata: the `General` section of a context.
//!
//! `General` groups the map window, its spatial extent, descriptive metadata
//! and the contact block. None of its parts invent values for absent fields;
//! an unset field is simply not written back.

use serde::{Deserialize, Serialize};

use crate::contact::ContactInformation;
use crate::url::UrlType;

/// Pixel size of the map view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl Window {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: Some(width.into()),
            height: Some(height.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Spatial extent of the map view, `(minx, miny)` to `(maxx, maxy)` in `srs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Reference system code, e.g. `EPSG:4326`. Written as the `SRS` attribute.
    pub srs: Option<String>,
    pub minx: Option<String>,
    pub miny: Option<String>,
    pub maxx: Option<String>,
    pub maxy: Option<String>,
}

impl BoundingBox {
    pub fn new(
        srs: impl Into<String>,
        minx: impl Into<String>,
        miny: impl Into<String>,
        maxx: impl Into<String>,
        maxy: impl Into<String>,
    ) -> Self {
        Self {
            srs: Some(srs.into()),
            minx: Some(minx.into()),
            miny: Some(miny.into()),
            maxx: Some(maxx.into()),
            maxy: Some(maxy.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.srs.is_none()
            && self.minx.is_none()
            && self.miny.is_none()
            && self.maxx.is_none()
            && self.maxy.is_none()
    }
}

/// The `General` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct General {
    pub window: Window,
    pub bbox: BoundingBox,
    pub title: Option<String>,
    /// Keywords in document order. Empty means no `KeywordList`.
    pub keywords: Vec<String>,
    pub abstract_: Option<String>,
    pub logo_url: UrlType,
    pub description_url: UrlType,
    pub contact: ContactInformation,
}

impl General {
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
            && self.bbox.is_empty()
            && self.title.is_none()
            && self.keywords.is_empty()
            && self.abstract_.is_none()
            && self.logo_url.is_empty()
            && self.description_url.is_empty()
            && self.contact.is_empty()
    }
}
