//! Sized, formatted references to external resources.
//!
//! Logo, description, legend, data and metadata URLs all share this shape:
//!
//! ```xml
//! <LogoURL width="100" height="40" format="image/png">
//!   <OnlineResource xlink:type="simple" xlink:href="http://example.com/logo.png"/>
//! </LogoURL>
//! ```

use serde::{Deserialize, Serialize};

/// The `xlink:type` of a simple XLink, used by the constructors and the exporter.
pub const SIMPLE_LINK: &str = "simple";

/// A URL qualified by display size and MIME format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlType {
    pub width: Option<String>,
    pub height: Option<String>,
    pub format: Option<String>,
    /// Taken from the nested `OnlineResource/@xlink:href`, never from an
    /// attribute of the element itself.
    pub url: Option<String>,
    /// `OnlineResource/@xlink:type`, normally `simple`.
    pub link_type: Option<String>,
}

impl UrlType {
    /// A simple link to `url` with no size or format.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            link_type: Some(SIMPLE_LINK.to_string()),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.height.is_none()
            && self.format.is_none()
            && self.url.is_none()
            && self.link_type.is_none()
    }
}
