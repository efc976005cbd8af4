//! `URLType`-shaped elements: `LogoURL`, `DescriptionURL`, `DataURL`,
//! `MetadataURL` and `LegendURL`.

use crate::namespace::Namespace;
use crate::url::UrlType;
use crate::xml::deserialize::helpers::xlink_attr;
use crate::xml::deserialize::{DeserializeError, FromElement};
use crate::xml::tree::Element;

impl FromElement for UrlType {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        let resource = element.find(Namespace::Context, "OnlineResource");
        Ok(UrlType {
            width: element.attr_string("width"),
            height: element.attr_string("height"),
            format: element.attr_string("format"),
            url: resource.and_then(|r| xlink_attr(r, "href")),
            link_type: resource.and_then(|r| xlink_attr(r, "type")),
        })
    }
}
