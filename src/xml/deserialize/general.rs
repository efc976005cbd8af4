//! General section deserialization module.
//!
//! Handles `General` and the `Window` and `BoundingBox` elements inside it.

use log::trace;

use crate::contact::ContactInformation;
use crate::general::{BoundingBox, General, Window};
use crate::namespace::Namespace;
use crate::url::UrlType;
use crate::xml::deserialize::helpers::{opt_text, texts};
use crate::xml::deserialize::{DeserializeError, FromElement};
use crate::xml::tree::Element;

impl FromElement for Window {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        Ok(Window {
            width: element.attr_string("width"),
            height: element.attr_string("height"),
        })
    }
}

impl FromElement for BoundingBox {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        Ok(BoundingBox {
            srs: element.attr_string("SRS"),
            minx: element.attr_string("minx"),
            miny: element.attr_string("miny"),
            maxx: element.attr_string("maxx"),
            maxy: element.attr_string("maxy"),
        })
    }
}

impl FromElement for General {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        Ok(General {
            window: optional(element, "Window")?,
            bbox: optional(element, "BoundingBox")?,
            title: opt_text(element, "Title"),
            keywords: texts(element, &["KeywordList", "Keyword"]),
            abstract_: opt_text(element, "Abstract"),
            logo_url: optional::<UrlType>(element, "LogoURL")?,
            description_url: optional::<UrlType>(element, "DescriptionURL")?,
            contact: optional::<ContactInformation>(element, "ContactInformation")?,
        })
    }
}

/// Parse an optional child, or the all-default value when it is absent.
fn optional<T: FromElement + Default>(
    element: &Element,
    local: &str,
) -> Result<T, DeserializeError> {
    match element.find(Namespace::Context, local) {
        Some(child) => T::from_element(child),
        None => {
            trace!("General has no {}", local);
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_full() {
        let xml = r#"<General xmlns="http://www.opengis.net/context"
                              xmlns:xlink="http://www.w3.org/1999/xlink">
            <Window width="800" height="600"/>
            <BoundingBox SRS="EPSG:4326" minx="-10" miny="-20" maxx="30" maxy="40"/>
            <Title>Rivers of the world</Title>
            <KeywordList>
                <Keyword>rivers</Keyword>
                <Keyword>hydrology</Keyword>
            </KeywordList>
            <Abstract>All major rivers.</Abstract>
            <LogoURL width="50" height="50" format="image/gif">
                <OnlineResource xlink:type="simple" xlink:href="http://example.com/logo.gif"/>
            </LogoURL>
        </General>"#;

        let general = General::from_element(&Element::parse(xml).unwrap()).unwrap();
        assert_eq!(general.window, Window::new("800", "600"));
        assert_eq!(
            general.bbox,
            BoundingBox::new("EPSG:4326", "-10", "-20", "30", "40")
        );
        assert_eq!(general.title.as_deref(), Some("Rivers of the world"));
        assert_eq!(general.keywords, vec!["rivers", "hydrology"]);
        assert_eq!(general.abstract_.as_deref(), Some("All major rivers."));
        assert_eq!(
            general.logo_url.url.as_deref(),
            Some("http://example.com/logo.gif")
        );
        assert!(general.description_url.is_empty());
        assert!(general.contact.is_empty());
    }

    #[test]
    fn test_general_absent_parts() {
        let xml = r#"<General xmlns="http://www.opengis.net/context"><Title/></General>"#;

        let general = General::from_element(&Element::parse(xml).unwrap()).unwrap();
        assert!(general.window.is_empty());
        assert!(general.bbox.is_empty());
        assert_eq!(general.title.as_deref(), Some(""));
        assert!(general.keywords.is_empty());
        assert!(general.abstract_.is_none());
    }

    #[test]
    fn test_bbox_lowercase_srs_is_not_read() {
        let xml = r#"<BoundingBox xmlns="http://www.opengis.net/context" srs="EPSG:4326"/>"#;
        let bbox = BoundingBox::from_element(&Element::parse(xml).unwrap()).unwrap();
        assert!(bbox.srs.is_none());
    }
}
