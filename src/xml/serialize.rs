//! XML serialization of the document model.
//!
//! Each entity builds a fresh [`Element`] for itself through [`ToElement`].
//! Children are emitted in schema order no matter how the entity was filled
//! in, and a field that is not set produces nothing: no empty element and no
//! empty attribute. The only values invented here are the root `version` and
//! `id` (see [`crate::context`]).

use log::debug;
use thiserror::Error;

use crate::contact::{Address, ContactInformation};
use crate::context::ViewContext;
use crate::general::{BoundingBox, General, Window};
use crate::layer::{Dimension, Format, Layer, Server, Style};
use crate::namespace::Namespace;
use crate::url::UrlType;
use crate::xml::tree::{Element, QName};

/// Errors that can occur during XML serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("XML serialization error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Conversion of an entity into a new element.
pub trait ToElement {
    fn to_element(&self) -> Element;
}

/// `<OnlineResource xlink:type="..." xlink:href="..."/>`, each attribute
/// written only when present.
pub fn online_resource(link_type: Option<&str>, href: Option<&str>) -> Element {
    let mut resource = Element::wmc("OnlineResource");
    if let Some(link_type) = link_type {
        resource.set_attribute(QName::new(Namespace::Xlink, "type"), link_type);
    }
    if let Some(href) = href {
        resource.set_attribute(QName::new(Namespace::Xlink, "href"), href);
    }
    resource
}

impl UrlType {
    /// Build the element under the tag its owner uses for it.
    pub fn to_element_named(&self, name: QName) -> Element {
        let mut element = Element::new(name);
        element
            .set_opt_attr("width", self.width.as_deref())
            .set_opt_attr("height", self.height.as_deref())
            .set_opt_attr("format", self.format.as_deref());
        if self.url.is_some() || self.link_type.is_some() {
            element.push(online_resource(
                self.link_type.as_deref(),
                self.url.as_deref(),
            ));
        }
        element
    }
}

fn push_url(parent: &mut Element, local: &str, url: &UrlType) {
    if !url.is_empty() {
        parent.push(url.to_element_named(QName::new(Namespace::Context, local)));
    }
}

impl ToElement for Address {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("ContactAddress");
        element
            .push_opt_text("AddressType", self.address_type.as_deref())
            .push_opt_text("Address", self.address.as_deref())
            .push_opt_text("City", self.city.as_deref())
            .push_opt_text("StateOrProvince", self.state_or_province.as_deref())
            .push_opt_text("PostCode", self.post_code.as_deref())
            .push_opt_text("Country", self.country.as_deref());
        element
    }
}

impl ToElement for ContactInformation {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("ContactInformation");

        if self.has_primary_person() {
            let mut primary = Element::wmc("ContactPersonPrimary");
            primary
                .push_opt_text("ContactPerson", self.person.as_deref())
                .push_opt_text("ContactOrganization", self.organization.as_deref());
            element.push(primary);
        }
        element.push_opt_text("ContactPosition", self.position.as_deref());
        if !self.address.is_empty() {
            element.push(self.address.to_element());
        }
        element
            .push_opt_text("ContactVoiceTelephone", self.telephone.as_deref())
            .push_opt_text("ContactFacsimileTelephone", self.fax.as_deref())
            .push_opt_text("ContactElectronicMailAddress", self.email.as_deref());
        element
    }
}

impl ToElement for Window {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("Window");
        element
            .set_opt_attr("width", self.width.as_deref())
            .set_opt_attr("height", self.height.as_deref());
        element
    }
}

impl ToElement for BoundingBox {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("BoundingBox");
        element
            .set_opt_attr("SRS", self.srs.as_deref())
            .set_opt_attr("minx", self.minx.as_deref())
            .set_opt_attr("miny", self.miny.as_deref())
            .set_opt_attr("maxx", self.maxx.as_deref())
            .set_opt_attr("maxy", self.maxy.as_deref());
        element
    }
}

impl ToElement for General {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("General");

        if !self.window.is_empty() {
            element.push(self.window.to_element());
        }
        if !self.bbox.is_empty() {
            element.push(self.bbox.to_element());
        }
        element.push_opt_text("Title", self.title.as_deref());
        if !self.keywords.is_empty() {
            let mut list = Element::wmc("KeywordList");
            for keyword in &self.keywords {
                list.push(Element::wmc("Keyword").with_text(keyword.as_str()));
            }
            element.push(list);
        }
        element.push_opt_text("Abstract", self.abstract_.as_deref());
        push_url(&mut element, "LogoURL", &self.logo_url);
        push_url(&mut element, "DescriptionURL", &self.description_url);
        if !self.contact.is_empty() {
            element.push(self.contact.to_element());
        }
        element
    }
}

impl ToElement for Server {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("Server");
        element
            .set_opt_attr("service", self.service.as_deref())
            .set_opt_attr("version", self.version.as_deref())
            .set_opt_attr("title", self.title.as_deref());
        element.push(online_resource(
            self.link_type.as_deref(),
            self.url.as_deref(),
        ));
        element
    }
}

impl ToElement for Format {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("Format");
        element.set_opt_attr("current", self.current.as_deref());
        element.text = self.name.clone();
        element
    }
}

impl ToElement for Style {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("Style");
        element.set_opt_attr("current", self.current.as_deref());
        element
            .push_opt_text("Name", Some(self.name.as_str()))
            .push_opt_text("Title", Some(self.title.as_str()))
            .push_opt_text("Abstract", self.abstract_.as_deref());
        if let Some(legend) = &self.legend_url {
            element.push(legend.to_element_named(QName::new(Namespace::Context, "LegendURL")));
        }
        element
    }
}

impl ToElement for Dimension {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("Dimension");
        for (name, value) in self.attributes() {
            element.set_opt_attr(name, value);
        }
        element.text = self.values.clone();
        element
    }
}

impl ToElement for Layer {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("Layer");
        element
            .set_opt_attr("queryable", self.queryable.as_deref())
            .set_opt_attr("hidden", self.hidden.as_deref());

        element.push(self.server.to_element());
        element
            .push_opt_text("Name", Some(self.name.as_str()))
            .push_opt_text("Title", Some(self.title.as_str()))
            .push_opt_text("Abstract", self.abstract_.as_deref());
        if let Some(url) = &self.data_url {
            element.push(url.to_element_named(QName::new(Namespace::Context, "DataURL")));
        }
        if let Some(url) = &self.metadata_url {
            element.push(url.to_element_named(QName::new(Namespace::Context, "MetadataURL")));
        }
        for (local, value) in [
            ("MinScaleDenominator", &self.min_scale),
            ("MaxScaleDenominator", &self.max_scale),
        ] {
            if let Some(value) = value {
                element.push(
                    Element::new(QName::new(Namespace::Sld, local)).with_text(value.as_str()),
                );
            }
        }
        for srs in &self.srs {
            element.push(Element::wmc("SRS").with_text(srs.as_str()));
        }
        push_list(&mut element, "FormatList", &self.formats);
        push_list(&mut element, "StyleList", &self.styles);
        push_list(&mut element, "DimensionList", &self.dimensions);
        element
    }
}

/// Append `<local>` holding one element per item, unless `items` is empty.
fn push_list<T: ToElement>(parent: &mut Element, local: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }
    let mut list = Element::wmc(local);
    for item in items {
        list.push(item.to_element());
    }
    parent.push(list);
}

impl ToElement for ViewContext {
    fn to_element(&self) -> Element {
        let mut element = Element::wmc("ViewContext");
        element
            .set_attr("version", self.effective_version())
            .set_attr("id", self.effective_id());

        if !self.general.is_empty() {
            element.push(self.general.to_element());
        }
        push_list(&mut element, "LayerList", &self.layers);

        debug!(
            "Serialized context {} with {} layer(s)",
            self.effective_id(),
            self.layers.len()
        );
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_type_omits_absent_attributes() {
        let url = UrlType::new("http://example.com/logo.png");
        let el = url.to_element_named(QName::new(Namespace::Context, "LogoURL"));
        assert!(el.attributes.is_empty());
        assert_eq!(el.children.len(), 1);
        assert_eq!(
            el.children[0].attribute(Some(Namespace::Xlink), "href"),
            Some("http://example.com/logo.png")
        );
    }

    #[test]
    fn test_online_resource_link_type_as_given() {
        let untyped = online_resource(None, Some("http://example.com"));
        assert_eq!(untyped.attribute(Some(Namespace::Xlink), "type"), None);
        assert_eq!(untyped.attributes.len(), 1);

        let server = Server::new("OGC:WMS", "1.1.1", "http://example.com/wms").to_element();
        let resource = server.find(Namespace::Context, "OnlineResource").unwrap();
        assert_eq!(resource.attribute(Some(Namespace::Xlink), "type"), Some("simple"));

        let url = UrlType {
            link_type: Some("simple".to_string()),
            ..UrlType::default()
        };
        let el = url.to_element_named(QName::new(Namespace::Context, "LegendURL"));
        assert_eq!(el.children.len(), 1);
        assert_eq!(el.children[0].attribute(Some(Namespace::Xlink), "href"), None);
    }

    #[test]
    fn test_contact_primary_only_when_set() {
        let contact = ContactInformation {
            email: Some("a@example.com".to_string()),
            ..ContactInformation::default()
        };
        let el = contact.to_element();
        assert!(el.find(Namespace::Context, "ContactPersonPrimary").is_none());
        assert!(el.find(Namespace::Context, "ContactAddress").is_none());

        let contact = ContactInformation {
            organization: Some("OGC".to_string()),
            ..ContactInformation::default()
        };
        let el = contact.to_element();
        let primary = el.find(Namespace::Context, "ContactPersonPrimary").unwrap();
        assert!(primary.find(Namespace::Context, "ContactPerson").is_none());
        assert_eq!(
            primary.child_text(Namespace::Context, "ContactOrganization"),
            Some("OGC".to_string())
        );
    }

    #[test]
    fn test_general_schema_order() {
        let mut general = General::default();
        general.contact.email = Some("a@example.com".to_string());
        general.abstract_ = Some("About".to_string());
        general.keywords = vec!["k".to_string()];
        general.title = Some("Title".to_string());
        general.bbox.srs = Some("EPSG:4326".to_string());
        general.window = Window::new("500", "300");

        let el = general.to_element();
        let order: Vec<_> = el.children.iter().map(Element::local_name).collect();
        assert_eq!(
            order,
            vec![
                "Window",
                "BoundingBox",
                "Title",
                "KeywordList",
                "Abstract",
                "ContactInformation"
            ]
        );
    }

    #[test]
    fn test_empty_context_writes_only_root() {
        let el = ViewContext::default().to_element();
        assert!(el.children.is_empty());
        assert_eq!(el.attr("version"), Some("1.1.0"));
        assert_eq!(el.attr("id"), Some("wmc-context"));
    }

    #[test]
    fn test_layer_schema_order() {
        let mut layer = Layer::new("roads", "Roads", Server::new("OGC:WMS", "1.1.1", "http://x"));
        layer.dimensions.push(Dimension::new("time", "ISO8601"));
        layer.styles.push(Style::new("default", "Default"));
        layer.formats.push(Format::new("image/png").current());
        layer.srs.push("EPSG:4326".to_string());
        layer.max_scale = Some("100".to_string());
        layer.min_scale = Some("10".to_string());
        layer.data_url = Some(UrlType::new("http://x/data"));

        let el = layer.to_element();
        let order: Vec<_> = el.children.iter().map(Element::local_name).collect();
        assert_eq!(
            order,
            vec![
                "Server",
                "Name",
                "Title",
                "DataURL",
                "MinScaleDenominator",
                "MaxScaleDenominator",
                "SRS",
                "FormatList",
                "StyleList",
                "DimensionList"
            ]
        );
        assert!(el.children[4].name.is(Namespace::Sld, "MinScaleDenominator"));
        assert!(el.attributes.is_empty());
    }
}
