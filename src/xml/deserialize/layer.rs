//! Layer deserialization module.
//!
//! `Server` (with its `OnlineResource`), `Name` and `Title` are mandatory on
//! a layer; so are `Name` and `Title` on a style. Everything else is optional.

use crate::layer::{Dimension, Format, Layer, Server, Style};
use crate::namespace::Namespace;
use crate::url::UrlType;
use crate::xml::deserialize::helpers::{opt_text, req_child, req_text, texts, xlink_attr};
use crate::xml::deserialize::{DeserializeError, FromElement};
use crate::xml::tree::Element;

impl FromElement for Server {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        let resource = req_child(element, "OnlineResource")?;
        Ok(Server {
            service: element.attr_string("service"),
            version: element.attr_string("version"),
            title: element.attr_string("title"),
            url: xlink_attr(resource, "href"),
            link_type: xlink_attr(resource, "type"),
        })
    }
}

impl FromElement for Format {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        Ok(Format {
            name: Some(element.text().unwrap_or_default().to_string()),
            current: element.attr_string("current"),
        })
    }
}

impl FromElement for Style {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        Ok(Style {
            current: element.attr_string("current"),
            name: req_text(element, "Name")?,
            title: req_text(element, "Title")?,
            abstract_: opt_text(element, "Abstract"),
            legend_url: element
                .find(Namespace::Context, "LegendURL")
                .map(UrlType::from_element)
                .transpose()?,
        })
    }
}

impl FromElement for Dimension {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        Ok(Dimension {
            name: element.attr_string("name"),
            units: element.attr_string("units"),
            unit_symbol: element.attr_string("unitSymbol"),
            user_value: element.attr_string("userValue"),
            default: element.attr_string("default"),
            multiple_values: element.attr_string("multipleValues"),
            nearest_value: element.attr_string("nearestValue"),
            current: element.attr_string("current"),
            values: element.text.clone(),
        })
    }
}

impl FromElement for Layer {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        let server = Server::from_element(req_child(element, "Server")?)?;

        Ok(Layer {
            queryable: element.attr_string("queryable"),
            hidden: element.attr_string("hidden"),
            server,
            name: req_text(element, "Name")?,
            title: req_text(element, "Title")?,
            abstract_: opt_text(element, "Abstract"),
            data_url: opt_url(element, "DataURL")?,
            metadata_url: opt_url(element, "MetadataURL")?,
            min_scale: element.child_text(Namespace::Sld, "MinScaleDenominator"),
            max_scale: element.child_text(Namespace::Sld, "MaxScaleDenominator"),
            srs: texts(element, &["SRS"]),
            formats: collect(element, &["FormatList", "Format"])?,
            styles: collect(element, &["StyleList", "Style"])?,
            dimensions: collect(element, &["DimensionList", "Dimension"])?,
        })
    }
}

fn opt_url(element: &Element, local: &str) -> Result<Option<UrlType>, DeserializeError> {
    element
        .find(Namespace::Context, local)
        .map(UrlType::from_element)
        .transpose()
}

/// Parse every WMC element reached through `path`, keeping document order.
fn collect<T: FromElement>(element: &Element, path: &[&str]) -> Result<Vec<T>, DeserializeError> {
    let path: Vec<_> = path.iter().map(|local| (Namespace::Context, *local)).collect();
    element
        .find_all_path(&path)
        .into_iter()
        .map(T::from_element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::parse_layer_element;

    #[test]
    fn test_layer_full() {
        let layer = Layer::from_element(&parse_layer_element(
            r#"<Layer queryable="1" hidden="0">
                <Server service="OGC:WMS" version="1.1.1" title="Demo WMS">
                    <OnlineResource xlink:type="simple" xlink:href="http://example.com/wms?"/>
                </Server>
                <Name>roads</Name>
                <Title>Roads</Title>
                <Abstract>Road network</Abstract>
                <MetadataURL format="text/xml">
                    <OnlineResource xlink:type="simple" xlink:href="http://example.com/meta.xml"/>
                </MetadataURL>
                <sld:MinScaleDenominator>1000</sld:MinScaleDenominator>
                <sld:MaxScaleDenominator>500000</sld:MaxScaleDenominator>
                <SRS>EPSG:4326</SRS>
                <SRS>EPSG:3857</SRS>
                <FormatList>
                    <Format>image/gif</Format>
                    <Format current="1">image/png</Format>
                </FormatList>
                <StyleList>
                    <Style current="1">
                        <Name>default</Name>
                        <Title>Default</Title>
                        <LegendURL width="16" height="16" format="image/png">
                            <OnlineResource xlink:type="simple" xlink:href="http://example.com/legend.png"/>
                        </LegendURL>
                    </Style>
                    <Style>
                        <Name>night</Name>
                        <Title>Night</Title>
                        <Abstract>Dark palette</Abstract>
                    </Style>
                </StyleList>
                <DimensionList>
                    <Dimension name="time" units="ISO8601" userValue="2004-01-01" default="2004-01-01" current="1">2003-01-01/2005-01-01/P1D</Dimension>
                </DimensionList>
            </Layer>"#,
        ))
        .unwrap();

        assert!(layer.is_queryable());
        assert!(!layer.is_hidden());
        assert_eq!(layer.server.service.as_deref(), Some("OGC:WMS"));
        assert_eq!(layer.server.title.as_deref(), Some("Demo WMS"));
        assert_eq!(layer.server.url.as_deref(), Some("http://example.com/wms?"));
        assert_eq!(layer.name, "roads");
        assert_eq!(layer.title, "Roads");
        assert_eq!(layer.abstract_.as_deref(), Some("Road network"));
        assert!(layer.data_url.is_none());
        assert_eq!(
            layer.metadata_url.as_ref().and_then(|u| u.format.as_deref()),
            Some("text/xml")
        );
        assert_eq!(layer.min_scale.as_deref(), Some("1000"));
        assert_eq!(layer.max_scale.as_deref(), Some("500000"));
        assert_eq!(layer.srs, vec!["EPSG:4326", "EPSG:3857"]);
        assert_eq!(layer.formats.len(), 2);
        assert_eq!(
            layer.current_format().and_then(|f| f.name.as_deref()),
            Some("image/png")
        );
        assert_eq!(layer.styles.len(), 2);
        assert_eq!(layer.styles[0].name, "default");
        assert!(layer.styles[0].legend_url.is_some());
        assert_eq!(layer.styles[1].abstract_.as_deref(), Some("Dark palette"));
        assert_eq!(layer.dimensions.len(), 1);
        assert_eq!(layer.dimensions[0].name.as_deref(), Some("time"));
        assert_eq!(layer.dimensions[0].user_value.as_deref(), Some("2004-01-01"));
        assert_eq!(layer.dimensions[0].unit_symbol, None);
        assert_eq!(
            layer.dimensions[0].values.as_deref(),
            Some("2003-01-01/2005-01-01/P1D")
        );
    }

    #[test]
    fn test_layer_minimal() {
        let layer = Layer::from_element(&parse_layer_element(
            r#"<Layer>
                <Server service="OGC:WMS"><OnlineResource/></Server>
                <Name>water</Name>
                <Title/>
            </Layer>"#,
        ))
        .unwrap();

        assert_eq!(layer.queryable, None);
        assert_eq!(layer.hidden, None);
        assert_eq!(layer.server.url, None);
        assert_eq!(layer.name, "water");
        assert_eq!(layer.title, "");
        assert!(layer.srs.is_empty());
        assert!(layer.formats.is_empty());
        assert!(layer.styles.is_empty());
        assert!(layer.dimensions.is_empty());
    }

    #[test]
    fn test_layer_missing_name() {
        let err = Layer::from_element(&parse_layer_element(
            r#"<Layer>
                <Server><OnlineResource/></Server>
                <Title>Untitled</Title>
            </Layer>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DeserializeError::MalformedDocument(p) if p == "Layer/Name"));
    }

    #[test]
    fn test_layer_missing_server() {
        let err = Layer::from_element(&parse_layer_element(
            r#"<Layer><Name>roads</Name><Title>Roads</Title></Layer>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DeserializeError::MalformedDocument(p) if p == "Layer/Server"));
    }

    #[test]
    fn test_server_missing_online_resource() {
        let err = Layer::from_element(&parse_layer_element(
            r#"<Layer><Server service="OGC:WMS"/><Name>roads</Name><Title>Roads</Title></Layer>"#,
        ))
        .unwrap_err();
        assert!(
            matches!(err, DeserializeError::MalformedDocument(p) if p == "Server/OnlineResource")
        );
    }

    #[test]
    fn test_style_missing_title() {
        let err = Layer::from_element(&parse_layer_element(
            r#"<Layer>
                <Server><OnlineResource/></Server>
                <Name>roads</Name>
                <Title>Roads</Title>
                <StyleList><Style><Name>default</Name></Style></StyleList>
            </Layer>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DeserializeError::MalformedDocument(p) if p == "Style/Title"));
    }
}
