//! Round-trip tests for WMC parsing and serialization.
//!
//! These tests verify that documents can be parsed, serialized back to XML,
//! and parsed again without gaining or losing content.

use pretty_assertions::assert_eq;
use wmc::{Layer, Server, ViewContext, WriterConfig};

const WORLD: &str = include_str!("../data/examples/world.xml");

/// Helper function to perform a round-trip: parse → serialize → parse → compare
fn round_trip(xml: &str, description: &str) -> ViewContext {
    let first = ViewContext::from_str(xml)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {:?}", description, e));

    let serialized = first
        .dumps()
        .unwrap_or_else(|e| panic!("Failed to serialize {}: {:?}", description, e));

    let second = ViewContext::from_str(&serialized)
        .unwrap_or_else(|e| panic!("Failed to re-parse {}: {:?}", description, e));

    assert_eq!(first, second, "Round-trip failed for {}", description);
    second
}

#[test]
fn test_round_trip_full_document() {
    let context = round_trip(WORLD, "world document");
    assert_eq!(context.layers.len(), 3);
    assert_eq!(context.general.keywords, vec!["world", "overview"]);
}

#[test]
fn test_round_trip_keeps_absent_fields_absent() {
    let xml = r#"<ViewContext xmlns="http://www.opengis.net/context"
                             xmlns:xlink="http://www.w3.org/1999/xlink"
                             version="1.1.0" id="sparse">
        <General>
            <Title>Sparse</Title>
        </General>
        <LayerList>
            <Layer>
                <Server><OnlineResource xlink:type="simple" xlink:href="http://example.com/wms"/></Server>
                <Name>only</Name>
                <Title>Only layer</Title>
            </Layer>
        </LayerList>
    </ViewContext>"#;

    let context = round_trip(xml, "sparse document");
    let out = context.dumps().unwrap();

    for absent in [
        "<Window",
        "<BoundingBox",
        "<Abstract",
        "<KeywordList",
        "<LogoURL",
        "<DescriptionURL",
        "<ContactInformation",
        "<FormatList",
        "<StyleList",
        "<DimensionList",
        "<SRS",
        "queryable=",
        "hidden=",
        "service=",
        "MinScaleDenominator",
    ] {
        assert!(!out.contains(absent), "{} should not be written:\n{}", absent, out);
    }

    let layer = &context.layers[0];
    assert_eq!(layer.queryable, None);
    assert_eq!(layer.hidden, None);
    assert_eq!(layer.abstract_, None);
    assert_eq!(layer.min_scale, None);
}

#[test]
fn test_round_trip_preserves_layer_order() {
    let mut context = ViewContext::new("ordered");
    for name in ["z", "a", "m", "b"] {
        context.layers.push(Layer::new(
            name,
            name.to_uppercase(),
            Server::new("OGC:WMS", "1.1.1", "http://example.com/wms"),
        ));
    }

    let xml = context.dumps().unwrap();
    let parsed = round_trip(&xml, "ordered layers");
    let names: Vec<_> = parsed.layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m", "b"]);
    assert_eq!(parsed.layers, context.layers);
}

#[test]
fn test_root_defaults_when_missing() {
    let xml = r#"<ViewContext xmlns="http://www.opengis.net/context"/>"#;
    let context = ViewContext::from_str(xml).unwrap();
    assert_eq!(context.version, None);
    assert_eq!(context.id, None);

    let out = context.to_xml(&WriterConfig::compact()).unwrap();
    assert!(out.contains(r#"version="1.1.0""#));
    assert!(out.contains(r#"id="wmc-context""#));

    let reparsed = ViewContext::from_str(&out).unwrap();
    assert_eq!(reparsed.version.as_deref(), Some("1.1.0"));
    assert_eq!(reparsed.id.as_deref(), Some("wmc-context"));
}

#[test]
fn test_root_values_preserved() {
    let xml = r#"<ViewContext xmlns="http://www.opengis.net/context" version="1.0.0" id="mine"/>"#;
    let out = ViewContext::from_str(xml)
        .unwrap()
        .to_xml(&WriterConfig::compact())
        .unwrap();
    assert!(out.contains(r#"version="1.0.0""#));
    assert!(out.contains(r#"id="mine""#));
}

#[test]
fn test_serialization_is_idempotent() {
    let once = ViewContext::from_str(WORLD).unwrap().dumps().unwrap();
    let twice = ViewContext::from_str(&once).unwrap().dumps().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_edit_then_write() {
    let mut context = ViewContext::from_str(WORLD).unwrap();
    context.layer_mut("rivers").unwrap().hidden = Some("0".to_string());
    context.general.contact.fax = Some("+1 555 0101".to_string());

    let reparsed = ViewContext::from_str(&context.dumps().unwrap()).unwrap();
    assert!(!reparsed.layer("rivers").unwrap().is_hidden());
    assert_eq!(
        reparsed.general.contact.fax.as_deref(),
        Some("+1 555 0101")
    );
    assert_eq!(reparsed, context);
}

#[test]
fn test_compact_and_indented_output_agree() {
    let context = ViewContext::from_str(WORLD).unwrap();
    let compact = context.to_xml(&WriterConfig::compact()).unwrap();
    let indented = context.to_xml(&WriterConfig::default()).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(
        ViewContext::from_str(&compact).unwrap(),
        ViewContext::from_str(&indented).unwrap()
    );
}

#[test]
fn test_round_trip_keeps_text_padding() {
    let mut context = ViewContext::new("padded");
    context.general.abstract_ = Some("  indented line\n".to_string());
    context.general.keywords = vec![" padded ".to_string(), "plain".to_string()];
    context.general.title = Some("   ".to_string());

    for config in [WriterConfig::default(), WriterConfig::compact()] {
        let parsed = ViewContext::from_str(&context.to_xml(&config).unwrap()).unwrap();
        assert_eq!(parsed.general, context.general);
    }
}

#[test]
fn test_text_split_by_comment() {
    let xml = r#"<ViewContext xmlns="http://www.opengis.net/context">
        <General><Abstract>a <!-- note --> b</Abstract></General>
    </ViewContext>"#;
    let context = round_trip(xml, "commented abstract");
    assert_eq!(context.general.abstract_.as_deref(), Some("a  b"));
}

#[test]
fn test_round_trip_keeps_composite_gaps() {
    let xml = r#"<ViewContext xmlns="http://www.opengis.net/context" version="1.1.0" id="gaps">
        <General>
            <Window width="800"/>
            <BoundingBox minx="-10" maxx="30" maxy="40"/>
        </General>
    </ViewContext>"#;

    let context = round_trip(xml, "partial window and bounding box");
    assert_eq!(context.general.window.width.as_deref(), Some("800"));
    assert_eq!(context.general.window.height, None);
    assert_eq!(context.general.bbox.srs, None);
    assert_eq!(context.general.bbox.miny, None);
    assert_eq!(context.general.bbox.minx.as_deref(), Some("-10"));

    let out = context.to_xml(&WriterConfig::compact()).unwrap();
    assert!(out.contains(r#"<Window width="800"/>"#), "{}", out);
    assert!(
        out.contains(r#"<BoundingBox minx="-10" maxx="30" maxy="40"/>"#),
        "{}",
        out
    );
    for absent in ["height=", "SRS=", "srs=", "miny="] {
        assert!(!out.contains(absent), "{} should not be written:\n{}", absent, out);
    }
}

#[test]
fn test_online_resource_without_link_type() {
    let xml = r#"<ViewContext xmlns="http://www.opengis.net/context"
                             xmlns:xlink="http://www.w3.org/1999/xlink">
        <General>
            <LogoURL format="image/png"><OnlineResource xlink:href="http://example.com/logo.png"/></LogoURL>
        </General>
        <LayerList>
            <Layer>
                <Server><OnlineResource xlink:href="http://example.com/wms"/></Server>
                <Name>a</Name>
                <Title>A</Title>
            </Layer>
        </LayerList>
    </ViewContext>"#;

    let context = round_trip(xml, "untyped online resources");
    assert_eq!(context.general.logo_url.link_type, None);
    assert_eq!(context.layers[0].server.link_type, None);
    assert!(!context.dumps().unwrap().contains("xlink:type"));
}
