#![cfg(test)]

/// Wrap a layer XML snippet in a minimal WMC document.
///
/// The default namespace is WMC and the `xlink` and `sld` prefixes are bound,
/// so snippets may use them freely.
pub fn wrap_layer_xml(layer_xml: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ViewContext version="1.1.0" id="test"
    xmlns="http://www.opengis.net/context"
    xmlns:sld="http://www.opengis.net/sld"
    xmlns:xlink="http://www.w3.org/1999/xlink">
    <LayerList>
        {}
    </LayerList>
</ViewContext>"#,
        layer_xml
    )
}

/// Parse a layer snippet and return its `Layer` element.
pub fn parse_layer_element(layer_xml: &str) -> crate::xml::Element {
    use crate::namespace::Namespace;
    use crate::xml::Element;

    let root = Element::parse(&wrap_layer_xml(layer_xml)).expect("Failed to parse layer XML");
    root.find_path(&[
        (Namespace::Context, "LayerList"),
        (Namespace::Context, "Layer"),
    ])
    .cloned()
    .expect("No Layer element in snippet")
}
