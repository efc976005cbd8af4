//! Shared lookups for the entity parsers.

use crate::namespace::Namespace;
use crate::xml::deserialize::DeserializeError;
use crate::xml::tree::Element;

/// Text of an optional WMC child element.
pub fn opt_text(element: &Element, local: &str) -> Option<String> {
    element.child_text(Namespace::Context, local)
}

/// A mandatory WMC child element.
pub fn req_child<'a>(element: &'a Element, local: &str) -> Result<&'a Element, DeserializeError> {
    element
        .find(Namespace::Context, local)
        .ok_or_else(|| missing(element, local))
}

/// Text of a mandatory WMC child element. An empty element yields `""`.
pub fn req_text(element: &Element, local: &str) -> Result<String, DeserializeError> {
    req_child(element, local).map(|c| c.text().unwrap_or_default().to_string())
}

/// Texts of all WMC children reached through `path`, in document order.
pub fn texts(element: &Element, path: &[&str]) -> Vec<String> {
    let path: Vec<_> = path.iter().map(|local| (Namespace::Context, *local)).collect();
    element
        .find_all_path(&path)
        .into_iter()
        .map(|el| el.text().unwrap_or_default().to_string())
        .collect()
}

/// An XLink attribute (`href`, `type`) of an `OnlineResource` element.
pub fn xlink_attr(resource: &Element, local: &str) -> Option<String> {
    resource
        .attribute(Some(Namespace::Xlink), local)
        .map(str::to_string)
}

/// Error for a missing mandatory child, naming it by path.
pub fn missing(parent: &Element, local: &str) -> DeserializeError {
    DeserializeError::MalformedDocument(format!("{}/{}", parent.local_name(), local))
}
