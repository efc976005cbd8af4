//! XML deserialization module.
//!
//! Every entity of the document model is built from an already-parsed
//! [`Element`] through [`FromElement`]. Parsing tolerates absent optional
//! content and fails only when a mandatory element is missing.

pub mod contact;
pub mod context;
pub mod general;
pub mod helpers;
pub mod layer;
pub mod url;

use thiserror::Error;

use crate::xml::tree::Element;

/// Errors that can occur during XML deserialization.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    #[error("Deserialization error: {0}")]
    Custom(String),
    #[error("Unexpected end of XML")]
    UnexpectedEof,
    #[error("Document contains no element")]
    EmptyDocument,
    #[error("Unknown namespace prefix '{0}'")]
    UnknownPrefix(String),
    #[error("Unexpected element: expected {expected}, found {found}")]
    UnexpectedElement { expected: String, found: String },
    /// A mandatory element is missing; the value is its path, e.g. `Layer/Server`.
    #[error("Missing required element: {0}")]
    MalformedDocument(String),
}

/// Construction of an entity from its source element.
pub trait FromElement: Sized {
    fn from_element(element: &Element) -> Result<Self, DeserializeError>;
}
