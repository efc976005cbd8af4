//! Quick-xml helper utilities for WMC (de)serialization.
//!
//! This module bridges quick-xml's event-level APIs and the owned
//! [`Element`](crate::xml::tree::Element) tree the document model works on.

pub mod de;
pub mod ser;

pub use de::read_tree;
pub use ser::{AttrList, XmlEmitter, write_tree};
