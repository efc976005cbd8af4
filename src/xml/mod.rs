//! XML reading and writing for WMC documents.
//!
//! Text is first turned into an owned [`Element`] tree by the quick-xml
//! backend in [`quick`]; entities are then read from the tree through
//! [`FromElement`] and written back into a fresh tree through [`ToElement`].

pub mod config;
pub mod deserialize;
pub mod errors;
pub mod quick;
pub mod serialize;
pub mod tree;

pub use config::WriterConfig;
pub use deserialize::{DeserializeError, FromElement};
pub use errors::{ErrorContext, WmcError};
pub use serialize::{SerializeError, ToElement};
pub use tree::{Attribute, Element, QName};
