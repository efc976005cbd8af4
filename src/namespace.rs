//! # WMC Namespace Support
//!
//! Every element and attribute of a Web Map Context document is qualified by
//! one of a small, fixed set of XML namespaces.
//!
//! ## Predefined Namespaces
//!
//! | Namespace | Prefix | URI |
//! |-----------|--------|-----|
//! | Context | `context` | `http://www.opengis.net/context` |
//! | Sld | `sld` | `http://www.opengis.net/sld` |
//! | Xlink | `xlink` | `http://www.w3.org/1999/xlink` |
//! | Xsi | `xsi` | `http://www.w3.org/2001/XMLSchema-instance` |
//!
//! The WMC vocabulary itself lives in `Context`. The styling extension
//! (`Sld`) only contributes the scale denominators of a layer, and `Xlink`
//! qualifies the `href`/`type` attributes of `OnlineResource` elements.
//!
//! ## Examples
//!
//! ```rust
//! use wmc::Namespace;
//!
//! let ns = Namespace::from_uri("http://www.opengis.net/context");
//! assert_eq!(ns, Some(Namespace::Context));
//!
//! assert_eq!(Namespace::Xlink.prefix(), "xlink");
//! assert_eq!(Namespace::from_prefix("SLD"), Some(Namespace::Sld));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// URI of the Web Map Context namespace.
pub const CONTEXT_NS_URI: &str = "http://www.opengis.net/context";

/// URI of the Styled Layer Descriptor namespace.
pub const SLD_NS_URI: &str = "http://www.opengis.net/sld";

/// URI of the XLink namespace.
pub const XLINK_NS_URI: &str = "http://www.w3.org/1999/xlink";

/// URI of the XML Schema instance namespace.
pub const XSI_NS_URI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Location of the WMC 1.0.0 schema, advertised by exported documents.
pub const CONTEXT_SCHEMA_URI: &str = "http://schemas.opengis.net/context/1.0.0/context.xsd";

/// The namespaces a WMC document may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Namespace {
    /// The Web Map Context vocabulary.
    ///
    /// Written as the default namespace of a serialized document.
    Context,

    /// Styled Layer Descriptor.
    ///
    /// Only `MinScaleDenominator` and `MaxScaleDenominator` are taken from it.
    Sld,

    /// XLink, qualifying the attributes of `OnlineResource`.
    Xlink,

    /// XML Schema instance, used for `schemaLocation` on exported roots.
    Xsi,
}

impl Namespace {
    /// Namespaces declared on the root of every serialized document.
    ///
    /// This table is the only process-wide shared state of the crate and is
    /// never mutated.
    pub const DECLARED: &'static [Namespace] =
        &[Namespace::Context, Namespace::Sld, Namespace::Xlink];

    /// Returns the namespace URI.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wmc::Namespace;
    ///
    /// assert_eq!(Namespace::Sld.uri(), "http://www.opengis.net/sld");
    /// ```
    pub fn uri(&self) -> &'static str {
        match self {
            Namespace::Context => CONTEXT_NS_URI,
            Namespace::Sld => SLD_NS_URI,
            Namespace::Xlink => XLINK_NS_URI,
            Namespace::Xsi => XSI_NS_URI,
        }
    }

    /// Returns the conventional prefix for the namespace.
    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Context => "context",
            Namespace::Sld => "sld",
            Namespace::Xlink => "xlink",
            Namespace::Xsi => "xsi",
        }
    }

    /// Whether elements of this namespace are written unprefixed.
    ///
    /// Attributes never use the default namespace, so a namespaced attribute
    /// always falls back to [`Namespace::prefix`].
    pub fn is_default(&self) -> bool {
        matches!(self, Namespace::Context)
    }

    /// Looks up a namespace by URI.
    ///
    /// Returns `None` for URIs outside the WMC vocabulary.
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            CONTEXT_NS_URI => Some(Namespace::Context),
            SLD_NS_URI => Some(Namespace::Sld),
            XLINK_NS_URI => Some(Namespace::Xlink),
            XSI_NS_URI => Some(Namespace::Xsi),
            _ => None,
        }
    }

    /// Looks up a namespace by its conventional prefix, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wmc::Namespace;
    ///
    /// assert_eq!(Namespace::from_prefix("xlink"), Some(Namespace::Xlink));
    /// assert_eq!(Namespace::from_prefix("gml"), None);
    /// ```
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_lowercase().as_str() {
            "context" => Some(Namespace::Context),
            "sld" => Some(Namespace::Sld),
            "xlink" => Some(Namespace::Xlink),
            "xsi" => Some(Namespace::Xsi),
            _ => None,
        }
    }

    /// Formats a local name in Clark notation, `{uri}local`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wmc::Namespace;
    ///
    /// assert_eq!(
    ///     Namespace::Context.clark("Layer"),
    ///     "{http://www.opengis.net/context}Layer"
    /// );
    /// ```
    pub fn clark(&self, local: &str) -> String {
        format!("{{{}}}{}", self.uri(), local)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_round_trip() {
        for ns in [
            Namespace::Context,
            Namespace::Sld,
            Namespace::Xlink,
            Namespace::Xsi,
        ] {
            assert_eq!(Namespace::from_uri(ns.uri()), Some(ns));
            assert_eq!(Namespace::from_prefix(ns.prefix()), Some(ns));
        }
    }

    #[test]
    fn test_unknown_uri() {
        assert_eq!(Namespace::from_uri("http://www.opengis.net/gml"), None);
    }

    #[test]
    fn test_declared_table() {
        assert_eq!(Namespace::DECLARED.len(), 3);
        assert!(Namespace::DECLARED.contains(&Namespace::Context));
        assert!(!Namespace::DECLARED.contains(&Namespace::Xsi));
        assert_eq!(
            Namespace::DECLARED.iter().filter(|ns| ns.is_default()).count(),
            1
        );
    }
}
