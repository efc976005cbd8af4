use serde::{Deserialize, Serialize};

/// A dimension (time, elevation, ...) of a layer and the value chosen for it.
///
/// Every field maps to an attribute of `Dimension`, except `values` which is
/// the element text listing the available extent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: Option<String>,
    pub units: Option<String>,
    pub unit_symbol: Option<String>,
    pub user_value: Option<String>,
    pub default: Option<String>,
    pub multiple_values: Option<String>,
    pub nearest_value: Option<String>,
    pub current: Option<String>,
    pub values: Option<String>,
}

impl Dimension {
    pub fn new(name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            units: Some(units.into()),
            ..Self::default()
        }
    }

    /// Attribute names paired with their values, in schema order.
    pub fn attributes(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("name", self.name.as_deref()),
            ("units", self.units.as_deref()),
            ("unitSymbol", self.unit_symbol.as_deref()),
            ("userValue", self.user_value.as_deref()),
            ("default", self.default.as_deref()),
            ("multipleValues", self.multiple_values.as_deref()),
            ("nearestValue", self.nearest_value.as_deref()),
            ("current", self.current.as_deref()),
        ]
    }
}
