use serde::{Deserialize, Serialize};

use crate::url::UrlType;

/// An output format a layer can be requested in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    /// MIME type, the element text.
    pub name: Option<String>,
    pub current: Option<String>,
}

impl Format {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            current: None,
        }
    }

    /// Flag this format as current.
    pub fn current(mut self) -> Self {
        self.current = Some("1".to_string());
        self
    }

    pub fn is_current(&self) -> bool {
        is_true(self.current.as_deref())
    }
}

/// A named rendering style of a layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub current: Option<String>,
    pub name: String,
    pub title: String,
    pub abstract_: Option<String>,
    pub legend_url: Option<UrlType>,
}

impl Style {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Flag this style as current.
    pub fn current(mut self) -> Self {
        self.current = Some("1".to_string());
        self
    }

    pub fn is_current(&self) -> bool {
        is_true(self.current.as_deref())
    }
}

fn is_true(flag: Option<&str>) -> bool {
    matches!(flag, Some("1") | Some("true"))
}
