//! Crate-level error type for WMC parsing, serialization and export.

use std::fmt;

use thiserror::Error;

use crate::export::MapViewError;
use crate::xml::deserialize::DeserializeError;
use crate::xml::serialize::SerializeError;

/// A comprehensive error type for WMC documents.
///
/// Stage-specific errors convert into this type with `?`. A missing mandatory
/// element is lifted into [`WmcError::MalformedDocument`] so callers can match
/// on it without digging into the deserialize layer.
#[derive(Debug, Error)]
pub enum WmcError {
    /// The XML itself could not be read.
    #[error("XML parsing error{context}: {source}")]
    Deserialize {
        #[source]
        source: DeserializeError,
        context: ErrorContext,
    },

    /// A mandatory structural element is missing.
    #[error("Malformed WMC document{context}: {message}")]
    MalformedDocument {
        message: String,
        context: ErrorContext,
    },

    /// The tree could not be written as text.
    #[error("Serialization error: {0}")]
    Serialize(#[from] SerializeError),

    /// The map view handed to the export builder lacks required data.
    #[error("Unsupported export input: {0}")]
    UnsupportedExportInput(#[from] MapViewError),
}

impl WmcError {
    /// Whether this error reports a structurally invalid document.
    pub fn is_malformed(&self) -> bool {
        matches!(self, WmcError::MalformedDocument { .. })
    }

    /// Attach a description of what was being parsed.
    pub fn while_parsing(self, parsing: impl Into<String>) -> Self {
        match self {
            WmcError::Deserialize { source, context } => WmcError::Deserialize {
                source,
                context: context.with_parsing(parsing),
            },
            WmcError::MalformedDocument { message, context } => WmcError::MalformedDocument {
                message,
                context: context.with_parsing(parsing),
            },
            other => other,
        }
    }
}

impl From<DeserializeError> for WmcError {
    fn from(error: DeserializeError) -> Self {
        match error {
            DeserializeError::MalformedDocument(message) => WmcError::MalformedDocument {
                message,
                context: ErrorContext::new(),
            },
            source => WmcError::Deserialize {
                source,
                context: ErrorContext::new(),
            },
        }
    }
}

/// Context information for error reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// Additional context about what was being parsed.
    pub parsing: Option<String>,
}

impl ErrorContext {
    /// Create a new empty error context.
    pub fn new() -> Self {
        Self { parsing: None }
    }

    /// Add parsing context information.
    pub fn with_parsing<S: Into<String>>(mut self, parsing: S) -> Self {
        self.parsing = Some(parsing.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parsing {
            Some(parsing) => write!(f, " while parsing {}", parsing),
            None => Ok(()),
        }
    }
}
