//! Crate-level error types.
//!
//! Only boundary operations (loading options, catalogs and replay scripts)
//! can fail. Per-frame engine operations fall back to a valid state instead
//! of returning errors.

use std::fmt;

/// Errors produced by the vitrine crate.
#[derive(Debug)]
pub enum VitrineError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Catalog or script JSON parsing failure.
    CatalogParse(String),
    /// Catalog parsed but violates an identity constraint.
    InvalidCatalog(String),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
            Self::InvalidCatalog(msg) => write!(f, "invalid catalog: {msg}"),
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for VitrineError {
    fn from(e: serde_json::Error) -> Self {
        Self::CatalogParse(e.to_string())
    }
}
