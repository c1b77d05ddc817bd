//! Format trait definition
//!
//! This module defines the core Format trait that both document formats
//! implement. The trait provides a uniform interface for parsing into and
//! serializing from the simplified document model.

use crate::error::ConvertError;
use crate::simplified::SimplifiedDocument;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors provide conversion between a textual representation and the
/// simplified document model. Formats can support parsing, serialization,
/// or both.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "simplified")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → SimplifiedDocument)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (SimplifiedDocument → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a simplified document
    fn parse(&self, _source: &str) -> Result<SimplifiedDocument, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a simplified document into source text
    fn serialize(&self, _doc: &SimplifiedDocument) -> Result<String, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a simplified document, optionally using extra parameters.
    ///
    /// Parameters are presentation-only (e.g. JSON indentation) and never
    /// part of the persisted contract. Formats without parameters can rely
    /// on the default implementation, which delegates to
    /// [`Format::serialize`] and rejects any parameter it is handed.
    fn serialize_with_options(
        &self,
        doc: &SimplifiedDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(ConvertError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
