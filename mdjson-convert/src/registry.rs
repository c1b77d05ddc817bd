//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for the available formats.
//! Formats can be registered and retrieved by name, or detected from a
//! filename's extension.

use crate::error::ConvertError;
use crate::format::Format;
use crate::simplified::SimplifiedDocument;
use std::collections::HashMap;

/// Registry of document formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let doc = registry.parse(source, "markdown")?;
/// let json = registry.serialize(&doc, "simplified")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, ConvertError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ConvertError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None
    /// otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for format in self.formats.values() {
            if format.file_extensions().contains(&extension) {
                return Some(format.name().to_string());
            }
        }

        None
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<SimplifiedDocument, ConvertError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(ConvertError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a document using the specified format
    pub fn serialize(
        &self,
        doc: &SimplifiedDocument,
        format: &str,
    ) -> Result<String, ConvertError> {
        let empty = HashMap::new();
        self.serialize_with_options(doc, format, &empty)
    }

    /// Serialize a document using the specified format and options
    pub fn serialize_with_options(
        &self,
        doc: &SimplifiedDocument,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(ConvertError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize_with_options(doc, options)
    }

    /// Create a registry with the default formats
    #[cfg(feature = "pandoc")]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::markdown::MarkdownFormat::default());
        registry.register(crate::formats::simplified::SimplifiedJsonFormat::default());
        registry
    }
}

impl Default for FormatRegistry {
    #[cfg(feature = "pandoc")]
    fn default() -> Self {
        Self::with_defaults()
    }

    #[cfg(not(feature = "pandoc"))]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplified::{ContentItem, Section};

    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn supports_parsing(&self) -> bool {
            true
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn parse(&self, _source: &str) -> Result<SimplifiedDocument, ConvertError> {
            Ok(SimplifiedDocument {
                sections: vec![Section::titled("parsed")],
            })
        }
        fn serialize(&self, _doc: &SimplifiedDocument) -> Result<String, ConvertError> {
            Ok("test output".to_string())
        }
    }

    fn sample_doc() -> SimplifiedDocument {
        let mut section = Section::titled("Hello");
        section.content.push(ContentItem::Text("body".to_string()));
        SimplifiedDocument {
            sections: vec![section],
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").unwrap().name(), "test");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(ConvertError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            Err(other) => panic!("Expected FormatNotFound, got {other:?}"),
            Ok(_) => panic!("Expected FormatNotFound, got Ok(..)"),
        }
    }

    #[test]
    fn test_registry_parse_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let doc = registry.parse("input", "test").unwrap();
        assert_eq!(doc.sections[0].title, "parsed");

        let out = registry.serialize(&sample_doc(), "test").unwrap();
        assert_eq!(out, "test output");
    }

    #[test]
    fn test_registry_rejects_unknown_options() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let mut options = HashMap::new();
        options.insert("unused".to_string(), "true".to_string());
        let result = registry.serialize_with_options(&sample_doc(), "test", &options);
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat); // Replace

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_detect_format_from_filename() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert_eq!(
            registry.detect_format_from_filename("doc.tst"),
            Some("test".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("/path/to/doc.tst"),
            Some("test".to_string())
        );
        assert_eq!(registry.detect_format_from_filename("doc.unknown"), None);
        assert_eq!(registry.detect_format_from_filename("doc"), None);
    }

    #[cfg(feature = "pandoc")]
    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert!(registry.has("markdown"));
        assert!(registry.has("simplified"));
        assert_eq!(
            registry.detect_format_from_filename("notes.md"),
            Some("markdown".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("notes.json"),
            Some("simplified".to_string())
        );
    }
}
