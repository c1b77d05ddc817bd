//! Simplified-JSON format implementation
//!
//! The durable file format: the simplified document serialized as JSON.
//! Parsing a structurally invalid document is a hard error; indentation is
//! a presentation-only parameter (`indent`, spaces per level, `0` for
//! compact output) and not part of the contract.

use crate::error::ConvertError;
use crate::format::Format;
use crate::simplified::SimplifiedDocument;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::HashMap;

const DEFAULT_INDENT: usize = 2;

/// Format implementation for the simplified JSON model.
pub struct SimplifiedJsonFormat {
    indent: usize,
}

impl SimplifiedJsonFormat {
    pub fn new() -> Self {
        SimplifiedJsonFormat {
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the default indentation used when no option overrides it.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for SimplifiedJsonFormat {
    fn default() -> Self {
        SimplifiedJsonFormat::new()
    }
}

impl Format for SimplifiedJsonFormat {
    fn name(&self) -> &str {
        "simplified"
    }

    fn description(&self) -> &str {
        "Simplified section/subsection JSON document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<SimplifiedDocument, ConvertError> {
        serde_json::from_str(source)
            .map_err(|e| ConvertError::ParseError(format!("Not a simplified document: {e}")))
    }

    fn serialize(&self, doc: &SimplifiedDocument) -> Result<String, ConvertError> {
        to_json_string(doc, self.indent)
    }

    fn serialize_with_options(
        &self,
        doc: &SimplifiedDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        let mut indent = self.indent;
        for (key, value) in options {
            match key.as_str() {
                "indent" => {
                    indent = value.parse().map_err(|_| {
                        ConvertError::SerializationError(format!(
                            "Invalid indent value '{value}'"
                        ))
                    })?;
                }
                other => {
                    return Err(ConvertError::NotSupported(format!(
                        "Format 'simplified' does not support parameter '{other}'"
                    )))
                }
            }
        }
        to_json_string(doc, indent)
    }
}

fn to_json_string(doc: &SimplifiedDocument, indent: usize) -> Result<String, ConvertError> {
    if indent == 0 {
        return serde_json::to_string(doc)
            .map_err(|e| ConvertError::SerializationError(e.to_string()));
    }

    let indent_bytes = vec![b' '; indent];
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)
        .map_err(|e| ConvertError::SerializationError(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ConvertError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplified::{ContentItem, Section};

    fn sample_doc() -> SimplifiedDocument {
        let mut section = Section::titled("T");
        section.content.push(ContentItem::Text("x".to_string()));
        SimplifiedDocument {
            sections: vec![section],
        }
    }

    #[test]
    fn parse_rejects_malformed_documents() {
        let format = SimplifiedJsonFormat::new();
        let err = format.parse("{\"sections\": [{}]}").unwrap_err();
        assert!(matches!(err, ConvertError::ParseError(_)));
    }

    #[test]
    fn parse_round_trips_serialize() {
        let format = SimplifiedJsonFormat::new();
        let doc = sample_doc();
        let text = format.serialize(&doc).unwrap();
        assert_eq!(format.parse(&text).unwrap(), doc);
    }

    #[test]
    fn indent_zero_is_compact() {
        let format = SimplifiedJsonFormat::new().with_indent(0);
        let text = format.serialize(&sample_doc()).unwrap();
        assert!(!text.contains('\n'));
    }

    #[test]
    fn indent_option_overrides_default() {
        let format = SimplifiedJsonFormat::new();
        let mut options = HashMap::new();
        options.insert("indent".to_string(), "4".to_string());
        let text = format
            .serialize_with_options(&sample_doc(), &options)
            .unwrap();
        assert!(text.contains("\n    \"sections\""));
    }

    #[test]
    fn unknown_options_are_rejected() {
        let format = SimplifiedJsonFormat::new();
        let mut options = HashMap::new();
        options.insert("theme".to_string(), "dark".to_string());
        let result = format.serialize_with_options(&sample_doc(), &options);
        assert!(matches!(result, Err(ConvertError::NotSupported(_))));
    }
}
