//! Markdown format implementation
//!
//! Markdown never passes through this crate as anything but opaque text:
//! the external engine parses it to a pandoc AST and renders ASTs back,
//! and this format wraps that with the simplify/expand transforms.
//!
//! # Element Mapping Table
//!
//! | Markdown element      | Simplified equivalent     | Notes                                    |
//! |-----------------------|---------------------------|------------------------------------------|
//! | `#` heading           | Section                   | Title text, spacing collapsed            |
//! | `##` heading          | Subsection                | Attached to the most recent section      |
//! | `###`+ heading        | (none)                    | Dropped entirely                         |
//! | Paragraph             | Text content item         | Plain text only                          |
//! | Bullet list           | List content item         | First block of each item, text only      |
//! | Anything else         | (none)                    | Dropped                                  |
//!
//! # Lossy Conversions
//!
//! The following are lost on import and never reconstructed:
//! - Inline formatting (emphasis, links, code spans, images)
//! - Heading identifiers and attributes
//! - Heading levels beyond two
//! - Block types outside heading/paragraph/bullet-list
//! - Irregular whitespace (collapsed to single spaces)
//!
//! The reversibility verifier exists to flag exactly these cases.

use crate::common::flat_to_nested::simplify;
use crate::common::nested_to_flat::expand;
use crate::engine::MarkdownEngine;
use crate::error::ConvertError;
use crate::format::Format;
use crate::simplified::SimplifiedDocument;

/// Format implementation for Markdown, backed by an injected engine.
pub struct MarkdownFormat {
    engine: Box<dyn MarkdownEngine>,
}

impl MarkdownFormat {
    pub fn new(engine: Box<dyn MarkdownEngine>) -> Self {
        MarkdownFormat { engine }
    }
}

#[cfg(feature = "pandoc")]
impl Default for MarkdownFormat {
    fn default() -> Self {
        MarkdownFormat::new(Box::new(crate::pandoc::PandocEngine::new()))
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown document text, converted via the external engine"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<SimplifiedDocument, ConvertError> {
        let ast = self.engine.parse(source)?;
        Ok(simplify(&ast))
    }

    fn serialize(&self, doc: &SimplifiedDocument) -> Result<String, ConvertError> {
        self.engine.render(&expand(doc))
    }
}
