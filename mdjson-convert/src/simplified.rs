//! The simplified document model.
//!
//! A strict forest of values: a document owns its sections, a section owns
//! its content items and subsections, a subsection owns its content items.
//! Exactly one nesting level is supported; a subsection cannot contain
//! further subsections. Trees are built in one pass and never mutated
//! afterwards.
//!
//! The serde shape is the durable file format:
//!
//! ```json
//! { "sections": [ { "title": "...",
//!                   "content": [ "paragraph", ["item", "item"] ],
//!                   "subsections": [ { "title": "...", "content": [...] } ] } ] }
//! ```
//!
//! Content items persist as a bare string (paragraph) or an array of
//! strings (bullet list), so `ContentItem` is untagged.

use serde::{Deserialize, Serialize};

/// Root of the simplified model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimplifiedDocument {
    pub sections: Vec<Section>,
}

/// A top-level section, created by a level-1 heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub content: Vec<ContentItem>,
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// A new, empty section with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            content: Vec::new(),
            subsections: Vec::new(),
        }
    }
}

/// A second-level section, created by a level-2 heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    pub title: String,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

impl Subsection {
    /// A new, empty subsection with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Subsection {
            title: title.into(),
            content: Vec::new(),
        }
    }
}

/// A paragraph-derived string or bullet-list-derived list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Text(String),
    List(Vec<String>),
}
