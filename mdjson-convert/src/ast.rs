//! Pandoc JSON AST data model.
//!
//! This is the subset of pandoc's AST that the simplified document model
//! reads from and writes to, plus explicit `Unsupported` arms for everything
//! else. Pandoc serializes AST nodes as `{"t": <kind>, "c": <content>}`
//! objects, which maps directly onto serde's adjacently tagged enum
//! representation.
//!
//! Unknown kinds are not an error: they deserialize into the `Unsupported`
//! variant and the reader drops them. This turns the silent fallthrough of a
//! tag-string dispatch into an auditable branch.

use serde::{Deserialize, Serialize};

/// The api version stamped on every AST this library emits.
///
/// Pandoc refuses JSON input whose major/minor version doesn't match its
/// own, so writers stamp a fixed, known-good value rather than echoing
/// whatever the parser produced. The marker is never validated on read.
pub const PANDOC_API_VERSION: [u64; 3] = [1, 23, 1];

/// A pandoc document: version marker, metadata, block sequence.
///
/// `meta` is carried opaquely; nothing in the simplified model maps to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    #[serde(rename = "pandoc-api-version", default = "default_api_version")]
    pub api_version: Vec<u64>,
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

fn default_api_version() -> Vec<u64> {
    PANDOC_API_VERSION.to_vec()
}

impl Ast {
    /// Build an AST around a block sequence, stamping the fixed api version
    /// and an empty meta map.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Ast {
            api_version: PANDOC_API_VERSION.to_vec(),
            meta: serde_json::Map::new(),
            blocks,
        }
    }
}

/// Pandoc attributes: `[identifier, classes, key-value pairs]`.
///
/// Serializes as a JSON array. Writers always emit the empty attr;
/// identifiers are never reconstructed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attr(pub String, pub Vec<String>, pub Vec<(String, String)>);

impl Attr {
    pub fn empty() -> Self {
        Attr::default()
    }
}

/// A block-level AST node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Block {
    /// `[level, attr, inlines]`
    Header(u32, Attr, Vec<Inline>),
    Para(Vec<Inline>),
    /// Like `Para` but without paragraph semantics; pandoc uses it for
    /// tight list items.
    Plain(Vec<Inline>),
    /// One inner block sequence per list item.
    BulletList(Vec<Vec<Block>>),
    /// Any block kind outside the recognized set.
    #[serde(other)]
    Unsupported,
}

impl Block {
    /// The inline content of this block, if it has any.
    pub fn inline_content(&self) -> Option<&[Inline]> {
        match self {
            Block::Header(_, _, inlines) => Some(inlines),
            Block::Para(inlines) | Block::Plain(inlines) => Some(inlines),
            Block::BulletList(_) | Block::Unsupported => None,
        }
    }
}

/// An inline-level AST node.
///
/// Only plain words and word separators are modeled; formatting spans,
/// links, code and the rest deserialize as `Unsupported` and are omitted
/// from joined text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Inline {
    Str(String),
    Space,
    #[serde(other)]
    Unsupported,
}
