//! Conversion between Markdown documents and a simplified JSON model
//!
//!     This crate converts Markdown documents into a deliberately narrow
//!     section/subsection JSON model suitable for editing or storage, and back.
//!     Markdown itself is never parsed or rendered here: an external engine
//!     (pandoc) handles the text, and this crate transforms its AST.
//!
//! Architecture
//!
//!     The goal is to keep the tree transformations pure and fully testable
//!     in-memory. The external engine sits behind a two-method trait
//!     (./engine.rs), so nothing in the core depends on process execution; the
//!     pandoc subprocess implementation (./pandoc.rs) is gated behind the
//!     "pandoc" feature.
//!
//!     This is a pure lib, that is, it powers the mdjson CLI but is shell
//!     agnostic: no code here supposes a shell environment, be it std print,
//!     env handling for arguments, or exit codes. Reversibility results are
//!     returned as values for the caller to report.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── ast.rs                  # Pandoc JSON AST model
//!     ├── simplified.rs           # Simplified document model (the durable format)
//!     ├── engine.rs               # MarkdownEngine trait (external collaborator seam)
//!     ├── pandoc.rs               # Subprocess engine implementation (feature "pandoc")
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown.rs         # Markdown via the engine + simplify/expand
//!     │   └── simplified.rs       # Simplified JSON (serde)
//!     ├── common                  # The transformation core
//!     │   ├── flat_to_nested.rs   # simplify: AST → simplified document
//!     │   ├── nested_to_flat.rs   # expand: simplified document → AST
//!     │   └── text.rs             # inline joining/splitting
//!     └── verify.rs               # Reversibility checks
//!
//! Core Algorithms
//!
//!     The interesting work is reconstructing the nested section/subsection
//!     representation from pandoc's flat block sequence, followed by the
//!     reverse operation (see ./common/flat_to_nested.rs and
//!     ./common/nested_to_flat.rs). Both are single-pass, deterministic and
//!     infallible; everything the narrow model cannot hold is dropped
//!     silently, and ./verify.rs exists to surface that loss as a warning
//!     rather than pretend it doesn't happen.
//!
//! Library Choices
//!
//!     Markdown handling is offloaded entirely to pandoc as a subprocess; the
//!     scope here is adapting pandoc's AST to the simplified model and back,
//!     never writing a markdown parser or serializer. Serde models both wire
//!     formats directly, which keeps the adapters to plain data mapping.

pub mod ast;
pub mod common;
pub mod engine;
pub mod error;
pub mod format;
pub mod formats;
#[cfg(feature = "pandoc")]
pub mod pandoc;
pub mod registry;
pub mod simplified;
pub mod verify;

pub use common::flat_to_nested::simplify;
pub use common::nested_to_flat::expand;
pub use engine::MarkdownEngine;
pub use error::ConvertError;
pub use format::Format;
pub use registry::FormatRegistry;
