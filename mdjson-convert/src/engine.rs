//! The external markdown engine boundary.
//!
//! All textual markdown parsing and rendering is delegated to an external
//! converter; the core only ever sees its AST. Keeping the boundary to a
//! two-method trait means the transformation and verification code has no
//! dependency on process execution and can be exercised with an in-memory
//! implementation in tests.

use crate::ast::Ast;
use crate::error::ConvertError;

/// Narrow capability interface over the external converter.
///
/// Implementations are expected to reject malformed input text and to
/// accept any AST produced by the writer. Calls are one-shot and
/// stateless.
pub trait MarkdownEngine: Send + Sync {
    /// Parse markdown source into a pandoc AST.
    fn parse(&self, source: &str) -> Result<Ast, ConvertError>;

    /// Render a pandoc AST to markdown text.
    fn render(&self, ast: &Ast) -> Result<String, ConvertError>;
}
