//! Reversibility verification.
//!
//! Detects, but does not prevent, information loss across a full round
//! trip through the external engine. The simplified model narrows the
//! document deliberately, so a divergence is a diagnostic: callers report
//! it and keep the output they already produced. Nothing here rolls back
//! or blocks a conversion.
//!
//! The engine comes in as a trait object so both checks run against an
//! in-memory implementation in tests.

use crate::ast::Ast;
use crate::common::flat_to_nested::simplify;
use crate::common::nested_to_flat::expand;
use crate::engine::MarkdownEngine;
use crate::error::ConvertError;
use crate::simplified::SimplifiedDocument;

/// Outcome of a reversibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTrip {
    /// Converting back reproduced the original.
    Stable,
    /// Information was lost; the conversion stands, but is not reversible.
    Diverged,
}

/// Check the markdown → simplified direction.
///
/// Re-renders the simplified document and compares it to the original
/// source, both trimmed of leading/trailing whitespace.
pub fn check_markdown_round_trip(
    engine: &dyn MarkdownEngine,
    source: &str,
    simplified: &SimplifiedDocument,
) -> Result<RoundTrip, ConvertError> {
    let rendered = engine.render(&expand(simplified))?;
    if rendered.trim() == source.trim() {
        Ok(RoundTrip::Stable)
    } else {
        Ok(RoundTrip::Diverged)
    }
}

/// Check the simplified → markdown direction.
///
/// Re-reads the rendered markdown and compares the resulting simplified
/// document to the original by deep structural equality.
pub fn check_simplified_round_trip(
    engine: &dyn MarkdownEngine,
    rendered: &str,
    original: &SimplifiedDocument,
) -> Result<RoundTrip, ConvertError> {
    let reparsed: Ast = engine.parse(rendered)?;
    if simplify(&reparsed) == *original {
        Ok(RoundTrip::Stable)
    } else {
        Ok(RoundTrip::Diverged)
    }
}
