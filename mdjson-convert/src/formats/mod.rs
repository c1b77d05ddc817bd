//! Format implementations
//!
//! This module contains the two format implementations that convert between
//! textual representations and the simplified document model.

pub mod markdown;
pub mod simplified;

pub use markdown::MarkdownFormat;
pub use simplified::SimplifiedJsonFormat;
