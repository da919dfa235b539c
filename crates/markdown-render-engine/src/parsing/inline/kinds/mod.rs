//! # Inline Kinds
//!
//! Inline span types that own their delimiters, match patterns and output
//! element names.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` `text` `` rendered as `code`, raw zone
//! - **`Strong`**: `**text**` rendered as `strong`
//! - **`Emphasis`**: `*text*` rendered as `em`
//!
//! The parser never hardcodes a delimiter; it goes through these types.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};

use regex::Regex;

/// A span kind recognised by a single regex substitution pass.
///
/// The pattern must capture the span content in group 1.
pub trait SpanKind {
    /// Element name wrapped around the matched content.
    const TAG: &'static str;

    /// Compiled pattern, built once per process.
    fn pattern() -> &'static Regex;
}
