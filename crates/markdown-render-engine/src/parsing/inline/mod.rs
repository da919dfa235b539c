//! # Inline Formatting
//!
//! Turns one line of block content into markup by recognising code spans,
//! strong spans and emphasis spans.
//!
//! ## Architecture
//!
//! Each span kind is a single left-to-right, non-overlapping substitution
//! pass over the escaped line. There is no tokenizer and no nesting model:
//! the first matching span wins and unmatched delimiters are left as text.
//!
//! ## Modules
//!
//! - **`kinds`**: Span types with owned delimiters and patterns (CodeSpan, Strong, Emphasis)
//! - **`parser`**: `format_inline()` main entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans are resolved first and their contents are never revisited:
//! `` `a*b*c` `` renders as a single code span, not as code containing emphasis.
//! Strong is resolved before emphasis so `**x**` is never split into two
//! single-asterisk spans.

pub mod kinds;
pub mod parser;

pub use parser::format_inline;
