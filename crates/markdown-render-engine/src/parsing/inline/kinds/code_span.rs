use std::sync::OnceLock;

use regex::Regex;

use super::SpanKind;

/// Code span inline type with owned delimiter.
///
/// Code spans are raw zones: nothing inside them is formatted further.
/// Only single-backtick delimiters are recognised, and the content must be
/// at least one non-backtick character.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}

impl SpanKind for CodeSpan {
    const TAG: &'static str = "code";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
    }
}
