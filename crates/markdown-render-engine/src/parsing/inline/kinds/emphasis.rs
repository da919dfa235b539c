use std::sync::OnceLock;

use regex::Regex;

use super::SpanKind;

/// Strong span: content between a pair of `**` delimiters.
pub struct Strong;

impl SpanKind for Strong {
    const TAG: &'static str = "strong";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid strong regex"))
    }
}

/// Emphasis span: content between a pair of single `*` delimiters.
///
/// Must run after [`Strong`], otherwise `**x**` would be consumed as
/// emphasis around `*x`.
pub struct Emphasis;

impl SpanKind for Emphasis {
    const TAG: &'static str = "em";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("Invalid emphasis regex"))
    }
}
