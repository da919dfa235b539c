use std::borrow::Cow;

use regex::Captures;

use crate::parsing::escape::escape;

use super::kinds::{CodeSpan, Emphasis, SpanKind, Strong};

/// Formats one line of block content as inline markup.
///
/// The line is escaped first, then spans are substituted in fixed priority
/// order: code spans, strong, emphasis. Code span contents are emitted as-is
/// (already escaped) and excluded from the emphasis passes, so an emphasis
/// span never starts inside a code span or straddles one.
///
/// Unmatched delimiters are left in the output as literal text.
pub fn format_inline(line: &str) -> String {
    let escaped = escape(line);
    let mut out = String::with_capacity(escaped.len());
    let mut text_start = 0;

    for m in CodeSpan::pattern().find_iter(&escaped) {
        out.push_str(&format_emphasis(&escaped[text_start..m.start()]));
        push_element(&mut out, CodeSpan::TAG, m.as_str().trim_matches(CodeSpan::TICK));
        text_start = m.end();
    }

    out.push_str(&format_emphasis(&escaped[text_start..]));
    out
}

/// Runs the strong pass, then the emphasis pass, over text outside code spans.
fn format_emphasis(text: &str) -> String {
    let strong = substitute::<Strong>(text);
    substitute::<Emphasis>(&strong).into_owned()
}

/// Replaces every non-overlapping match of `K`'s pattern with a `K::TAG` element.
fn substitute<K: SpanKind>(text: &str) -> Cow<'_, str> {
    K::pattern().replace_all(text, |caps: &Captures<'_>| {
        let mut element = String::new();
        push_element(&mut element, K::TAG, &caps[1]);
        element
    })
}

fn push_element(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain("just text", "just text")]
    #[case::code("`a*b`", "<code>a*b</code>")]
    #[case::strong_then_emphasis(
        "**bold** and *italic*",
        "<strong>bold</strong> and <em>italic</em>"
    )]
    #[case::adjacent_code_spans("`a` `b`", "<code>a</code> <code>b</code>")]
    #[case::strong_wins_over_emphasis("**x**", "<strong>x</strong>")]
    #[case::triple_asterisks_cross_closing_tags("***x***", "<strong><em>x</strong></em>")]
    #[case::unterminated_emphasis("a *b", "a *b")]
    #[case::unterminated_strong("a **b", "a **b")]
    #[case::unterminated_code("a `b", "a `b")]
    #[case::empty_code_span_is_literal("``", "``")]
    #[case::emphasis_pairs_left_to_right("*a*b*c", "<em>a</em>b*c")]
    #[case::four_markers_make_two_spans("*a*b*c*", "<em>a</em>b<em>c</em>")]
    #[case::empty("", "")]
    fn formats_spans(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_inline(input), expected);
    }

    #[test]
    fn escapes_before_formatting() {
        assert_eq!(
            format_inline("**<b>** & `<i>`"),
            "<strong>&lt;b&gt;</strong> &amp; <code>&lt;i&gt;</code>"
        );
    }

    #[test]
    fn code_span_contents_are_never_emphasised() {
        assert_eq!(
            format_inline("`*not*` *yes*"),
            "<code>*not*</code> <em>yes</em>"
        );
        assert_eq!(format_inline("`**x**`"), "<code>**x**</code>");
    }

    #[test]
    fn emphasis_does_not_straddle_code_span() {
        assert_eq!(format_inline("*a `b` c*"), "*a <code>b</code> c*");
    }

    #[test]
    fn emphasis_inside_text_around_code() {
        assert_eq!(
            format_inline("*a* `b` **c**"),
            "<em>a</em> <code>b</code> <strong>c</strong>"
        );
    }
}
