use std::borrow::Cow;

/// Escapes the markup-significant characters `&`, `<` and `>` in raw text.
///
/// Ampersands are replaced before angle brackets, so the `&` introduced by
/// `&lt;` is never escaped a second time. Apply exactly once per unit of raw
/// text; escaping already-escaped output double-encodes it.
pub fn escape(raw: &str) -> Cow<'_, str> {
    html_escape::encode_text(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("a & b", "a &amp; b")]
    #[case("<script>", "&lt;script&gt;")]
    #[case("&lt;", "&amp;lt;")]
    #[case("", "")]
    #[case("\"quotes\" and 'apostrophes'", "\"quotes\" and 'apostrophes'")]
    fn escapes_markup_characters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape(raw), expected);
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        assert!(matches!(escape("nothing here"), Cow::Borrowed(_)));
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape("naïve – 日本語 <"), "naïve – 日本語 &lt;");
    }
}
