/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Consecutive text lines are joined with a single space before
/// inline formatting.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOINER: &'static str = " ";

    pub fn join(lines: &[&str]) -> String {
        lines.join(Self::LINE_JOINER)
    }
}
