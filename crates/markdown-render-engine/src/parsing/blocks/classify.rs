use super::kinds::{CodeFence, Heading, ListKind, Table};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently of its neighbours. Rules are tried
/// in priority order: fence, blank, table row, heading, list item, text.
/// Fenced-code mode is not known here; the scanner only asks about fences
/// while inside a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A fence delimiter with its (possibly empty) info string.
    Fence { info: &'a str },
    /// Empty or whitespace-only.
    Blank,
    /// Pipe at both ends. Whether it is part of a table depends on the next line.
    TableRow,
    Heading { level: u8, text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    /// Anything else: paragraph text.
    Text,
}

/// Classifies a line into a [`LineClass`].
///
/// Surrounding whitespace is ignored for classification purposes.
pub fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();

    if let Some(info) = CodeFence::info(trimmed) {
        return LineClass::Fence { info };
    }
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if Table::is_row(trimmed) {
        return LineClass::TableRow;
    }
    if let Some((level, text)) = Heading::parse(trimmed) {
        return LineClass::Heading { level, text };
    }
    if let Some((kind, text)) = ListKind::item(trimmed) {
        return LineClass::ListItem { kind, text };
    }
    LineClass::Text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("```", LineClass::Fence { info: "" })]
    #[case("  ```js", LineClass::Fence { info: "js" })]
    #[case("", LineClass::Blank)]
    #[case(" \t ", LineClass::Blank)]
    #[case("| a | b |", LineClass::TableRow)]
    #[case("## Two", LineClass::Heading { level: 2, text: "Two" })]
    #[case("####### Seven", LineClass::Text)]
    #[case("3. three", LineClass::ListItem { kind: ListKind::Ordered, text: "three" })]
    #[case("  - nested looking", LineClass::ListItem { kind: ListKind::Unordered, text: "nested looking" })]
    #[case("hello world", LineClass::Text)]
    fn classifies_lines(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn fence_takes_priority_over_everything() {
        assert_eq!(classify("```| x |"), LineClass::Fence { info: "| x |" });
    }

    #[test]
    fn table_row_takes_priority_over_text() {
        assert_eq!(classify("|# not a heading|"), LineClass::TableRow);
    }
}
