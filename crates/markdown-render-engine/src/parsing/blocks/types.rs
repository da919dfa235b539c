use super::kinds::ListKind;

/// One classified run of source lines, ready to be emitted as markup.
///
/// Blocks borrow their text from the document and live only until they are
/// written out. Text is stored raw (unescaped); escaping and inline
/// formatting happen at emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`..`######` heading.
    Heading { level: u8, text: &'a str },
    /// One or more text lines, joined with spaces on output.
    Paragraph { lines: Vec<&'a str> },
    /// A maximal run of same-kind list items, markers stripped.
    List { kind: ListKind, items: Vec<&'a str> },
    /// Header cells plus body rows; the separator row is not kept.
    Table {
        header: Vec<&'a str>,
        rows: Vec<Vec<&'a str>>,
    },
    /// Verbatim lines between fences. `info` is the opening fence's
    /// language tag, which is not rendered.
    CodeFence { info: &'a str, lines: Vec<&'a str> },
}

impl Block<'_> {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List {
                kind: ListKind::Ordered,
                ..
            } => "ordered list",
            Block::List {
                kind: ListKind::Unordered,
                ..
            } => "unordered list",
            Block::Table { .. } => "table",
            Block::CodeFence { .. } => "code fence",
        }
    }
}
