/// The two list flavours. A list is a maximal run of items of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1. item`; the number itself is discarded.
    Ordered,
    /// `- item`
    Unordered,
}

impl ListKind {
    pub const BULLET: &'static str = "- ";
    pub const ORDINAL_SUFFIX: &'static str = ". ";

    /// Returns the list kind and trimmed item text if `line` is a list item.
    pub fn item(line: &str) -> Option<(ListKind, &str)> {
        if let Some(text) = line.strip_prefix(Self::BULLET) {
            return Some((ListKind::Unordered, text.trim()));
        }

        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        line[digits..]
            .strip_prefix(Self::ORDINAL_SUFFIX)
            .map(|text| (ListKind::Ordered, text.trim()))
    }

    /// Element name for the list container.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some((ListKind::Unordered, "item")))]
    #[case("1. first", Some((ListKind::Ordered, "first")))]
    #[case("42. answer", Some((ListKind::Ordered, "answer")))]
    #[case("-item", None)]
    #[case("1.5 apples", None)]
    #[case("1.", None)]
    #[case(". dot", None)]
    #[case("* star", None)]
    fn recognises_items(#[case] line: &str, #[case] expected: Option<(ListKind, &str)>) {
        assert_eq!(ListKind::item(line), expected);
    }

    #[test]
    fn tags() {
        assert_eq!(ListKind::Ordered.tag(), "ol");
        assert_eq!(ListKind::Unordered.tag(), "ul");
    }
}
