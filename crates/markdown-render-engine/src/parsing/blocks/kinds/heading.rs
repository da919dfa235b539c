/// ATX heading: one to six `#` followed by at least one space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the trimmed heading text if `line` is a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let level = line.len() - rest.len();
        if !(1..=Self::MAX_LEVEL).contains(&level) || !rest.starts_with(' ') {
            return None;
        }
        let level = u8::try_from(level).ok()?;
        Some((level, rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("###### X", Some((6, "X")))]
    #[case("##   spaced  ", Some((2, "spaced")))]
    #[case("####### X", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("plain", None)]
    fn parses_heading(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
