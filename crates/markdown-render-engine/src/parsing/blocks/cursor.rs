/// A forward-only cursor over the lines of a document.
///
/// The position never decreases and never passes the number of lines.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    i: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, i: 0 }
    }

    /// Index of the next unconsumed line.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// The next line without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.i).copied()
    }

    /// Consumes and returns the next line.
    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.i += 1;
        Some(line)
    }

    /// Counts the consecutive upcoming lines, starting at the cursor, for
    /// which `pred` holds. Nothing is consumed.
    pub fn lookahead(&self, pred: impl Fn(&str) -> bool) -> usize {
        self.lines[self.i..]
            .iter()
            .take_while(|line| pred(line))
            .count()
    }

    /// The next `n` lines without consuming them (fewer at end of input).
    pub fn upcoming(&self, n: usize) -> &[&'a str] {
        let end = self.i.saturating_add(n).min(self.lines.len());
        &self.lines[self.i..end]
    }

    /// Consumes up to `n` lines and returns them.
    pub fn bump_n(&mut self, n: usize) -> Vec<&'a str> {
        let taken = self.upcoming(n).to_vec();
        self.i += taken.len();
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(lines: &[&'static str]) -> LineCursor<'static> {
        LineCursor::new(lines.to_vec())
    }

    #[test]
    fn cursor_basics() {
        let mut cur = cursor(&["a", "b"]);
        assert_eq!(cur.pos(), 0);
        assert!(cur.peek().is_some());
        assert_eq!(cur.peek(), Some("a"));
        assert_eq!(cur.bump(), Some("a"));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.bump(), Some("b"));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn empty_input() {
        let mut cur = cursor(&[]);
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_at_eof_does_not_advance() {
        let mut cur = cursor(&["x"]);
        cur.bump();
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn lookahead_counts_without_consuming() {
        let cur = cursor(&["- a", "- b", "c", "- d"]);
        assert_eq!(cur.lookahead(|l| l.starts_with('-')), 2);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn lookahead_at_eof_is_zero() {
        let mut cur = cursor(&["a"]);
        cur.bump();
        assert_eq!(cur.lookahead(|_| true), 0);
    }

    #[test]
    fn bump_n_stops_at_end() {
        let mut cur = cursor(&["a", "b", "c"]);
        assert_eq!(cur.bump_n(2), vec!["a", "b"]);
        assert_eq!(cur.bump_n(10), vec!["c"]);
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 3);
    }

    #[test]
    fn upcoming_is_bounded() {
        let cur = cursor(&["a", "b"]);
        assert_eq!(cur.upcoming(5), &["a", "b"]);
        assert_eq!(cur.upcoming(1), &["a"]);
    }
}
