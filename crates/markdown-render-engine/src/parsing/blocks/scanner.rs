use std::mem;

use super::{
    classify::{LineClass, classify},
    cursor::LineCursor,
    kinds::{ListKind, Table},
    types::Block,
};

/// Scanner state. Fenced code suspends classification until the next fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    Normal,
    InFencedCode {
        /// Info string of the opening fence.
        info: &'a str,
        /// Lines accumulated so far, verbatim.
        lines: Vec<&'a str>,
    },
}

/// Turns document lines into [`Block`]s, one at a time, in source order.
///
/// Every line ends up in exactly one block or is a skipped blank/fence line.
/// A block is complete when it is yielded; the cursor never revisits it.
/// Scanning is total: anything unrecognised becomes paragraph text, and a
/// fence left open at end of input still yields its code block.
#[derive(Debug, Clone)]
pub struct BlockScanner<'a> {
    cursor: LineCursor<'a>,
    mode: Mode<'a>,
}

impl<'a> BlockScanner<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self {
            cursor: LineCursor::new(lines),
            mode: Mode::Normal,
        }
    }

    pub fn mode(&self) -> &Mode<'a> {
        &self.mode
    }

    /// Handles the line at the cursor. Returns a block once one is complete.
    fn step(&mut self, line: &'a str) -> Option<Block<'a>> {
        if matches!(self.mode, Mode::InFencedCode { .. }) {
            return self.step_in_code(line);
        }

        match classify(line) {
            LineClass::Fence { info } => {
                self.cursor.bump();
                log::trace!("fence opened at line {} ({info:?})", self.cursor.pos());
                self.mode = Mode::InFencedCode {
                    info,
                    lines: Vec::new(),
                };
                None
            }
            LineClass::Blank => {
                self.cursor.bump();
                None
            }
            LineClass::TableRow => Some(self.table(line)),
            LineClass::Heading { level, text } => {
                self.cursor.bump();
                Some(Block::Heading { level, text })
            }
            LineClass::ListItem { kind, .. } => Some(self.list(kind)),
            LineClass::Text => Some(self.paragraph()),
        }
    }

    fn step_in_code(&mut self, line: &'a str) -> Option<Block<'a>> {
        self.cursor.bump();
        if let LineClass::Fence { .. } = classify(line) {
            return self.close_fence();
        }
        if let Mode::InFencedCode { lines, .. } = &mut self.mode {
            lines.push(line);
        }
        None
    }

    /// Leaves code mode, yielding the accumulated block if there was one.
    fn close_fence(&mut self) -> Option<Block<'a>> {
        match mem::replace(&mut self.mode, Mode::Normal) {
            Mode::InFencedCode { info, lines } => Some(Block::CodeFence { info, lines }),
            Mode::Normal => None,
        }
    }

    /// Header row, separator row, then body rows. Falls back to a one-line
    /// paragraph when the second row is missing or not a separator; the
    /// following lines are then scanned afresh.
    ///
    /// Only the next two lines decide the outcome, so a long run of pipe
    /// lines without a separator is degraded in linear time.
    fn table(&mut self, first: &'a str) -> Block<'a> {
        let confirmed = match self.cursor.upcoming(2) {
            [_, second] => {
                classify(second) == LineClass::TableRow && Table::is_separator(second)
            }
            _ => false,
        };

        if !confirmed {
            log::debug!(
                "line {} looks like a table row but has no separator, treating as text",
                self.cursor.pos() + 1
            );
            self.cursor.bump();
            return Block::Paragraph {
                lines: vec![first.trim()],
            };
        }

        let run = self.cursor.lookahead(|l| classify(l) == LineClass::TableRow);
        let rows = self.cursor.bump_n(run);
        Block::Table {
            header: Table::cells(first),
            rows: rows.into_iter().skip(2).map(Table::cells).collect(),
        }
    }

    fn list(&mut self, kind: ListKind) -> Block<'a> {
        let run = self.cursor.lookahead(
            |l| matches!(classify(l), LineClass::ListItem { kind: k, .. } if k == kind),
        );
        let items = self
            .cursor
            .bump_n(run)
            .into_iter()
            .filter_map(|line| match classify(line) {
                LineClass::ListItem { text, .. } => Some(text),
                _ => None,
            })
            .collect();
        Block::List { kind, items }
    }

    fn paragraph(&mut self) -> Block<'a> {
        let run = self.cursor.lookahead(|l| classify(l) == LineClass::Text);
        let lines = self.cursor.bump_n(run).into_iter().map(str::trim).collect();
        Block::Paragraph { lines }
    }
}

impl<'a> Iterator for BlockScanner<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.cursor.peek() {
            if let Some(block) = self.step(line) {
                log::trace!("{} ends before line {}", block.name(), self.cursor.pos() + 1);
                return Some(block);
            }
        }

        if matches!(self.mode, Mode::InFencedCode { .. }) {
            log::debug!("unterminated code fence at end of input, emitting remaining lines");
        }
        self.close_fence()
    }
}
