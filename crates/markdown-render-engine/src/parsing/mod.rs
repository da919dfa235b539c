//! # Conversion
//!
//! Pure conversion from the markdown dialect to an HTML fragment. No I/O, no
//! shared state: every call owns its own cursor, mode and accumulator.

pub mod blocks;
pub mod escape;
pub mod html;
pub mod inline;

use blocks::BlockScanner;

/// Input text with line terminators normalised.
///
/// Carriage returns are removed before the text is split into lines, so
/// `\n` and `\r\n` input produce the same document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(input: &str) -> Self {
        Self {
            text: input.replace('\r', ""),
        }
    }

    /// The document's lines. A trailing terminator does not add an empty line.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// A scanner positioned at the first line.
    pub fn blocks(&self) -> BlockScanner<'_> {
        BlockScanner::new(self.lines())
    }
}

/// Converts markdown text into an HTML fragment.
///
/// Blocks are emitted in source order with no surrounding document shell.
/// Never fails: unrecognised constructs degrade to paragraph text.
pub fn render(input: &str) -> String {
    let doc = Document::new(input);
    let mut out = String::with_capacity(input.len() + input.len() / 2);

    for block in doc.blocks() {
        html::write_block(&mut out, &block);
    }

    log::debug!("rendered {} input bytes to {} bytes", input.len(), out.len());
    out
}
