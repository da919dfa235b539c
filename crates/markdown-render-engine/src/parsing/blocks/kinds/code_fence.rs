/// Fenced code block delimiters.
///
/// A fence line is three or more backticks, optionally followed by an info
/// string (usually a language tag). The same kind of line both opens and
/// closes a block.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TICK: char = '`';

    /// Returns the info string if `line` is a fence delimiter.
    ///
    /// `line` is expected to be trimmed already. The info string is empty
    /// when the fence carries no language tag.
    pub fn info(line: &str) -> Option<&str> {
        if !line.starts_with(Self::BACKTICKS) {
            return None;
        }
        Some(line.trim_start_matches(Self::TICK).trim())
    }
}
