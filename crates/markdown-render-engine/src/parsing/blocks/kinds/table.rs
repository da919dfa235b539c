/// Pipe-delimited table rows.
///
/// A table is a run of rows whose second row is a separator such as
/// `|---|:---:|`. The separator only confirms the table; it is never rendered.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Whether a trimmed line has a pipe at both ends.
    pub fn is_row(line: &str) -> bool {
        line.len() >= 2 && line.starts_with(Self::PIPE) && line.ends_with(Self::PIPE)
    }

    /// Whether a row is a header separator: only hyphens, colons, spaces and
    /// pipes, with at least one hyphen.
    pub fn is_separator(line: &str) -> bool {
        let inner = Self::inner(line);
        inner.contains('-')
            && inner
                .chars()
                .all(|c| matches!(c, '-' | ':' | ' ' | Self::PIPE))
    }

    /// Splits a row into trimmed cell texts.
    pub fn cells(line: &str) -> Vec<&str> {
        Self::inner(line).split(Self::PIPE).map(str::trim).collect()
    }

    fn inner(line: &str) -> &str {
        let line = line.trim();
        let line = line.strip_prefix(Self::PIPE).unwrap_or(line);
        line.strip_suffix(Self::PIPE).unwrap_or(line)
    }
}
