//! Markup emission for scanned blocks.
//!
//! Each block element is followed by a newline; list items and table rows
//! get a line of their own. Nothing else is inserted.

use super::{
    blocks::{Block, kinds::Paragraph},
    escape::escape,
    inline::format_inline,
};

/// Appends the markup for one block to `out`.
pub fn write_block(out: &mut String, block: &Block<'_>) {
    match block {
        Block::Heading { level, text } => {
            let tag = format!("h{level}");
            push_line(out, &tag, &format_inline(text));
        }
        Block::Paragraph { lines } => {
            push_line(out, "p", &format_inline(&Paragraph::join(lines)));
        }
        Block::List { kind, items } => {
            push_open(out, kind.tag());
            for item in items {
                push_line(out, "li", &format_inline(item));
            }
            push_close(out, kind.tag());
        }
        Block::Table { header, rows } => {
            push_open(out, "table");
            push_open(out, "thead");
            push_row(out, "th", header);
            push_close(out, "thead");
            push_open(out, "tbody");
            for row in rows {
                push_row(out, "td", row);
            }
            push_close(out, "tbody");
            push_close(out, "table");
        }
        Block::CodeFence { lines, .. } => {
            out.push_str("<pre><code>");
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&escape(line));
            }
            out.push_str("</code></pre>\n");
        }
    }
}

fn push_row(out: &mut String, cell_tag: &str, cells: &[&str]) {
    out.push_str("<tr>");
    for cell in cells {
        push_element(out, cell_tag, &format_inline(cell));
    }
    out.push_str("</tr>\n");
}

fn push_line(out: &mut String, tag: &str, content: &str) {
    push_element(out, tag, content);
    out.push('\n');
}

fn push_element(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    push_close_tag(out, tag);
}

fn push_open(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(">\n");
}

fn push_close(out: &mut String, tag: &str) {
    push_close_tag(out, tag);
    out.push('\n');
}

fn push_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
