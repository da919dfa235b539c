//! Page assembly: wraps a rendered fragment in a complete HTML document.
//!
//! Kept apart from [`crate::parsing`], which never sees titles or styling.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{Document, blocks::Block};

/// Static document shell around a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub title: String,
    /// Stylesheet href, linked from the document head when present.
    pub stylesheet: Option<String>,
}

impl PageTemplate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: None,
        }
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Wraps `fragment` (the output of [`crate::render`]) in the page shell.
    pub fn wrap(&self, fragment: &str) -> String {
        let mut page = String::with_capacity(fragment.len() + 256);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        page.push_str("<title>");
        page.push_str(&encode_text(&self.title));
        page.push_str("</title>\n");
        if let Some(href) = &self.stylesheet {
            page.push_str("<link rel=\"stylesheet\" href=\"");
            page.push_str(&encode_double_quoted_attribute(href));
            page.push_str("\">\n");
        }
        page.push_str("</head>\n<body>\n<article class=\"document\">\n");
        page.push_str(fragment);
        if !fragment.is_empty() && !fragment.ends_with('\n') {
            page.push('\n');
        }
        page.push_str("</article>\n</body>\n</html>\n");
        page
    }
}

/// Text of the first level-1 heading outside fenced code, if any.
pub fn title_from_markdown(input: &str) -> Option<String> {
    let doc = Document::new(input);
    doc.blocks().find_map(|block| match block {
        Block::Heading { level: 1, text } => Some(text.to_string()),
        _ => None,
    })
}
