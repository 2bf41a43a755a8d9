//! Paragraph element
//!
//! A paragraph is the prose between two boundaries. Boundaries are blank lines, block-level
//! commands, verbatim commands and the end of the comment. A paragraph may be empty: a block
//! command with nothing after it still owns one.
//!
//! Examples:
//! - `// Aaa` followed by `// Bbb` is one paragraph with two text nodes
//! - A blank `//` line between them makes two paragraphs

use super::super::traits::{visit_inlines, AstNode, Visitor};
use super::inline::InlineContent;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph<'src> {
    pub content: Vec<InlineContent<'src>>,
    pub offset: usize,
}

impl<'src> Paragraph<'src> {
    pub fn new(content: Vec<InlineContent<'src>>) -> Self {
        Paragraph { content, offset: 0 }
    }

    pub fn empty() -> Self {
        Paragraph::new(Vec::new())
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the paragraph has no content other than whitespace text
    pub fn is_whitespace(&self) -> bool {
        self.content.iter().all(InlineContent::is_whitespace)
    }

    /// Concatenated text of the text nodes, ignoring commands and tags
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(InlineContent::as_text)
            .map(|t| t.text)
            .collect()
    }
}

impl AstNode for Paragraph<'_> {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        let text = self.text();
        if text.chars().count() > 50 {
            format!("{}…", text.chars().take(50).collect::<String>())
        } else {
            text
        }
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
        visit_inlines(visitor, &self.content);
        visitor.leave_paragraph(self);
    }
}

impl fmt::Display for Paragraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} nodes)", self.content.len())
    }
}
