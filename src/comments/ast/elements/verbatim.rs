//! Verbatim elements
//!
//! Verbatim content is kept exactly as written, minus comment decoration. A verbatim block
//! (`\verbatim` ... `\endverbatim`, `\code` ... `\endcode`) collects whole lines; a verbatim
//! line (`\fn ...`) takes the rest of its physical line.

use super::super::traits::{AstNode, Visitor};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbatimBlockLine<'src> {
    pub text: &'src str,
    pub offset: usize,
}

impl<'src> VerbatimBlockLine<'src> {
    pub fn new(text: &'src str, offset: usize) -> Self {
        VerbatimBlockLine { text, offset }
    }
}

impl AstNode for VerbatimBlockLine<'_> {
    fn node_type(&self) -> &'static str {
        "VerbatimBlockLine"
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.text)
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_verbatim_block_line(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbatimBlock<'src> {
    pub name: &'src str,
    pub lines: Vec<VerbatimBlockLine<'src>>,
    /// False when the comment ended before the closing command
    pub closed: bool,
    pub offset: usize,
}

impl<'src> VerbatimBlock<'src> {
    pub fn new(name: &'src str, lines: Vec<VerbatimBlockLine<'src>>, closed: bool) -> Self {
        VerbatimBlock {
            name,
            lines,
            closed,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_text(&self, index: usize) -> Option<&'src str> {
        self.lines.get(index).map(|line| line.text)
    }

    /// All lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AstNode for VerbatimBlock<'_> {
    fn node_type(&self) -> &'static str {
        "VerbatimBlock"
    }

    fn display_label(&self) -> String {
        format!("\\{} ({} lines)", self.name, self.lines.len())
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_verbatim_block(self);
        for line in &self.lines {
            line.accept(visitor);
        }
        visitor.leave_verbatim_block(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbatimLine<'src> {
    pub name: &'src str,
    pub text: &'src str,
    pub offset: usize,
}

impl<'src> VerbatimLine<'src> {
    pub fn new(name: &'src str, text: &'src str) -> Self {
        VerbatimLine {
            name,
            text,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl AstNode for VerbatimLine<'_> {
    fn node_type(&self) -> &'static str {
        "VerbatimLine"
    }

    fn display_label(&self) -> String {
        format!("\\{}{}", self.name, self.text)
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_verbatim_line(self);
    }
}
