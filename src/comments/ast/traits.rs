//! AST traits - Common interfaces for uniform node access

use super::elements::{
    BlockCommand, BlockContent, FullComment, HtmlEndTag, HtmlStartTag, InlineCommand,
    InlineContent, Paragraph, ParamCommand, Text, VerbatimBlock, VerbatimBlockLine, VerbatimLine,
};

/// Visitor trait for traversing the AST
///
/// Each visit method corresponds to a node type. Default implementations are empty, so you
/// only need to override the methods you care about. Nodes with children get a matching
/// `leave_*` call after their children have been visited.
///
/// ```ignore
/// struct CommandCounter(usize);
///
/// impl Visitor for CommandCounter {
///     fn visit_inline_command(&mut self, _command: &InlineCommand<'_>) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = CommandCounter(0);
/// comment.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_full_comment(&mut self, _comment: &FullComment<'_>) {}
    fn leave_full_comment(&mut self, _comment: &FullComment<'_>) {}

    // Block level
    fn visit_paragraph(&mut self, _paragraph: &Paragraph<'_>) {}
    fn leave_paragraph(&mut self, _paragraph: &Paragraph<'_>) {}

    fn visit_block_command(&mut self, _command: &BlockCommand<'_>) {}
    fn leave_block_command(&mut self, _command: &BlockCommand<'_>) {}

    fn visit_param_command(&mut self, _command: &ParamCommand<'_>) {}
    fn leave_param_command(&mut self, _command: &ParamCommand<'_>) {}

    fn visit_verbatim_block(&mut self, _block: &VerbatimBlock<'_>) {}
    fn leave_verbatim_block(&mut self, _block: &VerbatimBlock<'_>) {}

    fn visit_verbatim_block_line(&mut self, _line: &VerbatimBlockLine<'_>) {}

    fn visit_verbatim_line(&mut self, _line: &VerbatimLine<'_>) {}

    // Inline level
    fn visit_text(&mut self, _text: &Text<'_>) {}
    fn visit_inline_command(&mut self, _command: &InlineCommand<'_>) {}
    fn visit_html_start_tag(&mut self, _tag: &HtmlStartTag<'_>) {}
    fn visit_html_end_tag(&mut self, _tag: &HtmlEndTag<'_>) {}
}

/// Helper function to visit all blocks in a slice
pub fn visit_children(visitor: &mut dyn Visitor, blocks: &[BlockContent<'_>]) {
    for block in blocks {
        block.accept(visitor);
    }
}

/// Helper function to visit all inline nodes in a slice
pub fn visit_inlines(visitor: &mut dyn Visitor, inlines: &[InlineContent<'_>]) {
    for inline in inlines {
        inline.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    /// Byte offset in the comment source where this node starts
    fn offset(&self) -> usize;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}
