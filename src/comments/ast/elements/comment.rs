//! Full comment
//!
//! The root of every parse. It holds the top-level blocks in source order and borrows all of
//! its text from the comment source, so the source buffer outlives the tree.

use super::super::traits::{visit_children, AstNode, Visitor};
use super::block::BlockContent;
use super::command::{BlockCommand, ParamCommand};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FullComment<'src> {
    pub blocks: Vec<BlockContent<'src>>,
}

impl<'src> FullComment<'src> {
    pub fn new(blocks: Vec<BlockContent<'src>>) -> Self {
        FullComment { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, index: usize) -> Option<&BlockContent<'src>> {
        self.blocks.get(index)
    }

    /// Block commands with the given name, in source order
    pub fn block_commands<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a BlockCommand<'src>> + 'a {
        self.blocks
            .iter()
            .filter_map(BlockContent::as_block_command)
            .filter(move |c| c.name == name)
    }

    pub fn param_commands(&self) -> impl Iterator<Item = &ParamCommand<'src>> {
        self.blocks.iter().filter_map(BlockContent::as_param_command)
    }

    /// The parameter command documenting `param_name`, if any
    pub fn param(&self, param_name: &str) -> Option<&ParamCommand<'src>> {
        self.param_commands()
            .find(|c| c.param_name_text() == Some(param_name))
    }
}

impl AstNode for FullComment<'_> {
    fn node_type(&self) -> &'static str {
        "FullComment"
    }

    fn display_label(&self) -> String {
        format!("FullComment ({} blocks)", self.blocks.len())
    }

    fn offset(&self) -> usize {
        0
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_full_comment(self);
        visit_children(visitor, &self.blocks);
        visitor.leave_full_comment(self);
    }
}

impl fmt::Display for FullComment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FullComment({} blocks)", self.blocks.len())
    }
}
