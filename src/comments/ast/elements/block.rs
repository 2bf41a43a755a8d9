//! Block content
//!
//! `BlockContent` is the closed set of nodes that can appear at the top level of a comment.
//! Callers match on it (or use the `as_*` accessors) instead of downcasting.

use super::super::error::NodeAccessError;
use super::super::traits::{AstNode, Visitor};
use super::command::{BlockCommand, ParamCommand, ParamDirection};
use super::paragraph::Paragraph;
use super::verbatim::{VerbatimBlock, VerbatimLine};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockContent<'src> {
    Paragraph(Paragraph<'src>),
    BlockCommand(BlockCommand<'src>),
    ParamCommand(ParamCommand<'src>),
    VerbatimBlock(VerbatimBlock<'src>),
    VerbatimLine(VerbatimLine<'src>),
}

impl<'src> BlockContent<'src> {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, BlockContent::Paragraph(_))
    }

    pub fn is_block_command(&self) -> bool {
        matches!(self, BlockContent::BlockCommand(_))
    }

    pub fn is_param_command(&self) -> bool {
        matches!(self, BlockContent::ParamCommand(_))
    }

    pub fn is_verbatim_block(&self) -> bool {
        matches!(self, BlockContent::VerbatimBlock(_))
    }

    pub fn is_verbatim_line(&self) -> bool {
        matches!(self, BlockContent::VerbatimLine(_))
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph<'src>> {
        match self {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_block_command(&self) -> Option<&BlockCommand<'src>> {
        match self {
            BlockContent::BlockCommand(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_param_command(&self) -> Option<&ParamCommand<'src>> {
        match self {
            BlockContent::ParamCommand(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_verbatim_block(&self) -> Option<&VerbatimBlock<'src>> {
        match self {
            BlockContent::VerbatimBlock(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_verbatim_line(&self) -> Option<&VerbatimLine<'src>> {
        match self {
            BlockContent::VerbatimLine(l) => Some(l),
            _ => None,
        }
    }

    /// Command name for every variant except plain paragraphs
    pub fn command_name(&self) -> Option<&'src str> {
        match self {
            BlockContent::Paragraph(_) => None,
            BlockContent::BlockCommand(c) => Some(c.name),
            BlockContent::ParamCommand(c) => Some(c.name),
            BlockContent::VerbatimBlock(b) => Some(b.name),
            BlockContent::VerbatimLine(l) => Some(l.name),
        }
    }

    /// The paragraph of a paragraph node, or the paragraph owned by a block or parameter command
    pub fn paragraph(&self) -> Option<&Paragraph<'src>> {
        match self {
            BlockContent::Paragraph(p) => Some(p),
            BlockContent::BlockCommand(c) => Some(&c.paragraph),
            BlockContent::ParamCommand(c) => Some(&c.paragraph),
            _ => None,
        }
    }

    pub fn param_direction(&self) -> Result<ParamDirection, NodeAccessError> {
        self.require_param("direction").map(|c| c.direction)
    }

    pub fn is_direction_explicit(&self) -> Result<bool, NodeAccessError> {
        self.require_param("direction_explicit")
            .map(|c| c.direction_explicit)
    }

    pub fn param_name(&self) -> Result<Option<&str>, NodeAccessError> {
        self.require_param("param_name")
            .map(ParamCommand::param_name_text)
    }

    pub fn verbatim_lines(&self) -> Result<Vec<&'src str>, NodeAccessError> {
        match self {
            BlockContent::VerbatimBlock(b) => Ok(b.lines.iter().map(|line| line.text).collect()),
            other => Err(NodeAccessError::WrongKind {
                field: "lines",
                expected: "VerbatimBlock",
                found: other.node_type(),
            }),
        }
    }

    fn require_param(&self, field: &'static str) -> Result<&ParamCommand<'src>, NodeAccessError> {
        match self {
            BlockContent::ParamCommand(c) => Ok(c),
            other => Err(NodeAccessError::WrongKind {
                field,
                expected: "ParamCommand",
                found: other.node_type(),
            }),
        }
    }
}

impl AstNode for BlockContent<'_> {
    fn node_type(&self) -> &'static str {
        match self {
            BlockContent::Paragraph(p) => p.node_type(),
            BlockContent::BlockCommand(c) => c.node_type(),
            BlockContent::ParamCommand(c) => c.node_type(),
            BlockContent::VerbatimBlock(b) => b.node_type(),
            BlockContent::VerbatimLine(l) => l.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            BlockContent::Paragraph(p) => p.display_label(),
            BlockContent::BlockCommand(c) => c.display_label(),
            BlockContent::ParamCommand(c) => c.display_label(),
            BlockContent::VerbatimBlock(b) => b.display_label(),
            BlockContent::VerbatimLine(l) => l.display_label(),
        }
    }

    fn offset(&self) -> usize {
        match self {
            BlockContent::Paragraph(p) => p.offset(),
            BlockContent::BlockCommand(c) => c.offset(),
            BlockContent::ParamCommand(c) => c.offset(),
            BlockContent::VerbatimBlock(b) => b.offset(),
            BlockContent::VerbatimLine(l) => l.offset(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            BlockContent::Paragraph(p) => p.accept(visitor),
            BlockContent::BlockCommand(c) => c.accept(visitor),
            BlockContent::ParamCommand(c) => c.accept(visitor),
            BlockContent::VerbatimBlock(b) => b.accept(visitor),
            BlockContent::VerbatimLine(l) => l.accept(visitor),
        }
    }
}

impl<'src> From<Paragraph<'src>> for BlockContent<'src> {
    fn from(paragraph: Paragraph<'src>) -> Self {
        BlockContent::Paragraph(paragraph)
    }
}

impl<'src> From<BlockCommand<'src>> for BlockContent<'src> {
    fn from(command: BlockCommand<'src>) -> Self {
        BlockContent::BlockCommand(command)
    }
}

impl<'src> From<ParamCommand<'src>> for BlockContent<'src> {
    fn from(command: ParamCommand<'src>) -> Self {
        BlockContent::ParamCommand(command)
    }
}

impl<'src> From<VerbatimBlock<'src>> for BlockContent<'src> {
    fn from(block: VerbatimBlock<'src>) -> Self {
        BlockContent::VerbatimBlock(block)
    }
}

impl<'src> From<VerbatimLine<'src>> for BlockContent<'src> {
    fn from(line: VerbatimLine<'src>) -> Self {
        BlockContent::VerbatimLine(line)
    }
}
