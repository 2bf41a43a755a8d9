//! Block-level commands
//!
//! A block command (`\brief`, `\returns`, `\throws Type`) owns exactly one paragraph: the prose
//! that follows it up to the next boundary. A parameter command (`\param [in] name`) is a block
//! command that also carries a direction and the documented parameter's name.

use super::super::traits::{AstNode, Visitor};
use super::inline::Argument;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockCommand<'src> {
    pub name: &'src str,
    pub args: Vec<Argument<'src>>,
    pub paragraph: Paragraph<'src>,
    pub offset: usize,
}

impl<'src> BlockCommand<'src> {
    pub fn new(name: &'src str, args: Vec<Argument<'src>>, paragraph: Paragraph<'src>) -> Self {
        BlockCommand {
            name,
            args,
            paragraph,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl AstNode for BlockCommand<'_> {
    fn node_type(&self) -> &'static str {
        "BlockCommand"
    }

    fn display_label(&self) -> String {
        let mut label = format!("\\{}", self.name);
        for arg in &self.args {
            label.push(' ');
            label.push_str(arg.as_str());
        }
        label
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_block_command(self);
        self.paragraph.accept(visitor);
        visitor.leave_block_command(self);
    }
}

/// Parameter passing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamDirection {
    In,
    Out,
    InOut,
}

impl ParamDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamDirection::In => "in",
            ParamDirection::Out => "out",
            ParamDirection::InOut => "in,out",
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, ParamDirection::In | ParamDirection::InOut)
    }

    pub fn is_output(&self) -> bool {
        matches!(self, ParamDirection::Out | ParamDirection::InOut)
    }
}

impl fmt::Display for ParamDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamCommand<'src> {
    pub name: &'src str,
    pub direction: ParamDirection,
    /// Whether a `[...]` annotation was written, whatever it resolved to
    pub direction_explicit: bool,
    pub param_name: Option<Argument<'src>>,
    pub paragraph: Paragraph<'src>,
    pub offset: usize,
}

impl<'src> ParamCommand<'src> {
    /// A parameter command with the implicit `In` direction
    pub fn new(
        name: &'src str,
        param_name: Option<Argument<'src>>,
        paragraph: Paragraph<'src>,
    ) -> Self {
        ParamCommand {
            name,
            direction: ParamDirection::In,
            direction_explicit: false,
            param_name,
            paragraph,
            offset: 0,
        }
    }

    pub fn with_direction(mut self, direction: ParamDirection, explicit: bool) -> Self {
        self.direction = direction;
        self.direction_explicit = explicit;
        self
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn param_name_text(&self) -> Option<&str> {
        self.param_name.as_ref().map(Argument::as_str)
    }
}

impl AstNode for ParamCommand<'_> {
    fn node_type(&self) -> &'static str {
        "ParamCommand"
    }

    fn display_label(&self) -> String {
        let direction = if self.direction_explicit {
            format!(" [{}]", self.direction)
        } else {
            String::new()
        };
        match self.param_name_text() {
            Some(name) => format!("\\{}{} {}", self.name, direction, name),
            None => format!("\\{}{}", self.name, direction),
        }
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_param_command(self);
        self.paragraph.accept(visitor);
        visitor.leave_param_command(self);
    }
}
