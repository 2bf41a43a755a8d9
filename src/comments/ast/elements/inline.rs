//! Inline nodes
//!
//! Inline nodes make up the content of a paragraph: text runs, inline commands and HTML tags.
//! Every inline node carries a trailing-newline flag. It is set on the last node of a line when
//! the paragraph continues on the next line, so renderers can reproduce the line structure.

use super::super::traits::{AstNode, Visitor};
use super::html::{HtmlEndTag, HtmlStartTag};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A run of ordinary text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text<'src> {
    pub text: &'src str,
    pub trailing_newline: bool,
    pub offset: usize,
}

impl<'src> Text<'src> {
    pub fn new(text: &'src str) -> Self {
        Text {
            text,
            trailing_newline: false,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// True when the text is nothing but blanks
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(|c| c.is_whitespace())
    }
}

impl AstNode for Text<'_> {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.text)
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_text(self);
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", self.text)
    }
}

/// A word argument of a command
///
/// Arguments usually borrow from the comment source. A word that spans several text tokens
/// (for instance around an escape sequence) is assembled into an owned string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument<'src> {
    pub text: Cow<'src, str>,
    pub offset: usize,
}

impl<'src> Argument<'src> {
    pub fn new(text: impl Into<Cow<'src, str>>, offset: usize) -> Self {
        Argument {
            text: text.into(),
            offset,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A command inside the paragraph flow (`\c word`, `\b word`, or any unknown command)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineCommand<'src> {
    pub name: &'src str,
    pub arg: Option<Argument<'src>>,
    pub trailing_newline: bool,
    pub offset: usize,
}

impl<'src> InlineCommand<'src> {
    pub fn new(name: &'src str, arg: Option<Argument<'src>>) -> Self {
        InlineCommand {
            name,
            arg,
            trailing_newline: false,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn arg_count(&self) -> usize {
        usize::from(self.arg.is_some())
    }

    pub fn arg_text(&self) -> Option<&str> {
        self.arg.as_ref().map(Argument::as_str)
    }
}

impl AstNode for InlineCommand<'_> {
    fn node_type(&self) -> &'static str {
        "InlineCommand"
    }

    fn display_label(&self) -> String {
        match &self.arg {
            Some(arg) => format!("\\{} {}", self.name, arg),
            None => format!("\\{}", self.name),
        }
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_inline_command(self);
    }
}

/// Any node that can appear inside a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InlineContent<'src> {
    Text(Text<'src>),
    InlineCommand(InlineCommand<'src>),
    HtmlStartTag(HtmlStartTag<'src>),
    HtmlEndTag(HtmlEndTag<'src>),
}

impl<'src> InlineContent<'src> {
    pub fn has_trailing_newline(&self) -> bool {
        match self {
            InlineContent::Text(t) => t.trailing_newline,
            InlineContent::InlineCommand(c) => c.trailing_newline,
            InlineContent::HtmlStartTag(t) => t.trailing_newline,
            InlineContent::HtmlEndTag(t) => t.trailing_newline,
        }
    }

    pub(crate) fn set_trailing_newline(&mut self) {
        match self {
            InlineContent::Text(t) => t.trailing_newline = true,
            InlineContent::InlineCommand(c) => c.trailing_newline = true,
            InlineContent::HtmlStartTag(t) => t.trailing_newline = true,
            InlineContent::HtmlEndTag(t) => t.trailing_newline = true,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InlineContent::Text(_))
    }

    pub fn is_inline_command(&self) -> bool {
        matches!(self, InlineContent::InlineCommand(_))
    }

    pub fn is_html_start_tag(&self) -> bool {
        matches!(self, InlineContent::HtmlStartTag(_))
    }

    pub fn is_html_end_tag(&self) -> bool {
        matches!(self, InlineContent::HtmlEndTag(_))
    }

    pub fn as_text(&self) -> Option<&Text<'src>> {
        match self {
            InlineContent::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_inline_command(&self) -> Option<&InlineCommand<'src>> {
        match self {
            InlineContent::InlineCommand(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_html_start_tag(&self) -> Option<&HtmlStartTag<'src>> {
        match self {
            InlineContent::HtmlStartTag(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_html_end_tag(&self) -> Option<&HtmlEndTag<'src>> {
        match self {
            InlineContent::HtmlEndTag(t) => Some(t),
            _ => None,
        }
    }

    /// True for text nodes holding only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.as_text().is_some_and(Text::is_whitespace)
    }
}

impl AstNode for InlineContent<'_> {
    fn node_type(&self) -> &'static str {
        match self {
            InlineContent::Text(t) => t.node_type(),
            InlineContent::InlineCommand(c) => c.node_type(),
            InlineContent::HtmlStartTag(t) => t.node_type(),
            InlineContent::HtmlEndTag(t) => t.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            InlineContent::Text(t) => t.display_label(),
            InlineContent::InlineCommand(c) => c.display_label(),
            InlineContent::HtmlStartTag(t) => t.display_label(),
            InlineContent::HtmlEndTag(t) => t.display_label(),
        }
    }

    fn offset(&self) -> usize {
        match self {
            InlineContent::Text(t) => t.offset(),
            InlineContent::InlineCommand(c) => c.offset(),
            InlineContent::HtmlStartTag(t) => t.offset(),
            InlineContent::HtmlEndTag(t) => t.offset(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            InlineContent::Text(t) => t.accept(visitor),
            InlineContent::InlineCommand(c) => c.accept(visitor),
            InlineContent::HtmlStartTag(t) => t.accept(visitor),
            InlineContent::HtmlEndTag(t) => t.accept(visitor),
        }
    }
}

impl<'src> From<Text<'src>> for InlineContent<'src> {
    fn from(text: Text<'src>) -> Self {
        InlineContent::Text(text)
    }
}

impl<'src> From<InlineCommand<'src>> for InlineContent<'src> {
    fn from(command: InlineCommand<'src>) -> Self {
        InlineContent::InlineCommand(command)
    }
}

impl<'src> From<HtmlStartTag<'src>> for InlineContent<'src> {
    fn from(tag: HtmlStartTag<'src>) -> Self {
        InlineContent::HtmlStartTag(tag)
    }
}

impl<'src> From<HtmlEndTag<'src>> for InlineContent<'src> {
    fn from(tag: HtmlEndTag<'src>) -> Self {
        InlineContent::HtmlEndTag(tag)
    }
}
