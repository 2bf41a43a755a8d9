//! HTML tags
//!
//! Only the minimal tag grammar is modelled: a start tag with `name` or `name="value"`
//! attributes, optionally self-closing, and an end tag. Tags are leaves; the parser does not
//! match start tags with end tags.

use super::super::traits::{AstNode, Visitor};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlAttribute<'src> {
    pub name: &'src str,
    /// Empty when the attribute has no `=value` clause
    pub value: &'src str,
    pub offset: usize,
}

impl<'src> HtmlAttribute<'src> {
    pub fn new(name: &'src str, value: &'src str) -> Self {
        HtmlAttribute {
            name,
            value,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl fmt::Display for HtmlAttribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlStartTag<'src> {
    pub name: &'src str,
    pub attributes: Vec<HtmlAttribute<'src>>,
    pub self_closing: bool,
    pub trailing_newline: bool,
    pub offset: usize,
}

impl<'src> HtmlStartTag<'src> {
    pub fn new(name: &'src str, attributes: Vec<HtmlAttribute<'src>>, self_closing: bool) -> Self {
        HtmlStartTag {
            name,
            attributes,
            self_closing,
            trailing_newline: false,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&HtmlAttribute<'src>> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

impl AstNode for HtmlStartTag<'_> {
    fn node_type(&self) -> &'static str {
        "HtmlStartTag"
    }

    fn display_label(&self) -> String {
        let mut label = format!("<{}", self.name);
        for attr in &self.attributes {
            label.push(' ');
            label.push_str(&attr.to_string());
        }
        label.push_str(if self.self_closing { "/>" } else { ">" });
        label
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_html_start_tag(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlEndTag<'src> {
    pub name: &'src str,
    pub trailing_newline: bool,
    pub offset: usize,
}

impl<'src> HtmlEndTag<'src> {
    pub fn new(name: &'src str) -> Self {
        HtmlEndTag {
            name,
            trailing_newline: false,
            offset: 0,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl AstNode for HtmlEndTag<'_> {
    fn node_type(&self) -> &'static str {
        "HtmlEndTag"
    }

    fn display_label(&self) -> String {
        format!("</{}>", self.name)
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_html_end_tag(self);
    }
}
