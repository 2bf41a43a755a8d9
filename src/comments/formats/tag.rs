//! XML-like AST tag serialization
//!
//! Serializes a comment to an XML-like format that directly reflects the tree, using the
//! Visitor pattern: containers open their tag on `visit_*` and close it on `leave_*`.
//!
//! ## Format
//!
//! - Node type → kebab-case tag name
//! - Names, directions and flags → attributes
//! - Text, arguments and verbatim lines → text content
//! - A trailing newline on an inline node → `newline="true"`
//!
//! ## Example
//!
//! ```text
//! <comment>
//!   <paragraph>
//!     <text> </text>
//!   </paragraph>
//!   <param-command name="param" direction="in" explicit="true" param-name="aaa">
//!     <paragraph>
//!       <text> Input value</text>
//!     </paragraph>
//!   </param-command>
//! </comment>
//! ```

use super::registry::{FormatError, Formatter};
use crate::comments::ast::{
    AstNode, BlockCommand, FullComment, HtmlEndTag, HtmlStartTag, InlineCommand, Paragraph,
    ParamCommand, Text, VerbatimBlock, VerbatimBlockLine, VerbatimLine, Visitor,
};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn open_tag(&mut self, tag: &str, attrs: &[(&str, String)]) {
        let line = format!("<{tag}{}>\n", render_attributes(attrs));
        self.push_indent(&line);
        self.indent_level += 1;
    }

    fn close_tag(&mut self, tag: &str) {
        self.indent_level -= 1;
        self.push_indent(&format!("</{tag}>\n"));
    }

    fn empty_tag(&mut self, tag: &str, attrs: &[(&str, String)]) {
        let line = format!("<{tag}{}/>\n", render_attributes(attrs));
        self.push_indent(&line);
    }

    fn tag_with_text(&mut self, tag: &str, attrs: &[(&str, String)], text: &str) {
        let line = format!(
            "<{tag}{}>{}</{tag}>\n",
            render_attributes(attrs),
            escape_xml(text)
        );
        self.push_indent(&line);
    }
}

fn render_attributes(attrs: &[(&str, String)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {key}=\"{}\"", escape_xml(value)))
        .collect()
}

fn newline_attr(trailing_newline: bool) -> Vec<(&'static str, String)> {
    if trailing_newline {
        vec![("newline", "true".to_string())]
    } else {
        Vec::new()
    }
}

impl Visitor for TagSerializer {
    fn visit_paragraph(&mut self, paragraph: &Paragraph<'_>) {
        if paragraph.is_empty() {
            self.empty_tag("paragraph", &[]);
        } else {
            self.open_tag("paragraph", &[]);
        }
    }

    fn leave_paragraph(&mut self, paragraph: &Paragraph<'_>) {
        if !paragraph.is_empty() {
            self.close_tag("paragraph");
        }
    }

    fn visit_block_command(&mut self, command: &BlockCommand<'_>) {
        let mut attrs = vec![("name", command.name.to_string())];
        for arg in &command.args {
            attrs.push(("arg", arg.to_string()));
        }
        self.open_tag("block-command", &attrs);
    }

    fn leave_block_command(&mut self, _command: &BlockCommand<'_>) {
        self.close_tag("block-command");
    }

    fn visit_param_command(&mut self, command: &ParamCommand<'_>) {
        let mut attrs = vec![
            ("name", command.name.to_string()),
            ("direction", command.direction.to_string()),
            ("explicit", command.direction_explicit.to_string()),
        ];
        if let Some(name) = command.param_name_text() {
            attrs.push(("param-name", name.to_string()));
        }
        self.open_tag("param-command", &attrs);
    }

    fn leave_param_command(&mut self, _command: &ParamCommand<'_>) {
        self.close_tag("param-command");
    }

    fn visit_verbatim_block(&mut self, block: &VerbatimBlock<'_>) {
        let attrs = [
            ("name", block.name.to_string()),
            ("closed", block.closed.to_string()),
        ];
        if block.lines.is_empty() {
            self.empty_tag("verbatim-block", &attrs);
        } else {
            self.open_tag("verbatim-block", &attrs);
        }
    }

    fn leave_verbatim_block(&mut self, block: &VerbatimBlock<'_>) {
        if !block.lines.is_empty() {
            self.close_tag("verbatim-block");
        }
    }

    fn visit_verbatim_block_line(&mut self, line: &VerbatimBlockLine<'_>) {
        self.tag_with_text("line", &[], line.text);
    }

    fn visit_verbatim_line(&mut self, line: &VerbatimLine<'_>) {
        self.tag_with_text("verbatim-line", &[("name", line.name.to_string())], line.text);
    }

    fn visit_text(&mut self, text: &Text<'_>) {
        self.tag_with_text("text", &newline_attr(text.trailing_newline), text.text);
    }

    fn visit_inline_command(&mut self, command: &InlineCommand<'_>) {
        let mut attrs = vec![("name", command.name.to_string())];
        attrs.extend(newline_attr(command.trailing_newline));
        match command.arg_text() {
            Some(arg) => self.tag_with_text("inline-command", &attrs, arg),
            None => self.empty_tag("inline-command", &attrs),
        }
    }

    fn visit_html_start_tag(&mut self, tag: &HtmlStartTag<'_>) {
        let mut attrs = vec![
            ("name", tag.name.to_string()),
            ("self-closing", tag.self_closing.to_string()),
        ];
        attrs.extend(newline_attr(tag.trailing_newline));
        if tag.attributes.is_empty() {
            self.empty_tag("html-start-tag", &attrs);
            return;
        }
        self.open_tag("html-start-tag", &attrs);
        for attribute in &tag.attributes {
            self.tag_with_text(
                "attribute",
                &[("name", attribute.name.to_string())],
                attribute.value,
            );
        }
        self.close_tag("html-start-tag");
    }

    fn visit_html_end_tag(&mut self, tag: &HtmlEndTag<'_>) {
        let mut attrs = vec![("name", tag.name.to_string())];
        attrs.extend(newline_attr(tag.trailing_newline));
        self.empty_tag("html-end-tag", &attrs);
    }
}

/// Serialize a comment to AST tag format
pub fn serialize_comment(comment: &FullComment<'_>) -> String {
    let mut serializer = TagSerializer {
        output: String::new(),
        indent_level: 1,
    };
    for block in &comment.blocks {
        block.accept(&mut serializer);
    }

    let mut result = String::from("<comment>\n");
    result.push_str(&serializer.output);
    result.push_str("</comment>");
    result
}

/// Escape XML special characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, comment: &FullComment<'_>) -> Result<String, FormatError> {
        Ok(serialize_comment(comment))
    }

    fn description(&self) -> &str {
        "XML-like tags mirroring the tree"
    }
}
