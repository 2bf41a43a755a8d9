//! Inline node assertions

use crate::comments::ast::{AstNode, HtmlEndTag, HtmlStartTag, InlineCommand, InlineContent, Text};
use crate::comments::testing::matchers::TextMatch;

pub struct InlineAssertion<'a> {
    pub(crate) inline: &'a InlineContent<'a>,
    pub(crate) context: String,
}

impl<'a> InlineAssertion<'a> {
    fn wrong_kind(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.inline.node_type()
        )
    }

    pub fn assert_text(self) -> TextAssertion<'a> {
        match self.inline {
            InlineContent::Text(text) => TextAssertion {
                text,
                context: self.context,
            },
            _ => self.wrong_kind("Text"),
        }
    }

    pub fn assert_inline_command(self) -> InlineCommandAssertion<'a> {
        match self.inline {
            InlineContent::InlineCommand(command) => InlineCommandAssertion {
                command,
                context: self.context,
            },
            _ => self.wrong_kind("InlineCommand"),
        }
    }

    pub fn assert_html_start_tag(self) -> HtmlStartTagAssertion<'a> {
        match self.inline {
            InlineContent::HtmlStartTag(tag) => HtmlStartTagAssertion {
                tag,
                context: self.context,
            },
            _ => self.wrong_kind("HtmlStartTag"),
        }
    }

    pub fn assert_html_end_tag(self) -> HtmlEndTagAssertion<'a> {
        match self.inline {
            InlineContent::HtmlEndTag(tag) => HtmlEndTagAssertion {
                tag,
                context: self.context,
            },
            _ => self.wrong_kind("HtmlEndTag"),
        }
    }
}

fn assert_newline(context: &str, actual: bool, expected: bool) {
    assert_eq!(
        actual, expected,
        "{}: Expected trailing_newline to be {}, but got {}",
        context, expected, actual
    );
}

pub struct TextAssertion<'a> {
    pub(crate) text: &'a Text<'a>,
    pub(crate) context: String,
}

impl TextAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.text.text, &self.context);
        self
    }

    pub fn trailing_newline(self, expected: bool) -> Self {
        assert_newline(&self.context, self.text.trailing_newline, expected);
        self
    }
}

pub struct InlineCommandAssertion<'a> {
    pub(crate) command: &'a InlineCommand<'a>,
    pub(crate) context: String,
}

impl InlineCommandAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.command.name, expected,
            "{}: Expected command name {:?}, but got {:?}",
            self.context, expected, self.command.name
        );
        self
    }

    pub fn arg(self, expected: &str) -> Self {
        match self.command.arg_text() {
            Some(arg) => TextMatch::Exact(expected.to_string()).assert(arg, &self.context),
            None => panic!(
                "{}: Expected argument {:?}, but the command has none",
                self.context, expected
            ),
        }
        self
    }

    pub fn no_arg(self) -> Self {
        assert!(
            self.command.arg.is_none(),
            "{}: Expected no argument, but got {:?}",
            self.context,
            self.command.arg_text()
        );
        self
    }

    pub fn trailing_newline(self, expected: bool) -> Self {
        assert_newline(&self.context, self.command.trailing_newline, expected);
        self
    }
}

pub struct HtmlStartTagAssertion<'a> {
    pub(crate) tag: &'a HtmlStartTag<'a>,
    pub(crate) context: String,
}

impl HtmlStartTagAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.tag.name, expected,
            "{}: Expected tag name {:?}, but got {:?}",
            self.context, expected, self.tag.name
        );
        self
    }

    pub fn attribute_count(self, expected: usize) -> Self {
        assert_eq!(
            self.tag.attributes.len(),
            expected,
            "{}: Expected {} attributes, found {}",
            self.context,
            expected,
            self.tag.attributes.len()
        );
        self
    }

    /// Assert the name and value of the attribute at `index`
    pub fn attribute(self, index: usize, name: &str, value: &str) -> Self {
        let Some(attribute) = self.tag.attributes.get(index) else {
            panic!(
                "{}: Attribute index {} out of bounds (tag has {} attributes)",
                self.context,
                index,
                self.tag.attributes.len()
            );
        };
        assert_eq!(
            (attribute.name, attribute.value),
            (name, value),
            "{}: Attribute {} mismatch",
            self.context,
            index
        );
        self
    }

    pub fn self_closing(self, expected: bool) -> Self {
        assert_eq!(
            self.tag.self_closing, expected,
            "{}: Expected self_closing to be {}, but got {}",
            self.context, expected, self.tag.self_closing
        );
        self
    }

    pub fn trailing_newline(self, expected: bool) -> Self {
        assert_newline(&self.context, self.tag.trailing_newline, expected);
        self
    }
}

pub struct HtmlEndTagAssertion<'a> {
    pub(crate) tag: &'a HtmlEndTag<'a>,
    pub(crate) context: String,
}

impl HtmlEndTagAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.tag.name, expected,
            "{}: Expected tag name {:?}, but got {:?}",
            self.context, expected, self.tag.name
        );
        self
    }

    pub fn trailing_newline(self, expected: bool) -> Self {
        assert_newline(&self.context, self.tag.trailing_newline, expected);
        self
    }
}
