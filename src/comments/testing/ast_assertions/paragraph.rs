//! Paragraph assertions

use super::{summarize, InlineAssertion};
use crate::comments::ast::Paragraph;
use crate::comments::testing::matchers::TextMatch;

pub struct ParagraphAssertion<'a> {
    pub(crate) paragraph: &'a Paragraph<'a>,
    pub(crate) context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// Assert the concatenated text of the paragraph's text nodes
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.paragraph.text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.paragraph.text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.paragraph.text(), &self.context);
        self
    }

    pub fn inline_count(self, expected: usize) -> Self {
        let actual = self.paragraph.content.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} inline nodes, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.paragraph.content)
        );
        self
    }

    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assert!(
            index < self.paragraph.content.len(),
            "{}: Inline index {} out of bounds (paragraph has {} inline nodes)",
            self.context,
            index,
            self.paragraph.content.len()
        );
        assertion(InlineAssertion {
            inline: &self.paragraph.content[index],
            context: format!("{}.inlines[{}]", self.context, index),
        });
        self
    }

    pub fn is_whitespace(self) -> Self {
        assert!(
            self.paragraph.is_whitespace(),
            "{}: Expected a whitespace-only paragraph, found {:?}",
            self.context,
            self.paragraph.text()
        );
        self
    }

    pub fn is_empty(self) -> Self {
        assert!(
            self.paragraph.is_empty(),
            "{}: Expected an empty paragraph, found [{}]",
            self.context,
            summarize(&self.paragraph.content)
        );
        self
    }
}
