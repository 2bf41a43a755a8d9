//! Verbatim block and line assertions

use crate::comments::ast::{VerbatimBlock, VerbatimLine};
use crate::comments::testing::matchers::TextMatch;

pub struct VerbatimBlockAssertion<'a> {
    pub(crate) block: &'a VerbatimBlock<'a>,
    pub(crate) context: String,
}

impl VerbatimBlockAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.block.name, expected,
            "{}: Expected command name {:?}, but got {:?}",
            self.context, expected, self.block.name
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.block.lines.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} lines, found {}: {:?}",
            self.context,
            expected,
            actual,
            self.block.lines.iter().map(|l| l.text).collect::<Vec<_>>()
        );
        self
    }

    pub fn line(self, index: usize, expected: &str) -> Self {
        let Some(text) = self.block.line_text(index) else {
            panic!(
                "{}: Line index {} out of bounds (block has {} lines)",
                self.context,
                index,
                self.block.lines.len()
            );
        };
        TextMatch::Exact(expected.to_string())
            .assert(text, &format!("{}.lines[{}]", self.context, index));
        self
    }

    /// Assert every line at once
    pub fn lines(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.block.lines.iter().map(|l| l.text).collect();
        assert_eq!(
            actual, expected,
            "{}: Verbatim lines mismatch",
            self.context
        );
        self
    }

    pub fn closed(self, expected: bool) -> Self {
        assert_eq!(
            self.block.closed, expected,
            "{}: Expected closed to be {}, but got {}",
            self.context, expected, self.block.closed
        );
        self
    }
}

pub struct VerbatimLineAssertion<'a> {
    pub(crate) line: &'a VerbatimLine<'a>,
    pub(crate) context: String,
}

impl VerbatimLineAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.line.name, expected,
            "{}: Expected command name {:?}, but got {:?}",
            self.context, expected, self.line.name
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.line.text, &self.context);
        self
    }
}
