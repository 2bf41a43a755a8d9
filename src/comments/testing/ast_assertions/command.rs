//! Block and parameter command assertions

use super::ParagraphAssertion;
use crate::comments::ast::{BlockCommand, ParamCommand, ParamDirection};
use crate::comments::testing::matchers::TextMatch;

pub struct BlockCommandAssertion<'a> {
    pub(crate) command: &'a BlockCommand<'a>,
    pub(crate) context: String,
}

impl<'a> BlockCommandAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.command.name, expected,
            "{}: Expected command name {:?}, but got {:?}",
            self.context, expected, self.command.name
        );
        self
    }

    pub fn arg_count(self, expected: usize) -> Self {
        assert_eq!(
            self.command.args.len(),
            expected,
            "{}: Expected {} arguments, found {}",
            self.context,
            expected,
            self.command.args.len()
        );
        self
    }

    pub fn arg(self, index: usize, expected: &str) -> Self {
        let Some(arg) = self.command.args.get(index) else {
            panic!(
                "{}: Argument index {} out of bounds (command has {} arguments)",
                self.context,
                index,
                self.command.args.len()
            );
        };
        TextMatch::Exact(expected.to_string())
            .assert(arg.as_str(), &format!("{}.args[{}]", self.context, index));
        self
    }

    pub fn paragraph<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ParagraphAssertion<'a>),
    {
        assertion(ParagraphAssertion {
            paragraph: &self.command.paragraph,
            context: format!("{}.paragraph", self.context),
        });
        self
    }
}

pub struct ParamCommandAssertion<'a> {
    pub(crate) command: &'a ParamCommand<'a>,
    pub(crate) context: String,
}

impl<'a> ParamCommandAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.command.name, expected,
            "{}: Expected command name {:?}, but got {:?}",
            self.context, expected, self.command.name
        );
        self
    }

    pub fn direction(self, expected: ParamDirection) -> Self {
        assert_eq!(
            self.command.direction, expected,
            "{}: Expected direction {}, but got {}",
            self.context, expected, self.command.direction
        );
        self
    }

    pub fn explicit(self, expected: bool) -> Self {
        assert_eq!(
            self.command.direction_explicit, expected,
            "{}: Expected direction_explicit to be {}, but got {}",
            self.context, expected, self.command.direction_explicit
        );
        self
    }

    pub fn param_name(self, expected: &str) -> Self {
        match self.command.param_name_text() {
            Some(name) => TextMatch::Exact(expected.to_string()).assert(name, &self.context),
            None => panic!(
                "{}: Expected parameter name {:?}, but the command has none",
                self.context, expected
            ),
        }
        self
    }

    pub fn no_param_name(self) -> Self {
        assert!(
            self.command.param_name.is_none(),
            "{}: Expected no parameter name, but got {:?}",
            self.context,
            self.command.param_name_text()
        );
        self
    }

    pub fn paragraph<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ParagraphAssertion<'a>),
    {
        assertion(ParagraphAssertion {
            paragraph: &self.command.paragraph,
            context: format!("{}.paragraph", self.context),
        });
        self
    }
}
