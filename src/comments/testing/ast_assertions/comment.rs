//! Comment-level assertions

use super::{summarize, BlockAssertion, ParamCommandAssertion};
use crate::comments::ast::FullComment;

pub struct CommentAssertion<'a> {
    pub(crate) comment: &'a FullComment<'a>,
}

impl<'a> CommentAssertion<'a> {
    /// Assert the number of top-level blocks
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.comment.blocks.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} blocks, found {} blocks: [{}]",
            expected,
            actual,
            summarize(&self.comment.blocks)
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.block_count(0)
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.comment.blocks.len(),
            "Block index {} out of bounds (comment has {} blocks: [{}])",
            index,
            self.comment.blocks.len(),
            summarize(&self.comment.blocks)
        );

        assertion(BlockAssertion {
            block: &self.comment.blocks[index],
            context: format!("blocks[{}]", index),
        });
        self
    }

    /// Assert on the parameter command documenting `name`
    pub fn param<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ParamCommandAssertion<'a>),
    {
        let Some(command) = self.comment.param(name) else {
            panic!("Expected a parameter command for '{}', found none", name);
        };
        assertion(ParamCommandAssertion {
            command,
            context: format!("param({})", name),
        });
        self
    }
}
