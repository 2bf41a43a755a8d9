//! Fluent assertion API for comment trees
//!
//!     Tests that walk the tree by hand are long, and they break everywhere whenever a node
//!     changes shape. The fluent API walks it for them: every step names the node it expects
//!     and carries a context path (`blocks[1].paragraph.inlines[0]`) into failure messages.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use doccomment::comments::parsing::parse_comment;
//!     use doccomment::comments::testing::assert_comment;
//!
//!     let comment = parse_comment("/// \\param [in] count Number of items");
//!
//!     assert_comment(&comment)
//!         .block_count(2)
//!         .block(1, |block| {
//!             block
//!                 .assert_param_command()
//!                 .direction(ParamDirection::In)
//!                 .explicit(true)
//!                 .param_name("count")
//!                 .paragraph(|p| p.text(" Number of items"));
//!         });
//!     ```

mod command;
mod comment;
mod inline;
mod paragraph;
mod verbatim;

pub use command::{BlockCommandAssertion, ParamCommandAssertion};
pub use comment::CommentAssertion;
pub use inline::{
    HtmlEndTagAssertion, HtmlStartTagAssertion, InlineAssertion, InlineCommandAssertion,
    TextAssertion,
};
pub use paragraph::ParagraphAssertion;
pub use verbatim::{VerbatimBlockAssertion, VerbatimLineAssertion};

use crate::comments::ast::{AstNode, BlockContent, FullComment};

/// Create an assertion builder for a parsed comment
pub fn assert_comment<'a>(comment: &'a FullComment<'a>) -> CommentAssertion<'a> {
    CommentAssertion { comment }
}

pub(crate) fn summarize<T: AstNode>(nodes: &[T]) -> String {
    nodes
        .iter()
        .map(|node| node.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct BlockAssertion<'a> {
    pub(crate) block: &'a BlockContent<'a>,
    pub(crate) context: String,
}

impl<'a> BlockAssertion<'a> {
    fn wrong_kind(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.block.node_type()
        )
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.block {
            BlockContent::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            _ => self.wrong_kind("Paragraph"),
        }
    }

    pub fn assert_block_command(self) -> BlockCommandAssertion<'a> {
        match self.block {
            BlockContent::BlockCommand(command) => BlockCommandAssertion {
                command,
                context: self.context,
            },
            _ => self.wrong_kind("BlockCommand"),
        }
    }

    pub fn assert_param_command(self) -> ParamCommandAssertion<'a> {
        match self.block {
            BlockContent::ParamCommand(command) => ParamCommandAssertion {
                command,
                context: self.context,
            },
            _ => self.wrong_kind("ParamCommand"),
        }
    }

    pub fn assert_verbatim_block(self) -> VerbatimBlockAssertion<'a> {
        match self.block {
            BlockContent::VerbatimBlock(block) => VerbatimBlockAssertion {
                block,
                context: self.context,
            },
            _ => self.wrong_kind("VerbatimBlock"),
        }
    }

    pub fn assert_verbatim_line(self) -> VerbatimLineAssertion<'a> {
        match self.block {
            BlockContent::VerbatimLine(line) => VerbatimLineAssertion {
                line,
                context: self.context,
            },
            _ => self.wrong_kind("VerbatimLine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::ast::ParamDirection;
    use crate::comments::parsing::parse_comment;

    #[test]
    fn test_fluent_walk() {
        let comment = parse_comment("/// \\param [in] count Number of items");
        assert_comment(&comment)
            .block_count(2)
            .block(0, |block| {
                block.assert_paragraph().inline_count(1).text(" ");
            })
            .block(1, |block| {
                block
                    .assert_param_command()
                    .name("param")
                    .direction(ParamDirection::In)
                    .explicit(true)
                    .param_name("count")
                    .paragraph(|p| {
                        p.text(" Number of items");
                    });
            });
    }

    #[test]
    #[should_panic(expected = "blocks[0]: Expected BlockCommand, found Paragraph")]
    fn test_wrong_kind_reports_context() {
        let comment = parse_comment("// Meow");
        assert_comment(&comment).block(0, |block| {
            block.assert_block_command();
        });
    }

    #[test]
    #[should_panic(expected = "Expected 2 blocks, found 1 blocks: [Paragraph]")]
    fn test_block_count_failure() {
        let comment = parse_comment("// Meow");
        assert_comment(&comment).block_count(2);
    }
}
