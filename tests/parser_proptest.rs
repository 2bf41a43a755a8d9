//! Property-based tests for the lexer and parser
//!
//! Comments are assembled from fragments that exercise every lexer mode, including broken
//! markup. Parsing must never panic and never depend on whether diagnostics are collected.

use doccomment::comments::ast::AstNode;
use doccomment::comments::commands::DEFAULT_COMMANDS;
use doccomment::comments::lexing::tokenize;
use doccomment::comments::parsing::{parse_comment, parse_comment_with_diagnostics};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "// ",
    "/// ",
    "/** ",
    "*/",
    " * ",
    "\n",
    "\r\n",
    " ",
    "Aaa",
    "bbb ",
    "\\brief",
    "@param",
    "\\param",
    " [in]",
    " [in,out]",
    " [",
    "]",
    "\\c",
    "\\unknown",
    "\\throws",
    "\\verbatim",
    "\\endverbatim",
    "@code",
    "\\endcode",
    "\\f$",
    "\\f[",
    "\\f]",
    "\\fn",
    "\\@",
    "\\\\",
    "\\",
    "@",
    "<",
    "<a",
    "<br/>",
    " href=",
    "\"x\"",
    "'y",
    ">",
    "</a",
    "/",
    "=",
    "é",
];

fn comment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40)
        .prop_map(|fragments| fragments.concat())
}

proptest! {
    #[test]
    fn test_tokens_are_spelled_at_their_offsets(source in comment_strategy()) {
        for token in tokenize(&source, &DEFAULT_COMMANDS) {
            prop_assert!(token.end() <= source.len());
            prop_assert_eq!(&source[token.offset..token.end()], token.spelling);
        }
    }

    #[test]
    fn test_token_stream_ends_with_single_eof(source in comment_strategy()) {
        let tokens = tokenize(&source, &DEFAULT_COMMANDS);
        let eofs = tokens.iter().filter(|token| token.is_eof()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(tokens.last().is_some_and(|token| token.is_eof()));
    }

    #[test]
    fn test_diagnostics_do_not_change_the_tree(source in comment_strategy()) {
        let (with_diagnostics, _) = parse_comment_with_diagnostics(&source);
        prop_assert_eq!(parse_comment(&source), with_diagnostics);
    }

    #[test]
    fn test_offsets_stay_inside_the_source(source in comment_strategy()) {
        let comment = parse_comment(&source);
        for block in &comment.blocks {
            prop_assert!(block.offset() <= source.len());
            if let Some(paragraph) = block.paragraph() {
                for inline in &paragraph.content {
                    prop_assert!(inline.offset() <= source.len());
                }
            }
        }
    }

    #[test]
    fn test_diagnostic_offsets_stay_inside_the_source(source in comment_strategy()) {
        let (_, diagnostics) = parse_comment_with_diagnostics(&source);
        for diagnostic in diagnostics {
            prop_assert!(diagnostic.offset <= source.len());
        }
    }
}
