//! Paragraph structure: line joining, blank-line splits and leading text

use doccomment::comments::parsing::parse_comment;
use doccomment::comments::testing::assert_comment;
use rstest::rstest;

#[rstest]
#[case::line_comment("//")]
#[case::doc_line_comment("///")]
#[case::block_comment("/**/")]
#[case::doc_block_comment("/*!*/")]
#[case::only_blanks("//   ")]
#[case::blank_lines("//\n//\n//")]
fn test_empty_comments(#[case] source: &str) {
    let comment = parse_comment(source);
    assert_comment(&comment).is_empty();
}

#[test]
fn test_single_line() {
    let comment = parse_comment("// Meow");

    assert_comment(&comment).block_count(1).block(0, |block| {
        block.assert_paragraph().inline_count(1).inline(0, |inline| {
            inline.assert_text().text(" Meow").trailing_newline(false);
        });
    });
}

#[test]
fn test_consecutive_lines_join() {
    let comment = parse_comment("// Aaa\n// Bbb");

    assert_comment(&comment).block_count(1).block(0, |block| {
        block
            .assert_paragraph()
            .inline_count(2)
            .inline(0, |inline| {
                inline.assert_text().text(" Aaa").trailing_newline(true);
            })
            .inline(1, |inline| {
                inline.assert_text().text(" Bbb").trailing_newline(false);
            });
    });
}

#[rstest]
#[case::empty_line("// Aaa\n//\n// Bbb")]
#[case::two_empty_lines("// Aaa\n//\n//\n// Bbb")]
#[case::whitespace_line("// Aaa\n//   \n// Bbb")]
#[case::blank_source_line("// Aaa\n\n// Bbb")]
#[case::block_comment("/* Aaa\n *\n * Bbb*/")]
fn test_blank_line_separates_paragraphs(#[case] source: &str) {
    let comment = parse_comment(source);

    assert_comment(&comment)
        .block_count(2)
        .block(0, |block| {
            block.assert_paragraph().inline_count(1).text(" Aaa");
        })
        .block(1, |block| {
            block.assert_paragraph().inline_count(1).text(" Bbb");
        });
}

#[test]
fn test_separate_block_comments_are_separate_paragraphs() {
    let comment = parse_comment("/* Aaa */ /* Bbb */");

    assert_comment(&comment)
        .block_count(2)
        .block(0, |block| {
            block.assert_paragraph().text(" Aaa ");
        })
        .block(1, |block| {
            block.assert_paragraph().text(" Bbb ");
        });
}

#[test]
fn test_text_before_block_command_is_its_own_paragraph() {
    let comment = parse_comment("// \\brief Aaa\n//\n// Bbb");

    assert_comment(&comment)
        .block_count(3)
        .block(0, |block| {
            block.assert_paragraph().text(" ").is_whitespace();
        })
        .block(1, |block| {
            block
                .assert_block_command()
                .name("brief")
                .paragraph(|p| {
                    p.text(" Aaa");
                });
        })
        .block(2, |block| {
            block.assert_paragraph().text(" Bbb");
        });
}

#[test]
fn test_escapes_become_text() {
    let comment = parse_comment("// a\\@b \\\\ c\\<d");

    assert_comment(&comment).block_count(1).block(0, |block| {
        block.assert_paragraph().text(" a@b \\ c<d");
    });
}

#[test]
fn test_stray_introducers_stay_text() {
    let comment = parse_comment("// 1 < 2 and \\ alone");

    assert_comment(&comment).block_count(1).block(0, |block| {
        block.assert_paragraph().text(" 1 < 2 and \\ alone");
    });
}

#[test]
fn test_plain_text_without_decoration() {
    let comment = parse_comment("Aaa\nBbb\n\nCcc");

    assert_comment(&comment)
        .block_count(2)
        .block(0, |block| {
            block.assert_paragraph().inline_count(2).text("AaaBbb");
        })
        .block(1, |block| {
            block.assert_paragraph().text("Ccc");
        });
}
