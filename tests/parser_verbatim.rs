//! Verbatim blocks and verbatim lines

use doccomment::comments::diagnostics::{Diagnostic, DiagnosticKind};
use doccomment::comments::parsing::{parse_comment, parse_comment_with_diagnostics};
use doccomment::comments::testing::assert_comment;
use rstest::rstest;

#[test]
fn test_empty_verbatim_block() {
    let comment = parse_comment("// \\verbatim\\endverbatim");

    assert_comment(&comment).block_count(2).block(1, |block| {
        block
            .assert_verbatim_block()
            .name("verbatim")
            .line_count(0)
            .closed(true);
    });
}

#[test]
fn test_verbatim_block_on_one_line() {
    let comment = parse_comment("// \\verbatim Aaa \\endverbatim after");

    assert_comment(&comment)
        .block_count(3)
        .block(1, |block| {
            block.assert_verbatim_block().lines(&[" Aaa "]).closed(true);
        })
        .block(2, |block| {
            block.assert_paragraph().text(" after");
        });
}

#[test]
fn test_verbatim_block_across_lines() {
    let comment = parse_comment("// \\verbatim\n// Aaa\n//\n// \\endverbatim\n");

    assert_comment(&comment).block_count(2).block(1, |block| {
        block
            .assert_verbatim_block()
            .line_count(3)
            .line(0, " Aaa")
            .line(1, "")
            .line(2, " ")
            .closed(true);
    });
}

#[rstest]
#[case::line_comments("/// \\code\n/// Aaa\n/// \\endcode")]
#[case::block_comment("/** \\code\n * Aaa\n * \\endcode*/")]
fn test_code_block_decorations(#[case] source: &str) {
    let comment = parse_comment(source);

    assert_comment(&comment).block_count(2).block(1, |block| {
        block
            .assert_verbatim_block()
            .name("code")
            .lines(&[" Aaa", " "])
            .closed(true);
    });
}

#[test]
fn test_commands_inside_verbatim_are_text() {
    let (comment, diagnostics) =
        parse_comment_with_diagnostics("// \\code\n// \\brief <b> \\unknown\n// \\endcode");

    assert_comment(&comment).block_count(2).block(1, |block| {
        block
            .assert_verbatim_block()
            .lines(&[" \\brief <b> \\unknown", " "]);
    });
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn test_unterminated_verbatim_block() {
    let (comment, diagnostics) = parse_comment_with_diagnostics("// \\verbatim\n// Aaa");

    assert_comment(&comment).block_count(2).block(1, |block| {
        block.assert_verbatim_block().lines(&[" Aaa"]).closed(false);
    });
    assert_eq!(
        diagnostics,
        vec![Diagnostic::new(DiagnosticKind::UnterminatedVerbatimBlock, 3)]
    );
}

#[test]
fn test_closing_command_needs_same_marker() {
    let comment = parse_comment("// @code\n// \\endcode");

    assert_comment(&comment).block(1, |block| {
        block
            .assert_verbatim_block()
            .lines(&[" \\endcode"])
            .closed(false);
    });
}

#[rstest]
#[case::inline_formula("// \\f$ x^2 \\f$", "f$")]
#[case::display_formula("// \\f[ x^2 \\f]", "f[")]
#[case::environment_formula("// \\f{ x^2 \\f}", "f{")]
fn test_formulas(#[case] source: &str, #[case] name: &str) {
    let comment = parse_comment(source);

    assert_comment(&comment).block_count(2).block(1, |block| {
        block
            .assert_verbatim_block()
            .name(name)
            .lines(&[" x^2 "])
            .closed(true);
    });
}

#[test]
fn test_verbatim_line() {
    let comment = parse_comment("// \\fn void foo(int x);");

    assert_comment(&comment).block_count(2).block(1, |block| {
        block
            .assert_verbatim_line()
            .name("fn")
            .text(" void foo(int x);");
    });
}

#[test]
fn test_verbatim_line_keeps_escapes_and_stars() {
    let comment = parse_comment("/** \\fn void *foo(const char *zzz = \"\\$\");*/");

    assert_comment(&comment).block_count(2).block(1, |block| {
        block
            .assert_verbatim_line()
            .name("fn")
            .text(" void *foo(const char *zzz = \"\\$\");");
    });
}

#[test]
fn test_verbatim_line_without_text() {
    let comment = parse_comment("/// \\fn\n/// Aaa");

    assert_comment(&comment)
        .block_count(3)
        .block(1, |block| {
            block.assert_verbatim_line().name("fn").text("");
        })
        .block(2, |block| {
            block.assert_paragraph().text(" Aaa");
        });
}
