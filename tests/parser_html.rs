//! HTML start and end tags inside paragraphs

use doccomment::comments::diagnostics::{Diagnostic, DiagnosticKind};
use doccomment::comments::parsing::{parse_comment, parse_comment_with_diagnostics};
use doccomment::comments::testing::assert_comment;
use rstest::rstest;

#[rstest]
#[case::bare("// <a>", false)]
#[case::blank_before_greater("// <a >", false)]
#[case::self_closing("// <br/>", true)]
#[case::self_closing_with_blank("// <br />", true)]
fn test_start_tag_without_attributes(#[case] source: &str, #[case] self_closing: bool) {
    let (comment, diagnostics) = parse_comment_with_diagnostics(source);

    assert_comment(&comment).block_count(1).block(0, |block| {
        block.assert_paragraph().inline_count(2).inline(1, |inline| {
            inline
                .assert_html_start_tag()
                .attribute_count(0)
                .self_closing(self_closing);
        });
    });
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn test_unterminated_start_tag() {
    let (comment, diagnostics) = parse_comment_with_diagnostics("// <a");

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline_count(2).inline(1, |inline| {
            inline
                .assert_html_start_tag()
                .name("a")
                .attribute_count(0)
                .self_closing(false);
        });
    });
    assert_eq!(
        diagnostics,
        vec![Diagnostic::new(DiagnosticKind::UnterminatedHtmlStartTag, 3)]
    );
}

#[test]
fn test_attribute_without_value() {
    let comment = parse_comment("// <input checked>");

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline(1, |inline| {
            inline
                .assert_html_start_tag()
                .name("input")
                .attribute_count(1)
                .attribute(0, "checked", "");
        });
    });
}

#[rstest]
#[case::double_quotes("// <a href=\"bbb\">")]
#[case::single_quotes("// <a href='bbb'>")]
#[case::blanks_around_equals("// <a href = \"bbb\">")]
fn test_quoted_attribute_values(#[case] source: &str) {
    let (comment, diagnostics) = parse_comment_with_diagnostics(source);

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline(1, |inline| {
            inline
                .assert_html_start_tag()
                .name("a")
                .attribute_count(1)
                .attribute(0, "href", "bbb")
                .self_closing(false);
        });
    });
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn test_several_attributes_keep_order() {
    let comment = parse_comment("// <a href=\"https://example.com\" title='docs' hidden>");

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline(1, |inline| {
            inline
                .assert_html_start_tag()
                .attribute_count(3)
                .attribute(0, "href", "https://example.com")
                .attribute(1, "title", "docs")
                .attribute(2, "hidden", "");
        });
    });
}

#[test]
fn test_equals_without_value() {
    let (comment, diagnostics) = parse_comment_with_diagnostics("// <a href=>");

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline(1, |inline| {
            inline
                .assert_html_start_tag()
                .attribute_count(1)
                .attribute(0, "href", "")
                .self_closing(false);
        });
    });
    assert_eq!(
        diagnostics,
        vec![Diagnostic::new(DiagnosticKind::HtmlExpectedQuotedString, 10)]
    );
}

#[rstest]
#[case::closed("// </a>")]
#[case::blanks("// </a >")]
fn test_end_tag(#[case] source: &str) {
    let (comment, diagnostics) = parse_comment_with_diagnostics(source);

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline_count(2).inline(1, |inline| {
            inline.assert_html_end_tag().name("a");
        });
    });
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn test_unterminated_end_tag() {
    let (comment, diagnostics) = parse_comment_with_diagnostics("// </a");

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline(1, |inline| {
            inline.assert_html_end_tag().name("a");
        });
    });
    assert_eq!(
        diagnostics,
        vec![Diagnostic::new(DiagnosticKind::UnterminatedHtmlEndTag, 3)]
    );
}

#[test]
fn test_tags_around_text() {
    let comment = parse_comment("// <a href=\"x\">link</a> and \\c code");

    assert_comment(&comment).block_count(1).block(0, |block| {
        block
            .assert_paragraph()
            .inline_count(6)
            .text(" link and ")
            .inline(1, |inline| {
                inline.assert_html_start_tag().name("a").attribute(0, "href", "x");
            })
            .inline(2, |inline| {
                inline.assert_text().text("link");
            })
            .inline(3, |inline| {
                inline.assert_html_end_tag().name("a");
            })
            .inline(5, |inline| {
                inline.assert_inline_command().name("c").arg("code");
            });
    });
}

#[test]
fn test_less_than_without_tag_name_is_text() {
    let comment = parse_comment("// a < b");

    assert_comment(&comment).block(0, |block| {
        block.assert_paragraph().inline_count(3).text(" a < b");
    });
}

#[test]
fn test_tag_at_line_end_keeps_trailing_newline() {
    let comment = parse_comment("// <br/>\n// Aaa");

    assert_comment(&comment).block_count(1).block(0, |block| {
        block
            .assert_paragraph()
            .inline(1, |inline| {
                inline.assert_html_start_tag().self_closing(true).trailing_newline(true);
            })
            .inline(2, |inline| {
                inline.assert_text().text(" Aaa");
            });
    });
}
