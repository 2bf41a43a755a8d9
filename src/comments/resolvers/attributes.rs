//! HTML attribute lists
//!
//! Turns the run of tag-body tokens between `<name` and `>` into ordered `(name, value)`
//! pairs. `name` alone gets the empty value. `name=` followed by anything but a quoted string
//! keeps the attribute with the empty value and skips the stray `=`/quoted tokens. An `=` or
//! quoted string with no attribute name in front is skipped.

use crate::comments::ast::HtmlAttribute;
use crate::comments::diagnostics::DiagnosticKind;
use crate::comments::lexing::{Token, TokenKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeResolution<'src> {
    pub attributes: Vec<HtmlAttribute<'src>>,
    /// Problems found, with the offset each one refers to
    pub issues: Vec<(DiagnosticKind, usize)>,
}

fn is_stray(token: &Token<'_>) -> bool {
    matches!(
        token.kind,
        TokenKind::HtmlEquals | TokenKind::HtmlQuotedString(_)
    )
}

/// Resolve the attribute tokens of one start tag
///
/// Tokens other than `HtmlIdent`, `HtmlEquals` and `HtmlQuotedString` end the run.
pub fn resolve_attributes<'src>(tokens: &[Token<'src>]) -> AttributeResolution<'src> {
    let mut resolution = AttributeResolution::default();
    let mut i = 0;

    while let Some(token) = tokens.get(i) {
        match token.kind {
            TokenKind::HtmlIdent(name) => {
                i += 1;
                if !matches!(tokens.get(i).map(|t| &t.kind), Some(TokenKind::HtmlEquals)) {
                    resolution
                        .attributes
                        .push(HtmlAttribute::new(name, "").at(token.offset));
                    continue;
                }
                let equals = &tokens[i];
                i += 1;
                match tokens.get(i).map(|t| &t.kind) {
                    Some(TokenKind::HtmlQuotedString(value)) => {
                        resolution
                            .attributes
                            .push(HtmlAttribute::new(name, *value).at(token.offset));
                        i += 1;
                    }
                    _ => {
                        resolution
                            .issues
                            .push((DiagnosticKind::HtmlExpectedQuotedString, equals.offset));
                        resolution
                            .attributes
                            .push(HtmlAttribute::new(name, "").at(token.offset));
                        while tokens.get(i).is_some_and(is_stray) {
                            i += 1;
                        }
                    }
                }
            }
            TokenKind::HtmlEquals | TokenKind::HtmlQuotedString(_) => {
                resolution
                    .issues
                    .push((DiagnosticKind::HtmlExpectedIdentOrGreater, token.offset));
                while tokens.get(i).is_some_and(is_stray) {
                    i += 1;
                }
            }
            _ => break,
        }
    }

    resolution
}
