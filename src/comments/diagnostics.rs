//! Diagnostics for degraded constructs
//!
//! Parsing never fails. When the parser meets something malformed (an unterminated tag, a
//! verbatim block with no closing command, a command missing its word) it builds the
//! best-effort node and reports what happened to a [`DiagnosticSink`]. The sink only observes:
//! the tree is identical whether diagnostics are collected, ignored, or dropped.
//!
//! ```ignore
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let comment = parse_comment_with(source, &CommandTable::default(), &mut diagnostics);
//! for diagnostic in &diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! ```

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Command name not in the command table; parsed as an inline command without arguments
    UnknownCommand,
    /// A command expected a word argument that was not there
    MissingArgument,
    /// A parameter command without a parameter name
    MissingParamName,
    /// Direction annotation only recognized after removing blanks, as in `[in, out]`
    ParamDirectionSpaces,
    /// Unrecognized direction annotation; the direction falls back to `In`
    InvalidParamDirection,
    /// A block or parameter command with no prose after it
    EmptyParagraph,
    UnterminatedHtmlStartTag,
    UnterminatedHtmlEndTag,
    /// `name=` followed by something other than a quoted string
    HtmlExpectedQuotedString,
    /// A stray `=` or quoted string inside a tag
    HtmlExpectedIdentOrGreater,
    UnterminatedVerbatimBlock,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownCommand => "unknown-command",
            DiagnosticKind::MissingArgument => "missing-argument",
            DiagnosticKind::MissingParamName => "missing-param-name",
            DiagnosticKind::ParamDirectionSpaces => "param-direction-spaces",
            DiagnosticKind::InvalidParamDirection => "invalid-param-direction",
            DiagnosticKind::EmptyParagraph => "empty-paragraph",
            DiagnosticKind::UnterminatedHtmlStartTag => "unterminated-html-start-tag",
            DiagnosticKind::UnterminatedHtmlEndTag => "unterminated-html-end-tag",
            DiagnosticKind::HtmlExpectedQuotedString => "html-expected-quoted-string",
            DiagnosticKind::HtmlExpectedIdentOrGreater => "html-expected-ident-or-greater",
            DiagnosticKind::UnterminatedVerbatimBlock => "unterminated-verbatim-block",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownCommand => "unknown command",
            DiagnosticKind::MissingArgument => "command is missing its argument",
            DiagnosticKind::MissingParamName => "parameter command has no parameter name",
            DiagnosticKind::ParamDirectionSpaces => {
                "whitespace is not allowed in a parameter direction"
            }
            DiagnosticKind::InvalidParamDirection => "unrecognized parameter direction",
            DiagnosticKind::EmptyParagraph => "command has an empty paragraph",
            DiagnosticKind::UnterminatedHtmlStartTag => "HTML start tag is not terminated",
            DiagnosticKind::UnterminatedHtmlEndTag => "HTML end tag is not terminated",
            DiagnosticKind::HtmlExpectedQuotedString => "expected a quoted attribute value",
            DiagnosticKind::HtmlExpectedIdentOrGreater => {
                "expected an attribute name or the end of the tag"
            }
            DiagnosticKind::UnterminatedVerbatimBlock => "verbatim block is not terminated",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A reported diagnostic: what happened and where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Byte offset in the comment source
    pub offset: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, offset: usize) -> Self {
        Diagnostic { kind, offset }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "warning: {} [{}] at offset {}",
            self.kind.message(),
            self.kind.code(),
            self.offset
        )
    }
}

/// Receiver of diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, kind: DiagnosticKind, offset: usize);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, kind: DiagnosticKind, offset: usize) {
        self.push(Diagnostic::new(kind, offset));
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F> DiagnosticSink for FnSink<F>
where
    F: FnMut(DiagnosticKind, usize),
{
    fn report(&mut self, kind: DiagnosticKind, offset: usize) {
        (self.0)(kind, offset)
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _kind: DiagnosticKind, _offset: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(DiagnosticKind::UnknownCommand, 3);
        assert_eq!(sink, vec![Diagnostic::new(DiagnosticKind::UnknownCommand, 3)]);
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        {
            let mut sink = FnSink(|_kind: DiagnosticKind, _offset: usize| count += 1);
            sink.report(DiagnosticKind::EmptyParagraph, 0);
            sink.report(DiagnosticKind::EmptyParagraph, 1);
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_display() {
        let diagnostic = Diagnostic::new(DiagnosticKind::UnterminatedVerbatimBlock, 12);
        assert_eq!(
            diagnostic.to_string(),
            "warning: verbatim block is not terminated [unterminated-verbatim-block] at offset 12"
        );
    }
}
