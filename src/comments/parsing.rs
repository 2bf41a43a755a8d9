//! Parsing
//!
//!     Turns a raw comment into a [FullComment](crate::comments::ast::FullComment). The
//!     [Parser](parser::Parser) drives the lexer directly, one token at a time, because the
//!     lexer's mode depends on what was already seen (a verbatim-block command switches it into
//!     raw mode).
//!
//!     Block structure:
//!
//!         - Paragraphs run until a blank line, a block or parameter command, a verbatim
//!           command, or the end of the comment.
//!         - A block command owns the paragraph that follows it. Parameter commands first take
//!           an optional `[in]`/`[out]`/`[in,out]` annotation and a parameter name.
//!         - Verbatim blocks and verbatim lines are blocks of their own.
//!
//!     Parsing never fails; see [diagnostics](crate::comments::diagnostics) for how degraded
//!     input is reported.

pub mod parser;
pub mod retokenizer;

pub use parser::Parser;
pub use retokenizer::Retokenizer;

use crate::comments::ast::FullComment;
use crate::comments::commands::{CommandTable, DEFAULT_COMMANDS};
use crate::comments::diagnostics::{Diagnostic, DiagnosticSink, NullSink};

/// Parse a comment with the default command table, discarding diagnostics
pub fn parse_comment(source: &str) -> FullComment<'_> {
    parse_comment_with(source, &DEFAULT_COMMANDS, &mut NullSink)
}

/// Parse a comment with the given command table, reporting to `sink`
pub fn parse_comment_with<'src>(
    source: &'src str,
    commands: &CommandTable,
    sink: &mut dyn DiagnosticSink,
) -> FullComment<'src> {
    Parser::new(source, commands, sink).parse_full_comment()
}

/// Parse a comment with the default command table and collect its diagnostics
pub fn parse_comment_with_diagnostics(source: &str) -> (FullComment<'_>, Vec<Diagnostic>) {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let comment = parse_comment_with(source, &DEFAULT_COMMANDS, &mut diagnostics);
    (comment, diagnostics)
}
