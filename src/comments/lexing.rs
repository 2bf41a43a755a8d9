//! Lexing
//!
//!     Lexing runs in two stages. First, [decoration](decoration) splits the raw comment into
//!     logical lines with the comment markers (`//`, `///`, `/**`, ` * `, ...) removed. Then the
//!     [lexer](lexer) scans those lines one token at a time.
//!
//!     The lexer has three modes:
//!
//!         - Normal: text runs, commands, escapes and the start of HTML tags. Scanning is done
//!           by the logos [Lexeme](tokens::Lexeme) vocabulary.
//!         - Tag: inside `<name ... >`, scanned by [TagLexeme](tokens::TagLexeme). The lexer
//!           leaves it at `>`, `/>`, end of line, or when the next character can't continue a tag.
//!         - Verbatim: after a verbatim-block command. Lines are returned whole until the closing
//!           command (same marker, closing name) shows up, possibly mid-line.
//!
//!     Verbatim-line commands are resolved in the lexer too: the token carries the rest of the
//!     physical line as its text.
//!
//!     The lexer never fails. Anything it can't classify becomes text.

pub mod decoration;
pub mod lexer;
pub mod tokens;

pub use decoration::{split_lines, Line};
pub use lexer::{Cursor, Lexer, Mode};
pub use tokens::{Token, TokenKind};

use crate::comments::commands::CommandTable;

/// Convenience function to tokenize a comment with the given command table
pub fn tokenize<'src>(source: &'src str, commands: &CommandTable) -> Vec<Token<'src>> {
    Lexer::new(source, commands).tokenize()
}
