//! Mode-switching comment lexer
//!
//! The lexer holds only immutable data: the source, its logical lines and the command table.
//! All position state lives in a [`Cursor`] that the caller threads through [`Lexer::lex`],
//! so lexing is a pure function of `(input, cursor)` and any cursor can be saved and replayed.

use super::decoration::{is_horizontal_whitespace, split_lines, Line};
use super::tokens::{Lexeme, TagLexeme, Token, TokenKind};
use crate::comments::commands::{CommandKind, CommandTable};
use logos::Logos;
use tracing::trace;

/// Lexing mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Inside an HTML tag, between `<name` and `>`
    HtmlTag,
    /// Inside a verbatim block; `closing` is the full closing command including its marker
    Verbatim { closing: String },
}

/// Explicit lexer position: logical line, byte column within it, and mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    line: usize,
    column: usize,
    mode: Mode,
}

impl Cursor {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

pub struct Lexer<'src, 'cmd> {
    source: &'src str,
    lines: Vec<Line<'src>>,
    commands: &'cmd CommandTable,
}

impl<'src, 'cmd> Lexer<'src, 'cmd> {
    pub fn new(source: &'src str, commands: &'cmd CommandTable) -> Self {
        Lexer {
            source,
            lines: split_lines(source),
            commands,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn lines(&self) -> &[Line<'src>] {
        &self.lines
    }

    pub fn commands(&self) -> &'cmd CommandTable {
        self.commands
    }

    /// Cursor at the start of the comment
    pub fn start(&self) -> Cursor {
        Cursor {
            line: 0,
            column: 0,
            mode: Mode::Normal,
        }
    }

    /// Lex one token at `cursor`, advancing it. Returns `Eof` forever once input is exhausted.
    pub fn lex(&self, cursor: &mut Cursor) -> Token<'src> {
        let Some(line) = self.lines.get(cursor.line).copied() else {
            return self.eof();
        };

        if let Mode::Verbatim { closing } = &cursor.mode {
            let closing = closing.clone();
            return self.lex_verbatim(line, &closing, cursor);
        }

        if cursor.column >= line.len() {
            return self.lex_line_end(line, cursor);
        }

        match cursor.mode {
            Mode::HtmlTag => self.lex_tag(line, cursor),
            _ => self.lex_normal(line, cursor),
        }
    }

    /// Lex the whole comment from the start, up to and including `Eof`
    pub fn tokenize(&self) -> Vec<Token<'src>> {
        let mut cursor = self.start();
        let mut tokens = Vec::new();
        loop {
            let token = self.lex(&mut cursor);
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn eof(&self) -> Token<'src> {
        Token::new(TokenKind::Eof, "", self.source.len())
    }

    fn lex_line_end(&self, line: Line<'src>, cursor: &mut Cursor) -> Token<'src> {
        cursor.mode = Mode::Normal;
        let end = line.offset + line.len();
        cursor.next_line();
        match self.lines.get(cursor.line) {
            Some(next) => Token::new(TokenKind::Newline, &self.source[end..next.offset], end),
            None => self.eof(),
        }
    }

    fn lex_normal(&self, line: Line<'src>, cursor: &mut Cursor) -> Token<'src> {
        let rest = &line.text[cursor.column..];
        let offset = line.offset + cursor.column;
        let mut scanner = Lexeme::lexer(rest);
        let Some(result) = scanner.next() else {
            return self.lex_line_end(line, cursor);
        };
        let slice: &'src str = scanner.slice();

        match result {
            Ok(Lexeme::Command) | Ok(Lexeme::FormulaCommand) => {
                self.lex_command(line, slice, offset, cursor)
            }
            Ok(Lexeme::Escape) => {
                cursor.column += slice.len();
                Token::new(TokenKind::Text(&slice[1..]), slice, offset)
            }
            Ok(Lexeme::HtmlStartTag) => {
                cursor.column = skip_blanks(line.text, cursor.column + slice.len());
                let opens_tag = line.text[cursor.column..]
                    .chars()
                    .next()
                    .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_alphabetic());
                if opens_tag {
                    trace!(offset, "entering html tag mode");
                    cursor.mode = Mode::HtmlTag;
                }
                Token::new(TokenKind::HtmlStartTag(&slice[1..]), slice, offset)
            }
            Ok(Lexeme::HtmlEndTag) => {
                cursor.column += slice.len();
                let name = slice[2..].trim_matches(|c| matches!(c, ' ' | '\t' | '\x0B' | '\x0C'));
                if line.text[cursor.column..].starts_with('>') {
                    cursor.mode = Mode::HtmlTag;
                }
                Token::new(TokenKind::HtmlEndTag(name), slice, offset)
            }
            Ok(Lexeme::Text) | Ok(Lexeme::Stray) | Err(_) => {
                cursor.column += slice.len();
                Token::new(TokenKind::Text(slice), slice, offset)
            }
        }
    }

    fn lex_command(
        &self,
        line: Line<'src>,
        slice: &'src str,
        offset: usize,
        cursor: &mut Cursor,
    ) -> Token<'src> {
        let marker = if slice.starts_with('@') { '@' } else { '\\' };
        let name = &slice[1..];
        let start = cursor.column;
        cursor.column += slice.len();

        match self.commands.kind(name) {
            Some(CommandKind::VerbatimBlock) => {
                let closing = format!("{}{}", marker, self.commands.closing_name(name));
                if cursor.column >= line.len() {
                    cursor.next_line();
                }
                trace!(offset, closing = %closing, "entering verbatim mode");
                cursor.mode = Mode::Verbatim { closing };
                Token::new(TokenKind::VerbatimBlockBegin { name, marker }, slice, offset)
            }
            Some(CommandKind::VerbatimLine) => {
                let text = &line.text[cursor.column..];
                cursor.column = line.len();
                Token::new(
                    TokenKind::VerbatimLine { name, text },
                    &line.text[start..],
                    offset,
                )
            }
            _ => Token::new(TokenKind::Command { name, marker }, slice, offset),
        }
    }

    fn lex_tag(&self, line: Line<'src>, cursor: &mut Cursor) -> Token<'src> {
        let rest = &line.text[cursor.column..];
        let offset = line.offset + cursor.column;
        let mut scanner = TagLexeme::lexer(rest);
        let result = scanner.next();
        let slice: &'src str = scanner.slice();

        let kind = match result {
            Some(Ok(TagLexeme::Ident)) => TokenKind::HtmlIdent(slice),
            Some(Ok(TagLexeme::Equals)) => TokenKind::HtmlEquals,
            Some(Ok(TagLexeme::QuotedString)) => TokenKind::HtmlQuotedString(unquote(slice)),
            Some(Ok(TagLexeme::Greater)) => {
                return self.close_tag(TokenKind::HtmlGreater, slice, offset, cursor)
            }
            Some(Ok(TagLexeme::SlashGreater)) => {
                return self.close_tag(TokenKind::HtmlSlashGreater, slice, offset, cursor)
            }
            Some(Ok(TagLexeme::Slash)) => {
                return self.close_tag(TokenKind::Text(slice), slice, offset, cursor)
            }
            Some(Err(_)) | None => {
                cursor.mode = Mode::Normal;
                return self.lex_normal(line, cursor);
            }
        };

        cursor.column = skip_blanks(line.text, cursor.column + slice.len());
        let continues = line.text[cursor.column..].chars().next().is_some_and(|c| {
            c.is_ascii_alphabetic() || matches!(c, '=' | '"' | '\'' | '>' | '/')
        });
        if !continues {
            trace!(offset, "leaving html tag mode");
            cursor.mode = Mode::Normal;
        }
        Token::new(kind, slice, offset)
    }

    fn close_tag(
        &self,
        kind: TokenKind<'src>,
        slice: &'src str,
        offset: usize,
        cursor: &mut Cursor,
    ) -> Token<'src> {
        cursor.column += slice.len();
        cursor.mode = Mode::Normal;
        Token::new(kind, slice, offset)
    }

    fn lex_verbatim(&self, line: Line<'src>, closing: &str, cursor: &mut Cursor) -> Token<'src> {
        let rest = &line.text[cursor.column..];
        let offset = line.offset + cursor.column;
        match rest.find(closing) {
            Some(0) => {
                let spelling = &rest[..closing.len()];
                cursor.column += closing.len();
                cursor.mode = Mode::Normal;
                trace!(offset, "leaving verbatim mode");
                Token::new(
                    TokenKind::VerbatimBlockEnd {
                        name: &spelling[1..],
                    },
                    spelling,
                    offset,
                )
            }
            Some(position) => {
                let text = &rest[..position];
                cursor.column += position;
                Token::new(TokenKind::VerbatimBlockLine(text), text, offset)
            }
            None => {
                cursor.next_line();
                Token::new(TokenKind::VerbatimBlockLine(rest), rest, offset)
            }
        }
    }
}

fn skip_blanks(text: &str, mut column: usize) -> usize {
    let bytes = text.as_bytes();
    while column < bytes.len() && is_horizontal_whitespace(bytes[column]) {
        column += 1;
    }
    column
}

/// Strip the quotes from a quoted attribute value; the closing quote may be missing
fn unquote(slice: &str) -> &str {
    let quote = &slice[..1];
    if slice.len() >= 2 && slice.ends_with(quote) {
        &slice[1..slice.len() - 1]
    } else {
        &slice[1..]
    }
}
