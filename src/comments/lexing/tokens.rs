//! Token definitions
//!
//! The scanning vocabularies are logos enums: [`Lexeme`] for ordinary comment text and
//! [`TagLexeme`] for the inside of an HTML start tag. They only classify raw slices; the
//! [`Lexer`](super::Lexer) turns them into [`Token`]s, which carry resolved payloads
//! and byte offsets into the comment source.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Scanning vocabulary for comment text outside of tags and verbatim regions
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// `\name` or `@name`
    #[regex(r"[\\@][A-Za-z][A-Za-z0-9]*")]
    Command,

    /// Formula delimiters `\f$`, `\f[`, `\f]`, `\f{`, `\f}`
    #[regex(r"[\\@]f[$\[\]{}]")]
    FormulaCommand,

    /// `\\`, `\@`, `\<`, ... and `\::`
    #[regex(r#"[\\@][\\@&$#<>%".:]"#)]
    #[regex(r"[\\@]::")]
    Escape,

    #[regex(r"<[A-Za-z][A-Za-z0-9]*")]
    HtmlStartTag,

    #[regex(r"</[ \t\x0B\x0C]*[A-Za-z0-9]*[ \t\x0B\x0C]*")]
    HtmlEndTag,

    #[regex(r"[^\\@<\r\n]+")]
    Text,

    /// A command introducer or `<` that does not start anything
    #[regex(r"[\\@<]")]
    Stray,
}

/// Scanning vocabulary inside an HTML start tag
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum TagLexeme {
    #[regex(r"[A-Za-z0-9]+")]
    Ident,

    #[token("=")]
    Equals,

    /// Quoted value; an unterminated string runs to the end of the line
    #[regex(r#""[^"]*"?"#)]
    #[regex(r"'[^']*'?")]
    QuotedString,

    #[token(">")]
    Greater,

    #[token("/>")]
    SlashGreater,

    #[token("/")]
    Slash,
}

/// What a token is, with its resolved payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind<'src> {
    Text(&'src str),
    Newline,
    Command { name: &'src str, marker: char },
    VerbatimBlockBegin { name: &'src str, marker: char },
    VerbatimBlockLine(&'src str),
    VerbatimBlockEnd { name: &'src str },
    VerbatimLine { name: &'src str, text: &'src str },
    HtmlStartTag(&'src str),
    HtmlIdent(&'src str),
    HtmlEquals,
    HtmlQuotedString(&'src str),
    HtmlGreater,
    HtmlSlashGreater,
    HtmlEndTag(&'src str),
    Eof,
}

/// A token with its exact source spelling and byte offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub spelling: &'src str,
    pub offset: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, spelling: &'src str, offset: usize) -> Self {
        Token {
            kind,
            spelling,
            offset,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text(_))
    }

    pub fn is_newline(&self) -> bool {
        matches!(self.kind, TokenKind::Newline)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    pub fn as_text(&self) -> Option<&'src str> {
        match self.kind {
            TokenKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text holding nothing but blanks (and not empty)
    pub fn is_blank_text(&self) -> bool {
        self.as_text().is_some_and(|text| {
            !text.is_empty()
                && text
                    .bytes()
                    .all(super::decoration::is_horizontal_whitespace)
        })
    }

    /// Offset of the text payload; escapes start one byte after their introducer
    pub fn text_offset(&self) -> usize {
        match self.kind {
            TokenKind::Text(text) => self.offset + self.spelling.len() - text.len(),
            _ => self.offset,
        }
    }

    /// Offset one past the last byte of the spelling
    pub fn end(&self) -> usize {
        self.offset + self.spelling.len()
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text(text) => write!(f, "<text:{:?}>", text),
            TokenKind::Newline => write!(f, "<newline>"),
            TokenKind::Command { name, marker } => write!(f, "<command:{}{}>", marker, name),
            TokenKind::VerbatimBlockBegin { name, marker } => {
                write!(f, "<verbatim-begin:{}{}>", marker, name)
            }
            TokenKind::VerbatimBlockLine(text) => write!(f, "<verbatim-line:{:?}>", text),
            TokenKind::VerbatimBlockEnd { name } => write!(f, "<verbatim-end:{}>", name),
            TokenKind::VerbatimLine { name, text } => {
                write!(f, "<verbatim-line-command:{}:{:?}>", name, text)
            }
            TokenKind::HtmlStartTag(name) => write!(f, "<html-start:{}>", name),
            TokenKind::HtmlIdent(ident) => write!(f, "<html-ident:{}>", ident),
            TokenKind::HtmlEquals => write!(f, "<html-equals>"),
            TokenKind::HtmlQuotedString(value) => write!(f, "<html-quoted:{:?}>", value),
            TokenKind::HtmlGreater => write!(f, "<html-greater>"),
            TokenKind::HtmlSlashGreater => write!(f, "<html-slash-greater>"),
            TokenKind::HtmlEndTag(name) => write!(f, "<html-end:{}>", name),
            TokenKind::Eof => write!(f, "<eof>"),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
