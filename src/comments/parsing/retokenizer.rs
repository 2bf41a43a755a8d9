//! Re-lexing of text tokens
//!
//! Command arguments are not tokens of their own: `\c word` lexes as a command followed by
//! the text `" word"`. The retokenizer takes the run of consecutive text tokens after a
//! command and carves words (or a bracketed annotation) out of it. A word may straddle token
//! boundaries, e.g. `foo\@bar` spans three text tokens; such words are copied, all others
//! borrow from the source.
//!
//! Whatever is not consumed goes back to the parser via [`Retokenizer::into_leftover`]. A
//! partially consumed token comes back as a shorter text token, never as an empty one.

use crate::comments::ast::Argument;
use crate::comments::lexing::{Token, TokenKind};
use std::borrow::Cow;

#[derive(Debug)]
pub struct Retokenizer<'src> {
    tokens: Vec<Token<'src>>,
    index: usize,
    pos: usize,
}

impl<'src> Retokenizer<'src> {
    /// Every token must be a text token; anything else is treated as empty text
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        let mut retokenizer = Retokenizer {
            tokens,
            index: 0,
            pos: 0,
        };
        retokenizer.skip_empty_tokens();
        retokenizer
    }

    fn is_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn text(&self) -> &'src str {
        self.tokens
            .get(self.index)
            .and_then(Token::as_text)
            .unwrap_or("")
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.index)
            .map(|token| token.text_offset() + self.pos)
            .unwrap_or(0)
    }

    fn peek(&self) -> Option<char> {
        if self.is_end() {
            return None;
        }
        self.text()[self.pos..].chars().next()
    }

    fn consume_char(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            self.skip_empty_tokens();
        }
    }

    fn skip_empty_tokens(&mut self) {
        while !self.is_end() && self.pos >= self.text().len() {
            self.index += 1;
            self.pos = 0;
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.consume_char();
        }
    }

    /// Build an argument for chars gathered since `start`
    fn argument(&self, start: (usize, usize), offset: usize, gathered: String) -> Argument<'src> {
        let (index, pos) = start;
        let token_text = self
            .tokens
            .get(index)
            .and_then(Token::as_text)
            .unwrap_or("");
        if pos + gathered.len() <= token_text.len() {
            Argument::new(&token_text[pos..pos + gathered.len()], offset)
        } else {
            Argument::new(Cow::Owned(gathered), offset)
        }
    }

    /// Next run of non-whitespace characters, after skipping leading whitespace.
    /// Restores the position when there is no word.
    pub fn lex_word(&mut self) -> Option<Argument<'src>> {
        let saved = (self.index, self.pos);
        self.consume_whitespace();

        let start = (self.index, self.pos);
        let offset = self.offset();
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            word.push(c);
            self.consume_char();
        }

        if word.is_empty() {
            (self.index, self.pos) = saved;
            return None;
        }
        Some(self.argument(start, offset, word))
    }

    /// A sequence starting with `open` and running through the first `close`, after skipping
    /// leading whitespace. Restores the position when the sequence is missing or unclosed.
    pub fn lex_delimited(&mut self, open: char, close: char) -> Option<Argument<'src>> {
        let saved = (self.index, self.pos);
        self.consume_whitespace();

        if self.peek() != Some(open) {
            (self.index, self.pos) = saved;
            return None;
        }

        let start = (self.index, self.pos);
        let offset = self.offset();
        let mut seq = String::from(open);
        self.consume_char();
        let mut closed = false;
        while let Some(c) = self.peek() {
            seq.push(c);
            self.consume_char();
            if c == close {
                closed = true;
                break;
            }
        }

        if !closed {
            (self.index, self.pos) = saved;
            return None;
        }
        Some(self.argument(start, offset, seq))
    }

    /// Unconsumed tokens, in stream order
    pub fn into_leftover(self) -> Vec<Token<'src>> {
        let mut leftover = Vec::new();
        if self.is_end() {
            return leftover;
        }

        let mut index = self.index;
        if self.pos > 0 {
            let rest = &self.text()[self.pos..];
            leftover.push(Token::new(TokenKind::Text(rest), rest, self.offset()));
            index += 1;
        }
        leftover.extend(self.tokens.into_iter().skip(index));
        leftover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(text: &str, offset: usize) -> Token<'_> {
        Token::new(TokenKind::Text(text), text, offset)
    }

    #[test]
    fn test_word_borrows_from_single_token() {
        let mut retokenizer = Retokenizer::new(vec![text(" aaa bbb", 3)]);
        let word = retokenizer.lex_word().unwrap();
        assert_eq!(word.as_str(), "aaa");
        assert_eq!(word.offset, 4);
        assert!(matches!(word.text, Cow::Borrowed(_)));

        let leftover = retokenizer.into_leftover();
        assert_eq!(leftover, vec![text(" bbb", 7)]);
    }

    #[test]
    fn test_word_spanning_tokens_is_owned() {
        let escape = Token::new(TokenKind::Text("@"), "\\@", 4);
        let mut retokenizer = Retokenizer::new(vec![text(" foo", 0), escape, text("bar baz", 6)]);
        let word = retokenizer.lex_word().unwrap();
        assert_eq!(word.as_str(), "foo@bar");
        assert!(matches!(word.text, Cow::Owned(_)));
        assert_eq!(retokenizer.into_leftover(), vec![text(" baz", 9)]);
    }

    #[test]
    fn test_missing_word_restores_position() {
        let mut retokenizer = Retokenizer::new(vec![text("   ", 0)]);
        assert!(retokenizer.lex_word().is_none());
        assert_eq!(retokenizer.into_leftover(), vec![text("   ", 0)]);
    }

    #[test]
    fn test_word_consuming_everything_leaves_nothing() {
        let mut retokenizer = Retokenizer::new(vec![text(" aaa", 0)]);
        assert_eq!(retokenizer.lex_word().unwrap().as_str(), "aaa");
        assert!(retokenizer.into_leftover().is_empty());
    }

    #[test]
    fn test_delimited_sequence_keeps_inner_blanks() {
        let mut retokenizer = Retokenizer::new(vec![text(" [in, out] aaa", 0)]);
        let annotation = retokenizer.lex_delimited('[', ']').unwrap();
        assert_eq!(annotation.as_str(), "[in, out]");
        assert_eq!(annotation.offset, 1);
        assert_eq!(retokenizer.lex_word().unwrap().as_str(), "aaa");
    }

    #[test]
    fn test_delimited_sequence_requires_open_and_close() {
        let mut retokenizer = Retokenizer::new(vec![text(" aaa", 0)]);
        assert!(retokenizer.lex_delimited('[', ']').is_none());
        assert_eq!(retokenizer.lex_word().unwrap().as_str(), "aaa");

        let mut retokenizer = Retokenizer::new(vec![text(" [in aaa", 0)]);
        assert!(retokenizer.lex_delimited('[', ']').is_none());
        assert_eq!(retokenizer.into_leftover(), vec![text(" [in aaa", 0)]);
    }
}
