//! Decoration stripping
//!
//!     Turns the raw text of a comment into the logical lines the lexer works on. A logical
//!     line is a slice of the source with the comment markers removed, together with the byte
//!     offset at which the slice starts. Line terminators are never part of a line.
//!
//! Recognized forms
//!
//!     Line comments:   `//`  `///`  `//!`    optionally followed by `<`
//!     Block comments:  `/*`  `/**`  `/*!`    optionally followed by `<`, closed by `*/`
//!
//!     Inside a block comment, each continuation line drops leading blanks followed by one `*`
//!     (never the `*` of the closing `*/`). Without a `*`, the blanks stay part of the line.
//!
//!     Several comments may follow each other. A comment after a block comment, or after an
//!     empty source line, is separated from the previous one by an empty logical line, which
//!     the parser sees as a paragraph break.
//!
//!     Text that does not start with `//` or `/*` is undecorated: each physical line is taken
//!     verbatim. Junk between two comments is taken verbatim up to the end of its line.

use serde::Serialize;

/// One logical line of comment text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line<'src> {
    pub text: &'src str,
    /// Byte offset of `text` within the comment source
    pub offset: usize,
}

impl<'src> Line<'src> {
    fn new(source: &'src str, start: usize, end: usize) -> Self {
        Line {
            text: &source[start..end],
            offset: start,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the line holds nothing but blanks
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(is_horizontal_whitespace)
    }
}

/// Whether the source uses comment markers at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decoration {
    Decorated,
    Plain,
}

pub fn detect(source: &str) -> Decoration {
    let trimmed = source.trim_start();
    if trimmed.starts_with("//") || trimmed.starts_with("/*") {
        Decoration::Decorated
    } else {
        Decoration::Plain
    }
}

/// Split a comment into logical lines, stripping decoration
pub fn split_lines(source: &str) -> Vec<Line<'_>> {
    match detect(source) {
        Decoration::Plain => split_plain(source),
        Decoration::Decorated => Stripper::new(source).run(),
    }
}

pub(crate) fn is_horizontal_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0B' | b'\x0C')
}

fn is_newline(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

fn split_plain(source: &str) -> Vec<Line<'_>> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        if is_newline(bytes[pos]) {
            lines.push(Line::new(source, start, pos));
            pos = skip_newline(bytes, pos);
            start = pos;
        } else {
            pos += 1;
        }
    }
    lines.push(Line::new(source, start, bytes.len()));
    lines
}

/// Position after the line terminator at `pos` (`\n`, `\r\n` or `\r`)
fn skip_newline(bytes: &[u8], pos: usize) -> usize {
    if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
        pos + 2
    } else {
        pos + 1
    }
}

struct Stripper<'src> {
    source: &'src str,
    bytes: &'src [u8],
    pos: usize,
    lines: Vec<Line<'src>>,
}

impl<'src> Stripper<'src> {
    fn new(source: &'src str) -> Self {
        Stripper {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            lines: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Line<'src>> {
        let mut separate = false;
        loop {
            let newlines = self.skip_whitespace();
            if self.pos >= self.bytes.len() {
                break;
            }
            if !self.lines.is_empty() && (separate || newlines > 1) {
                self.lines
                    .push(Line::new(self.source, self.pos, self.pos));
            }
            separate = false;
            if self.at("//") {
                self.line_comment();
            } else if self.at("/*") {
                self.block_comment();
                separate = true;
            } else {
                self.junk_line();
            }
        }
        self.lines
    }

    fn at(&self, marker: &str) -> bool {
        self.bytes[self.pos..].starts_with(marker.as_bytes())
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Skips blanks and line terminators, returning how many terminators were crossed
    fn skip_whitespace(&mut self) -> usize {
        let mut newlines = 0;
        while let Some(byte) = self.peek() {
            if is_newline(byte) {
                self.pos = skip_newline(self.bytes, self.pos);
                newlines += 1;
            } else if is_horizontal_whitespace(byte) {
                self.pos += 1;
            } else {
                break;
            }
        }
        newlines
    }

    fn line_end(&self, from: usize) -> usize {
        self.bytes[from..]
            .iter()
            .position(|&b| is_newline(b))
            .map_or(self.bytes.len(), |p| from + p)
    }

    fn line_comment(&mut self) {
        self.pos += 2;
        if matches!(self.peek(), Some(b'/') | Some(b'!')) {
            self.pos += 1;
        }
        if self.peek() == Some(b'<') {
            self.pos += 1;
        }
        let end = self.line_end(self.pos);
        self.lines.push(Line::new(self.source, self.pos, end));
        self.pos = end;
    }

    fn block_comment(&mut self) {
        self.pos += 2;
        match self.peek() {
            Some(b'*') if self.bytes.get(self.pos + 1) != Some(&b'/') => self.pos += 1,
            Some(b'!') => self.pos += 1,
            _ => {}
        }
        if self.peek() == Some(b'<') {
            self.pos += 1;
        }
        loop {
            let start = self.pos;
            let rest = &self.bytes[start..];
            let close = rest.windows(2).position(|w| w == b"*/");
            let newline = rest.iter().position(|&b| is_newline(b));
            match (close, newline) {
                (Some(c), Some(n)) if n < c => {
                    self.lines.push(Line::new(self.source, start, start + n));
                    self.pos = skip_newline(self.bytes, start + n);
                    self.skip_continuation();
                }
                (Some(c), _) => {
                    self.lines.push(Line::new(self.source, start, start + c));
                    self.pos = start + c + 2;
                    return;
                }
                (None, Some(n)) => {
                    self.lines.push(Line::new(self.source, start, start + n));
                    self.pos = skip_newline(self.bytes, start + n);
                    self.skip_continuation();
                }
                (None, None) => {
                    self.lines
                        .push(Line::new(self.source, start, self.bytes.len()));
                    self.pos = self.bytes.len();
                    return;
                }
            }
        }
    }

    /// Drops `   *` at the start of a block comment line, leaving `*/` alone
    fn skip_continuation(&mut self) {
        let mut probe = self.pos;
        while probe < self.bytes.len() && is_horizontal_whitespace(self.bytes[probe]) {
            probe += 1;
        }
        if self.bytes.get(probe) == Some(&b'*') && self.bytes.get(probe + 1) != Some(&b'/') {
            self.pos = probe + 1;
        }
    }

    fn junk_line(&mut self) {
        let end = self.line_end(self.pos);
        self.lines.push(Line::new(self.source, self.pos, end));
        self.pos = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        split_lines(source).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn test_line_comment_forms() {
        assert_eq!(texts("// Meow"), vec![" Meow"]);
        assert_eq!(texts("/// Meow"), vec![" Meow"]);
        assert_eq!(texts("//! Meow"), vec![" Meow"]);
        assert_eq!(texts("///< Meow"), vec![" Meow"]);
        assert_eq!(texts("//"), vec![""]);
    }

    #[test]
    fn test_consecutive_line_comments() {
        assert_eq!(texts("// Aaa\n// Bbb"), vec![" Aaa", " Bbb"]);
        assert_eq!(texts("// Aaa\r\n//\r\n// Bbb\n"), vec![" Aaa", "", " Bbb"]);
    }

    #[test]
    fn test_block_comment_forms() {
        assert_eq!(texts("/* Meow*/"), vec![" Meow"]);
        assert_eq!(texts("/** Meow*/"), vec![" Meow"]);
        assert_eq!(texts("/*! Meow*/"), vec![" Meow"]);
        assert_eq!(texts("/**< Meow*/"), vec![" Meow"]);
        assert_eq!(texts("/**/"), vec![""]);
    }

    #[test]
    fn test_block_comment_continuation_lines() {
        assert_eq!(
            texts("/* \\verbatim\n * Aaa\n *\n * Bbb\n * \\endverbatim*/"),
            vec![" \\verbatim", " Aaa", "", " Bbb", " \\endverbatim"]
        );
    }

    #[test]
    fn test_continuation_without_star_keeps_blanks() {
        assert_eq!(texts("/* Aaa\n   Bbb\n */"), vec![" Aaa", "   Bbb", " "]);
    }

    #[test]
    fn test_star_in_content_is_not_a_terminator() {
        assert_eq!(
            texts("/** \\fn void *foo(const char *zzz);*/"),
            vec![" \\fn void *foo(const char *zzz);"]
        );
    }

    #[test]
    fn test_block_comments_are_separated() {
        assert_eq!(texts("/* Aaa */ /* Bbb */"), vec![" Aaa ", "", " Bbb "]);
    }

    #[test]
    fn test_blank_source_line_separates_line_comments() {
        assert_eq!(texts("// Aaa\n\n// Bbb"), vec![" Aaa", "", " Bbb"]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(texts("/* Aaa\n * Bbb"), vec![" Aaa", " Bbb"]);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(texts("Aaa\n\nBbb"), vec!["Aaa", "", "Bbb"]);
        assert_eq!(texts(""), vec![""]);
        assert_eq!(detect("  Aaa"), Decoration::Plain);
        assert_eq!(detect("  // Aaa"), Decoration::Decorated);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let source = "// Aaa\n//  Bbb";
        for line in split_lines(source) {
            assert_eq!(&source[line.offset..line.offset + line.len()], line.text);
        }
        assert_eq!(split_lines(source)[1].offset, 9);
    }
}
