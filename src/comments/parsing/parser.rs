//! Recursive-descent parser
//!
//!     The parser pulls tokens from the lexer one at a time and keeps a small stack of tokens
//!     that were looked at and put back. Lookahead is only ever needed for two decisions:
//!
//!         - Does a newline end the paragraph? It does when followed by another newline, by
//!           the end of input, or by a blank text token that is itself followed by one of those.
//!         - Does a block command own an empty paragraph? It does when the next token (or the
//!           one after a single newline) is another block command.
//!
//!     Command arguments are carved out of the following text tokens by the
//!     [Retokenizer](super::retokenizer::Retokenizer); whatever it does not use is put back.
//!
//!     The parser never fails. Malformed input still produces a node, and the problem is
//!     reported to the diagnostic sink.

use super::retokenizer::Retokenizer;
use crate::comments::ast::{
    BlockCommand, BlockContent, FullComment, HtmlEndTag, HtmlStartTag, InlineCommand,
    InlineContent, ParamCommand, Paragraph, Text, VerbatimBlock, VerbatimBlockLine, VerbatimLine,
};
use crate::comments::commands::{CommandInfo, CommandKind, CommandTable};
use crate::comments::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::comments::lexing::{Cursor, Lexer, Token, TokenKind};
use crate::comments::resolvers::{resolve_attributes, resolve_direction, DirectionResolution};
use tracing::{debug, trace};

pub struct Parser<'src, 'cmd, 'sink> {
    lexer: Lexer<'src, 'cmd>,
    commands: &'cmd CommandTable,
    cursor: Cursor,
    tok: Token<'src>,
    /// Tokens put back, the next one on top
    pending: Vec<Token<'src>>,
    sink: &'sink mut dyn DiagnosticSink,
}

impl<'src, 'cmd, 'sink> Parser<'src, 'cmd, 'sink> {
    pub fn new(
        source: &'src str,
        commands: &'cmd CommandTable,
        sink: &'sink mut dyn DiagnosticSink,
    ) -> Self {
        let lexer = Lexer::new(source, commands);
        let mut cursor = lexer.start();
        let tok = lexer.lex(&mut cursor);
        Parser {
            lexer,
            commands,
            cursor,
            tok,
            pending: Vec::new(),
            sink,
        }
    }

    /// Parse the whole comment
    pub fn parse_full_comment(mut self) -> FullComment<'src> {
        let mut blocks = Vec::new();

        self.skip_blank_lines();
        while !self.tok.is_eof() {
            blocks.push(self.parse_block_content());
            self.skip_blank_lines();
        }

        debug!(blocks = blocks.len(), "parsed comment");
        FullComment::new(blocks)
    }

    fn consume_token(&mut self) {
        self.tok = match self.pending.pop() {
            Some(token) => token,
            None => self.lexer.lex(&mut self.cursor),
        };
        trace!(token = %self.tok, offset = self.tok.offset, "next token");
    }

    /// Make `token` current again; the current token becomes the next one
    fn put_back(&mut self, token: Token<'src>) {
        let current = std::mem::replace(&mut self.tok, token);
        self.pending.push(current);
    }

    fn report(&mut self, kind: DiagnosticKind, offset: usize) {
        debug!(code = kind.code(), offset, "{}", kind.message());
        self.sink.report(kind, offset);
    }

    /// Newlines and blank-only lines between blocks
    fn skip_blank_lines(&mut self) {
        loop {
            if self.tok.is_newline() {
                self.consume_token();
                continue;
            }
            if self.tok.is_blank_text() {
                let blank = self.tok.clone();
                self.consume_token();
                if self.tok.is_newline() || self.tok.is_eof() {
                    continue;
                }
                self.put_back(blank);
            }
            break;
        }
    }

    fn block_command_ahead(&self) -> Option<(&'src str, &'cmd CommandInfo)> {
        let commands: &'cmd CommandTable = self.commands;
        match self.tok.kind {
            TokenKind::Command { name, .. } => commands
                .get(name)
                .filter(|info| info.kind.is_block_level())
                .map(|info| (name, info)),
            _ => None,
        }
    }

    fn newline_then_block_command(&mut self) -> bool {
        if !self.tok.is_newline() {
            return false;
        }
        let newline = self.tok.clone();
        self.consume_token();
        let ahead = self.block_command_ahead().is_some();
        self.put_back(newline);
        ahead
    }

    fn parse_block_content(&mut self) -> BlockContent<'src> {
        match self.tok.kind {
            TokenKind::VerbatimBlockBegin { name, .. } => self.parse_verbatim_block(name).into(),
            TokenKind::VerbatimLine { name, text } => {
                let line = VerbatimLine::new(name, text).at(self.tok.offset);
                self.consume_token();
                line.into()
            }
            _ => match self.block_command_ahead() {
                Some((name, info)) => self.parse_block_command(name, info),
                None => self.parse_paragraph().into(),
            },
        }
    }

    /// Inline content up to the end of the paragraph. Stops in front of block-level tokens.
    fn parse_paragraph(&mut self) -> Paragraph<'src> {
        let offset = self.tok.offset;
        let commands: &'cmd CommandTable = self.commands;
        let mut content: Vec<InlineContent<'src>> = Vec::new();

        loop {
            match self.tok.kind {
                TokenKind::Eof
                | TokenKind::VerbatimBlockBegin { .. }
                | TokenKind::VerbatimLine { .. } => break,
                TokenKind::Command { name, .. } => match commands.get(name) {
                    Some(info) if info.kind.is_block_level() => break,
                    Some(info) => {
                        let takes_word = info.kind == CommandKind::Inline && info.args > 0;
                        content.push(self.parse_inline_command(name, takes_word).into());
                    }
                    None => {
                        self.report(DiagnosticKind::UnknownCommand, self.tok.offset);
                        content.push(InlineCommand::new(name, None).at(self.tok.offset).into());
                        self.consume_token();
                    }
                },
                TokenKind::Newline => {
                    self.consume_token();
                    if self.tok.is_newline() || self.tok.is_eof() {
                        self.consume_token();
                        break;
                    }
                    if self.tok.is_blank_text() {
                        let blank = self.tok.clone();
                        self.consume_token();
                        if self.tok.is_newline() || self.tok.is_eof() {
                            self.consume_token();
                            break;
                        }
                        self.put_back(blank);
                    }
                    if let Some(last) = content.last_mut() {
                        last.set_trailing_newline();
                    }
                }
                TokenKind::HtmlStartTag(name) => {
                    content.push(self.parse_html_start_tag(name).into());
                }
                TokenKind::HtmlEndTag(name) => {
                    content.push(self.parse_html_end_tag(name).into());
                }
                TokenKind::Text(text) => {
                    content.push(Text::new(text).at(self.tok.text_offset()).into());
                    self.consume_token();
                }
                _ => {
                    debug!(token = %self.tok, offset = self.tok.offset, "stray token kept as text");
                    content.push(Text::new(self.tok.spelling).at(self.tok.offset).into());
                    self.consume_token();
                }
            }
        }

        Paragraph::new(content).at(offset)
    }

    fn parse_inline_command(&mut self, name: &'src str, takes_word: bool) -> InlineCommand<'src> {
        let offset = self.tok.offset;
        self.consume_token();
        if !takes_word {
            return InlineCommand::new(name, None).at(offset);
        }

        let mut retokenizer = self.retokenizer();
        let arg = retokenizer.lex_word();
        self.put_back_leftover(retokenizer);

        if arg.is_none() {
            self.report(DiagnosticKind::MissingArgument, offset);
        }
        InlineCommand::new(name, arg).at(offset)
    }

    fn parse_block_command(&mut self, name: &'src str, info: &CommandInfo) -> BlockContent<'src> {
        let offset = self.tok.offset;
        self.consume_token();

        let is_param = info.kind == CommandKind::Param;
        let mut args = Vec::new();
        let mut direction = DirectionResolution::implicit();
        let mut param_name = None;

        // Block commands don't nest: one right behind gets an empty paragraph
        let paragraph = if self.block_command_ahead().is_some() {
            Paragraph::empty().at(self.tok.offset)
        } else {
            if is_param || info.args > 0 {
                let mut retokenizer = self.retokenizer();
                if is_param {
                    if let Some(annotation) = retokenizer.lex_delimited('[', ']') {
                        direction = resolve_direction(annotation.as_str());
                        if let Some(issue) = direction.issue {
                            self.report(issue, annotation.offset);
                        }
                    }
                    param_name = retokenizer.lex_word();
                } else {
                    for _ in 0..info.args {
                        match retokenizer.lex_word() {
                            Some(arg) => args.push(arg),
                            None => break,
                        }
                    }
                }
                self.put_back_leftover(retokenizer);
            }

            if self.block_command_ahead().is_some() || self.newline_then_block_command() {
                Paragraph::empty().at(self.tok.offset)
            } else {
                self.parse_paragraph()
            }
        };

        if is_param && param_name.is_none() {
            self.report(DiagnosticKind::MissingParamName, offset);
        }
        if !is_param && args.len() < info.args {
            self.report(DiagnosticKind::MissingArgument, offset);
        }
        if paragraph.is_whitespace() {
            self.report(DiagnosticKind::EmptyParagraph, offset);
        }

        if is_param {
            ParamCommand::new(name, param_name, paragraph)
                .with_direction(direction.direction, direction.explicit)
                .at(offset)
                .into()
        } else {
            BlockCommand::new(name, args, paragraph).at(offset).into()
        }
    }

    fn parse_html_start_tag(&mut self, name: &'src str) -> HtmlStartTag<'src> {
        let offset = self.tok.offset;
        self.consume_token();

        let mut body = Vec::new();
        while matches!(
            self.tok.kind,
            TokenKind::HtmlIdent(_) | TokenKind::HtmlEquals | TokenKind::HtmlQuotedString(_)
        ) {
            body.push(self.tok.clone());
            self.consume_token();
        }

        let resolution = resolve_attributes(&body);
        for (kind, at) in resolution.issues {
            self.report(kind, at);
        }

        let self_closing = match self.tok.kind {
            TokenKind::HtmlGreater => {
                self.consume_token();
                false
            }
            TokenKind::HtmlSlashGreater => {
                self.consume_token();
                true
            }
            _ => {
                self.report(DiagnosticKind::UnterminatedHtmlStartTag, offset);
                false
            }
        };

        HtmlStartTag::new(name, resolution.attributes, self_closing).at(offset)
    }

    fn parse_html_end_tag(&mut self, name: &'src str) -> HtmlEndTag<'src> {
        let offset = self.tok.offset;
        self.consume_token();

        if matches!(self.tok.kind, TokenKind::HtmlGreater) {
            self.consume_token();
        } else {
            self.report(DiagnosticKind::UnterminatedHtmlEndTag, offset);
        }
        HtmlEndTag::new(name).at(offset)
    }

    fn parse_verbatim_block(&mut self, name: &'src str) -> VerbatimBlock<'src> {
        let offset = self.tok.offset;
        self.consume_token();

        let mut lines = Vec::new();
        while let TokenKind::VerbatimBlockLine(text) = self.tok.kind {
            lines.push(VerbatimBlockLine::new(text, self.tok.offset));
            self.consume_token();
        }

        let closed = matches!(self.tok.kind, TokenKind::VerbatimBlockEnd { .. });
        if closed {
            self.consume_token();
        } else {
            self.report(DiagnosticKind::UnterminatedVerbatimBlock, offset);
        }
        VerbatimBlock::new(name, lines, closed).at(offset)
    }

    /// Take the run of text tokens starting at the current token
    fn retokenizer(&mut self) -> Retokenizer<'src> {
        let mut tokens = Vec::new();
        while self.tok.is_text() {
            tokens.push(self.tok.clone());
            self.consume_token();
        }
        Retokenizer::new(tokens)
    }

    fn put_back_leftover(&mut self, retokenizer: Retokenizer<'src>) {
        for token in retokenizer.into_leftover().into_iter().rev() {
            self.put_back(token);
        }
    }
}
