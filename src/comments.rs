//! Documentation comment parsing
//!
//!     Source text flows through three stages:
//!
//!         raw comment -> logical lines -> tokens -> tree
//!
//!     [lexing] strips the comment decoration and produces tokens, [parsing] builds the
//!     [ast], and [formats] renders trees for humans and tools. What counts as a command is
//!     decided by the [commands] table, and degraded input is reported through [diagnostics].

pub mod ast;
pub mod commands;
pub mod diagnostics;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod resolvers;
pub mod testing;

pub use ast::{BlockContent, FullComment, InlineContent, ParamDirection};
pub use commands::{CommandInfo, CommandKind, CommandTable, ConfigError, DEFAULT_COMMANDS};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use lexing::tokenize;
pub use parsing::{parse_comment, parse_comment_with, parse_comment_with_diagnostics};
