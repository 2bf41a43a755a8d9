//! Element-specific AST node definitions
//!
//! Element Types
//!
//!     There are two levels of elements: blocks and inlines.
//!
//!     Blocks sit directly under the [FullComment](comment::FullComment) root:
//!         - Paragraphs: prose. See [paragraph](paragraph).
//!         - Block and parameter commands: each owns one paragraph. See [command](command).
//!         - Verbatim blocks and verbatim lines: raw text. See [verbatim](verbatim).
//!
//!     Inlines live inside paragraphs:
//!         - Text runs and inline commands. See [inline](inline).
//!         - HTML start and end tags. See [html](html).
//!
//!     The depth of the tree is bounded: FullComment, then a block command, then a paragraph,
//!     then inlines. Block commands never nest.

pub mod block;
pub mod command;
pub mod comment;
pub mod html;
pub mod inline;
pub mod paragraph;
pub mod verbatim;

pub use block::BlockContent;
pub use command::{BlockCommand, ParamCommand, ParamDirection};
pub use comment::FullComment;
pub use html::{HtmlAttribute, HtmlEndTag, HtmlStartTag};
pub use inline::{Argument, InlineCommand, InlineContent, Text};
pub use paragraph::Paragraph;
pub use verbatim::{VerbatimBlock, VerbatimBlockLine, VerbatimLine};
