//! AST definitions for documentation comments
//!
//!     The tree produced by a parse. Every node is a closed tagged variant, so consumers match
//!     on the kind of node instead of testing types at runtime, and the compiler checks that
//!     every kind is handled.
//!
//! Ownership
//!
//!     Each node is owned by exactly one parent and the whole tree is built in one parse call.
//!     Nothing points back up the tree; nodes only record the byte offset where they start.
//!     Text is borrowed from the comment source, which therefore acts as the tree's arena.
//!
//! Traversal
//!
//!     Nodes implement [AstNode](traits::AstNode) and accept a [Visitor](traits::Visitor).
//!     See [elements](elements) for the node kinds.

pub mod elements;
pub mod error;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Argument, BlockCommand, BlockContent, FullComment, HtmlAttribute, HtmlEndTag, HtmlStartTag,
    InlineCommand, InlineContent, Paragraph, ParamCommand, ParamDirection, Text, VerbatimBlock,
    VerbatimBlockLine, VerbatimLine,
};
pub use error::NodeAccessError;
pub use snapshot::{snapshot_from_comment, AstSnapshot};
pub use traits::{AstNode, Visitor};
