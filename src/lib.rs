//! # doccomment
//!
//! A parser for documentation comments in the Doxygen and HeaderDoc dialects.
//!
//! ```rust,ignore
//! use doccomment::parse_comment;
//!
//! let comment = parse_comment("/// \\brief Frobnicates the widget.");
//! assert_eq!(comment.blocks.len(), 2);
//! ```
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions and the sample loader in the
//! [testing module](comments::testing).

pub mod comments;

pub use comments::{
    parse_comment, parse_comment_with, parse_comment_with_diagnostics, CommandTable, FullComment,
};
