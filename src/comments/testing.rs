//! Testing utilities for comment parsing
//!
//!     Comment trees are deep, and indexing into them by hand makes tests long and their
//!     failures hard to read. This module offers a fluent assertion API that walks the tree
//!     and reports failures with the path to the offending node, plus a loader for the
//!     canonical sample comments under `samples/`.
//!
//!     ```rust,ignore
//!     use doccomment::comments::parsing::parse_comment;
//!     use doccomment::comments::testing::{assert_comment, CommentSamples};
//!
//!     let source = CommentSamples::get_string("020-brief-and-params.txt")?;
//!     let comment = parse_comment(&source);
//!
//!     assert_comment(&comment).param("src", |p| {
//!         p.direction(ParamDirection::In).paragraph(|para| {
//!             para.text_contains("Source buffer");
//!         });
//!     });
//!     ```

pub mod ast_assertions;
pub mod matchers;
pub mod samples;

pub use ast_assertions::{assert_comment, BlockAssertion, CommentAssertion};
pub use matchers::TextMatch;
pub use samples::{CommentSamples, SampleFormat, SampleInfo, AVAILABLE_SAMPLES};
