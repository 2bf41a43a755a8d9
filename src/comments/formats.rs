//! Output format implementations for parsed comments
//!
//! This module contains the serializers for a [FullComment](crate::comments::ast::FullComment):
//! - tag: XML-like tags mirroring the tree
//! - treeviz: one line per node, with tree connectors
//! - json: the serde representation of the tree
//!
//! Formats are reachable by name through the [FormatRegistry].

pub mod json;
pub mod registry;
pub mod tag;
pub mod treeviz;

pub use json::{to_json_string, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{escape_xml, serialize_comment as serialize_ast_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
