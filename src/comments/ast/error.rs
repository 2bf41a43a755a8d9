//! Error types for AST operations

use std::fmt;

/// Asking a node for a field its kind cannot have
///
/// This is a programming error on the caller's side. Parsing never produces it; only the
/// fallible accessors on [`BlockContent`](super::BlockContent) do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAccessError {
    WrongKind {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for NodeAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeAccessError::WrongKind {
                field,
                expected,
                found,
            } => write!(
                f,
                "Field '{}' is only available on {} nodes, not on {}",
                field, expected, found
            ),
        }
    }
}

impl std::error::Error for NodeAccessError {}
