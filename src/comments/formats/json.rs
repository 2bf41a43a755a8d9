//! JSON serialization
//!
//! The tree's serde representation: blocks and inlines are tagged with a kebab-case `type`.

use super::registry::{FormatError, Formatter};
use crate::comments::ast::FullComment;

pub fn to_json_string(comment: &FullComment<'_>) -> Result<String, FormatError> {
    serde_json::to_string_pretty(comment).map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, comment: &FullComment<'_>) -> Result<String, FormatError> {
        to_json_string(comment)
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON of the tree"
    }
}
