//! AST snapshots
//!
//! A format-agnostic copy of the tree: node type, label, attributes and children. Text-based
//! serializers (treeviz, tests) walk a snapshot instead of re-implementing the traversal of
//! every node kind.

use super::elements::{BlockContent, FullComment, InlineContent, Paragraph};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g. "Paragraph", "ParamCommand")
    pub node_type: String,

    pub label: String,

    /// Byte offset of the node in the comment source
    pub offset: usize,

    /// Node-specific extras, such as a param's direction
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        AstSnapshot {
            node_type: node_type.into(),
            label: label.into(),
            offset: 0,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstSnapshot::node_count).sum::<usize>()
    }
}

/// Snapshot of a whole comment
pub fn snapshot_from_comment(comment: &FullComment<'_>) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(comment.node_type(), comment.display_label());
    for block in &comment.blocks {
        snapshot.children.push(snapshot_from_block(block));
    }
    snapshot
}

pub fn snapshot_from_block(block: &BlockContent<'_>) -> AstSnapshot {
    match block {
        BlockContent::Paragraph(paragraph) => snapshot_from_paragraph(paragraph),
        BlockContent::BlockCommand(command) => {
            AstSnapshot::new(command.node_type(), command.display_label())
                .at(command.offset)
                .with_child(snapshot_from_paragraph(&command.paragraph))
        }
        BlockContent::ParamCommand(command) => {
            AstSnapshot::new(command.node_type(), command.display_label())
                .at(command.offset)
                .with_attribute("direction", command.direction.as_str())
                .with_attribute("explicit", command.direction_explicit.to_string())
                .with_child(snapshot_from_paragraph(&command.paragraph))
        }
        BlockContent::VerbatimBlock(block) => {
            let mut snapshot = AstSnapshot::new(block.node_type(), block.display_label())
                .at(block.offset)
                .with_attribute("closed", block.closed.to_string());
            for line in &block.lines {
                snapshot
                    .children
                    .push(AstSnapshot::new(line.node_type(), line.display_label()).at(line.offset));
            }
            snapshot
        }
        BlockContent::VerbatimLine(line) => {
            AstSnapshot::new(line.node_type(), line.display_label()).at(line.offset)
        }
    }
}

fn snapshot_from_paragraph(paragraph: &Paragraph<'_>) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(paragraph.node_type(), paragraph.display_label())
        .at(paragraph.offset);
    for inline in &paragraph.content {
        snapshot.children.push(snapshot_from_inline(inline));
    }
    snapshot
}

pub fn snapshot_from_inline(inline: &InlineContent<'_>) -> AstSnapshot {
    let snapshot = AstSnapshot::new(inline.node_type(), inline.display_label()).at(inline.offset());
    if inline.has_trailing_newline() {
        snapshot.with_attribute("newline", "true")
    } else {
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::parsing::parse_comment;

    #[test]
    fn test_snapshot_mirrors_tree() {
        let comment = parse_comment("/// \\param [out] x Result\n/// \\code\n/// y\n/// \\endcode");
        let snapshot = snapshot_from_comment(&comment);
        assert_eq!(snapshot.node_type, "FullComment");
        assert_eq!(snapshot.children.len(), 3);

        let param = &snapshot.children[1];
        assert_eq!(param.node_type, "ParamCommand");
        assert_eq!(param.attributes["direction"], "out");
        assert_eq!(param.attributes["explicit"], "true");
        assert_eq!(param.children[0].node_type, "Paragraph");

        let code = &snapshot.children[2];
        assert_eq!(code.node_type, "VerbatimBlock");
        assert_eq!(code.children.len(), 2);
        assert_eq!(code.children[0].label, "\" y\"");
    }

    #[test]
    fn test_empty_comment_snapshot() {
        let comment = parse_comment("//");
        let snapshot = snapshot_from_comment(&comment);
        assert_eq!(snapshot.node_count(), 1);
    }
}
