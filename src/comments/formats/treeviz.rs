//! Treeviz formatter for comment trees
//!
//! Treeviz prints one line per node, which makes the shape of a parse easy to scan:
//!
//!     <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//!     ⧉ FullComment (2 blocks)
//!     ├─ ¶  
//!     │ └─ ◦ " "
//!     └─ ≔ \param [in] aaa
//!       └─ ¶  Input value
//!         └─ ◦ " Input value"
//!
//! Icons
//!     Blocks:
//!         FullComment: ⧉
//!         Paragraph: ¶
//!         BlockCommand: §
//!         ParamCommand: ≔
//!         VerbatimBlock: 𝒱
//!         VerbatimBlockLine: ↵
//!         VerbatimLine: ℣
//!     Inlines:
//!         Text: ◦
//!         InlineCommand: ƒ
//!         HtmlStartTag: ‹
//!         HtmlEndTag: ›
//!
//! With the `show-offset` parameter each line starts with the node's byte offset.

use super::registry::{FormatError, Formatter};
use crate::comments::ast::{snapshot_from_comment, AstSnapshot, FullComment};
use std::collections::HashMap;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "FullComment" => "⧉",
        "Paragraph" => "¶",
        "BlockCommand" => "§",
        "ParamCommand" => "≔",
        "VerbatimBlock" => "𝒱",
        "VerbatimBlockLine" => "↵",
        "VerbatimLine" => "℣",
        "Text" => "◦",
        "InlineCommand" => "ƒ",
        "HtmlStartTag" => "‹",
        "HtmlEndTag" => "›",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_offset: bool,
) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let offset_prefix = if show_offset {
        format!("{:04} ", snapshot.offset)
    } else {
        String::new()
    };

    let mut output = format!(
        "{}{}{} {} {}\n",
        offset_prefix,
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(
            child,
            &child_prefix,
            i + 1 == child_count,
            show_offset,
        ));
    }

    output
}

fn format_comment_snapshot(snapshot: &AstSnapshot, show_offset: bool) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    );

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, "", i + 1 == child_count, show_offset));
    }

    output
}

pub fn to_treeviz_str(comment: &FullComment<'_>) -> String {
    to_treeviz_str_with_params(comment, &HashMap::new())
}

pub fn to_treeviz_str_with_params(
    comment: &FullComment<'_>,
    params: &HashMap<String, String>,
) -> String {
    let show_offset = params
        .get("show-offset")
        .map(|v| v != "false")
        .unwrap_or(false);

    let snapshot = snapshot_from_comment(comment);
    format_comment_snapshot(&snapshot, show_offset)
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, comment: &FullComment<'_>) -> Result<String, FormatError> {
        Ok(to_treeviz_str(comment))
    }

    fn description(&self) -> &str {
        "Visual tree representation with connectors and Unicode icons"
    }
}
