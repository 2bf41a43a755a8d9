//! Command table
//!
//!     The grammar's vocabulary is data, not code. Every `\name` (or `@name`) the lexer sees is
//!     looked up here to decide how it is tokenized and parsed: as an inline command inside the
//!     paragraph flow, as a block command owning the paragraph that follows, as a parameter
//!     command, or as the opener of a verbatim region.
//!
//!     The default table carries the Doxygen/HeaderDoc vocabulary. Tables can also be loaded
//!     from YAML or JSON, either extending the defaults or replacing them:
//!
//!         inherit_defaults: true
//!         commands:
//!           retval: { kind: param }
//!           code:   { kind: verbatim-block, end: endcode }
//!           tparam: { kind: param }
//!           mark:   { kind: inline, args: 1 }
//!
//!     Names are case-sensitive. Names missing from the table are treated by the parser as
//!     inline commands without arguments.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// The default vocabulary, built once and shared
pub static DEFAULT_COMMANDS: Lazy<CommandTable> = Lazy::new(CommandTable::default);

static COMMAND_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9]*|f[$\[\]{}])$").expect("command name pattern is valid")
});

/// How a command participates in the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    /// Claims the paragraph that follows it (`\brief`, `\returns`)
    Block,
    /// A block command with a direction annotation and a parameter name (`\param`)
    Param,
    /// Lives inside the paragraph flow, optionally taking one word (`\c`, `\b`)
    Inline,
    /// Opens a raw region closed by a matching end command (`\verbatim` ... `\endverbatim`)
    VerbatimBlock,
    /// Takes the rest of its physical line verbatim (`\fn`)
    VerbatimLine,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Block => "block",
            CommandKind::Param => "param",
            CommandKind::Inline => "inline",
            CommandKind::VerbatimBlock => "verbatim-block",
            CommandKind::VerbatimLine => "verbatim-line",
        }
    }

    /// Block and parameter commands both terminate the current paragraph
    pub fn is_block_level(&self) -> bool {
        matches!(self, CommandKind::Block | CommandKind::Param)
    }

    pub fn is_verbatim(&self) -> bool {
        matches!(self, CommandKind::VerbatimBlock | CommandKind::VerbatimLine)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one command name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub kind: CommandKind,
    /// Number of leading word arguments. Inline commands take 0 or 1; block commands may take more.
    #[serde(default)]
    pub args: usize,
    /// Closing command name of a verbatim block. Defaults to `end` + name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl CommandInfo {
    pub fn new(kind: CommandKind) -> Self {
        CommandInfo {
            kind,
            args: 0,
            end: None,
        }
    }

    pub fn with_args(mut self, args: usize) -> Self {
        self.args = args;
        self
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }
}

/// Errors raised while building or loading a command table
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidName(String),
    TooManyInlineArgs { name: String, args: usize },
    UnexpectedEnd { name: String, kind: CommandKind },
    InvalidEnd { name: String, end: String },
    Parse(String),
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidName(name) => write!(f, "Invalid command name: '{}'", name),
            ConfigError::TooManyInlineArgs { name, args } => write!(
                f,
                "Inline command '{}' declares {} arguments (at most 1 is allowed)",
                name, args
            ),
            ConfigError::UnexpectedEnd { name, kind } => write!(
                f,
                "Command '{}' of kind {} cannot declare a closing name",
                name, kind
            ),
            ConfigError::InvalidEnd { name, end } => write!(
                f,
                "Verbatim block '{}' has an invalid closing name: '{}'",
                name, end
            ),
            ConfigError::Parse(msg) => write!(f, "Failed to parse command table: {}", msg),
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// On-disk shape of a command table
#[derive(Debug, Deserialize)]
struct CommandTableConfig {
    #[serde(default = "default_inherit")]
    inherit_defaults: bool,
    #[serde(default)]
    commands: HashMap<String, CommandInfo>,
}

fn default_inherit() -> bool {
    true
}

/// Read-only mapping from command name to [`CommandInfo`]
///
/// A table is built once and then shared by reference between any number of parses,
/// including parses running on different threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandTable {
    commands: HashMap<String, CommandInfo>,
}

impl CommandTable {
    /// A table with no commands at all; every command parses as an unknown inline command
    pub fn empty() -> Self {
        CommandTable {
            commands: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandInfo> {
        self.commands.get(name)
    }

    pub fn kind(&self, name: &str) -> Option<CommandKind> {
        self.get(name).map(|info| info.kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// The command name that closes the verbatim block opened by `name`
    pub fn closing_name(&self, name: &str) -> String {
        match self.get(name).and_then(|info| info.end.as_deref()) {
            Some(end) => end.to_string(),
            None => format!("end{}", name),
        }
    }

    /// Register (or replace) a command after validating its metadata
    pub fn insert(&mut self, name: impl Into<String>, info: CommandInfo) -> Result<(), ConfigError> {
        let name = name.into();
        validate(&name, &info)?;
        self.commands.insert(name, info);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<CommandInfo> {
        self.commands.remove(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All entries sorted by name
    pub fn entries(&self) -> Vec<(&str, &CommandInfo)> {
        let mut entries: Vec<(&str, &CommandInfo)> = self
            .commands
            .iter()
            .map(|(name, info)| (name.as_str(), info))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Load a table from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: CommandTableConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_config(config)
    }

    /// Load a table from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CommandTableConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_config(config)
    }

    /// Load a table from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    fn from_config(config: CommandTableConfig) -> Result<Self, ConfigError> {
        let mut table = if config.inherit_defaults {
            CommandTable::default()
        } else {
            CommandTable::empty()
        };
        for (name, info) in config.commands {
            table.insert(name, info)?;
        }
        Ok(table)
    }
}

fn validate(name: &str, info: &CommandInfo) -> Result<(), ConfigError> {
    if !COMMAND_NAME.is_match(name) {
        return Err(ConfigError::InvalidName(name.to_string()));
    }
    if info.kind == CommandKind::Inline && info.args > 1 {
        return Err(ConfigError::TooManyInlineArgs {
            name: name.to_string(),
            args: info.args,
        });
    }
    if let Some(end) = &info.end {
        if info.kind != CommandKind::VerbatimBlock {
            return Err(ConfigError::UnexpectedEnd {
                name: name.to_string(),
                kind: info.kind,
            });
        }
        if !COMMAND_NAME.is_match(end) {
            return Err(ConfigError::InvalidEnd {
                name: name.to_string(),
                end: end.clone(),
            });
        }
    }
    Ok(())
}

const INLINE_WITH_WORD: &[&str] = &["b", "c", "p", "a", "e", "em"];

const BLOCK: &[&str] = &[
    "brief",
    "short",
    "details",
    "result",
    "return",
    "returns",
    "author",
    "authors",
    "pre",
    "post",
    "note",
    "warning",
    "see",
    "sa",
    "since",
    "deprecated",
    "todo",
    "remarks",
    "remark",
    "attention",
    "bug",
    "version",
    "date",
    "invariant",
    "copyright",
    "par",
];

const BLOCK_WITH_WORD: &[&str] = &["throws", "throw", "exception"];

const VERBATIM_BLOCK: &[&str] = &[
    "code",
    "verbatim",
    "htmlonly",
    "latexonly",
    "xmlonly",
    "manonly",
    "rtfonly",
    "dot",
    "msc",
];

const VERBATIM_LINE: &[&str] = &[
    "fn",
    "var",
    "property",
    "typedef",
    "overload",
    "defgroup",
    "ingroup",
    "addtogroup",
    "weakgroup",
    "name",
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
    "mainpage",
    "subpage",
    "ref",
    "class",
    "struct",
    "union",
    "namespace",
    "def",
];

impl Default for CommandTable {
    fn default() -> Self {
        let mut commands = HashMap::new();
        for name in INLINE_WITH_WORD {
            commands.insert(
                name.to_string(),
                CommandInfo::new(CommandKind::Inline).with_args(1),
            );
        }
        for name in BLOCK {
            commands.insert(name.to_string(), CommandInfo::new(CommandKind::Block));
        }
        for name in BLOCK_WITH_WORD {
            commands.insert(
                name.to_string(),
                CommandInfo::new(CommandKind::Block).with_args(1),
            );
        }
        commands.insert("param".to_string(), CommandInfo::new(CommandKind::Param));
        for name in VERBATIM_BLOCK {
            commands.insert(
                name.to_string(),
                CommandInfo::new(CommandKind::VerbatimBlock),
            );
        }
        // Formula delimiters close with their mirrored bracket
        for (open, close) in [("f$", "f$"), ("f[", "f]"), ("f{", "f}")] {
            commands.insert(
                open.to_string(),
                CommandInfo::new(CommandKind::VerbatimBlock).with_end(close),
            );
        }
        for name in VERBATIM_LINE {
            commands.insert(name.to_string(), CommandInfo::new(CommandKind::VerbatimLine));
        }
        CommandTable { commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let table = CommandTable::default();
        assert_eq!(table.kind("brief"), Some(CommandKind::Block));
        assert_eq!(table.kind("param"), Some(CommandKind::Param));
        assert_eq!(table.kind("verbatim"), Some(CommandKind::VerbatimBlock));
        assert_eq!(table.kind("fn"), Some(CommandKind::VerbatimLine));
        assert_eq!(table.get("c").map(|info| info.args), Some(1));
        assert_eq!(table.get("throws").map(|info| info.args), Some(1));
        assert_eq!(table.kind("unknown"), None);
    }

    #[test]
    fn test_closing_names() {
        let table = CommandTable::default();
        assert_eq!(table.closing_name("verbatim"), "endverbatim");
        assert_eq!(table.closing_name("code"), "endcode");
        assert_eq!(table.closing_name("f["), "f]");
        assert_eq!(table.closing_name("f$"), "f$");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let table = CommandTable::default();
        assert!(table.contains("brief"));
        assert!(!table.contains("Brief"));
    }

    #[test]
    fn test_insert_rejects_bad_names() {
        let mut table = CommandTable::empty();
        let result = table.insert("bad name", CommandInfo::new(CommandKind::Block));
        assert_eq!(result, Err(ConfigError::InvalidName("bad name".to_string())));
        let result = table.insert("1st", CommandInfo::new(CommandKind::Block));
        assert!(result.is_err());
    }

    #[test]
    fn test_insert_rejects_inline_with_two_args() {
        let mut table = CommandTable::empty();
        let result = table.insert("x", CommandInfo::new(CommandKind::Inline).with_args(2));
        assert!(matches!(
            result,
            Err(ConfigError::TooManyInlineArgs { args: 2, .. })
        ));
    }

    #[test]
    fn test_end_only_for_verbatim_blocks() {
        let mut table = CommandTable::empty();
        let result = table.insert("x", CommandInfo::new(CommandKind::Block).with_end("endx"));
        assert!(matches!(result, Err(ConfigError::UnexpectedEnd { .. })));
        assert!(table
            .insert(
                "x",
                CommandInfo::new(CommandKind::VerbatimBlock).with_end("stopx")
            )
            .is_ok());
        assert_eq!(table.closing_name("x"), "stopx");
    }

    #[test]
    fn test_from_yaml_extends_defaults() {
        let yaml = "commands:\n  retval:\n    kind: param\n  mark:\n    kind: inline\n    args: 1\n";
        let table = CommandTable::from_yaml(yaml).unwrap();
        assert_eq!(table.kind("retval"), Some(CommandKind::Param));
        assert_eq!(table.get("mark").map(|info| info.args), Some(1));
        assert_eq!(table.kind("brief"), Some(CommandKind::Block));
    }

    #[test]
    fn test_from_yaml_without_defaults() {
        let yaml = "inherit_defaults: false\ncommands:\n  summary:\n    kind: block\n";
        let table = CommandTable::from_yaml(yaml).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.kind("brief"), None);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"commands": {"code": {"kind": "verbatim-block", "end": "endcode"}}}"#;
        let table = CommandTable::from_json(json).unwrap();
        assert_eq!(table.closing_name("code"), "endcode");
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let yaml = "commands:\n  x:\n    kind: sideways\n";
        assert!(matches!(
            CommandTable::from_yaml(yaml),
            Err(ConfigError::Parse(_))
        ));
    }
}
