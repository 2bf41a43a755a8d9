//! Processing API for comment sources
//!
//! Runs a comment through a stage (tokens or AST) and renders the result in one of the
//! output formats. This is what the `doccomment` binary drives.
//!
//! ```rust,ignore
//! use doccomment::comments::processor::{process_source, ProcessingSpec};
//! use doccomment::comments::commands::CommandTable;
//!
//! let spec = ProcessingSpec::from_string("ast-treeviz")?;
//! let output = process_source("/// \\brief Frobnicates", &spec, &CommandTable::default())?;
//! ```

use crate::comments::commands::CommandTable;
use crate::comments::diagnostics::{DiagnosticSink, NullSink};
use crate::comments::formats::FormatRegistry;
use crate::comments::lexing::{tokenize, Token, TokenKind};
use crate::comments::parsing::parse_comment_with;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Tag,
    Treeviz,
}

impl OutputFormat {
    /// Name of the matching formatter in the [FormatRegistry]
    fn registry_name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Tag | OutputFormat::Treeviz) => {
                Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with AST stage",
                    format.registry_name()
                )))
            }
            (ProcessingStage::Ast, OutputFormat::Simple) => Err(ProcessingError::InvalidFormatType(
                "Format 'simple' only works with token stage".to_string(),
            )),
            _ => Ok(ProcessingSpec { stage, format }),
        }
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Tag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
        ]
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        write!(f, "{}-{}", stage, self.format.registry_name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    SerializationError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Process comment source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    commands: &CommandTable,
) -> Result<String, ProcessingError> {
    process_source_with_sink(source, spec, commands, &mut NullSink)
}

/// Like [process_source], reporting parse diagnostics to `sink`
pub fn process_source_with_sink(
    source: &str,
    spec: &ProcessingSpec,
    commands: &CommandTable,
    sink: &mut dyn DiagnosticSink,
) -> Result<String, ProcessingError> {
    debug!(spec = %spec, bytes = source.len(), "processing comment");
    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokenize(source, commands), spec.format),
        ProcessingStage::Ast => {
            let comment = parse_comment_with(source, commands, sink);
            FormatRegistry::with_defaults()
                .serialize(&comment, spec.format.registry_name())
                .map_err(|e| ProcessingError::SerializationError(e.to_string()))
        }
    }
}

/// Process a comment file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    commands: &CommandTable,
) -> Result<String, ProcessingError> {
    let content = read_source(file_path.as_ref())?;
    process_source(&content, spec, commands)
}

pub fn read_source(path: &Path) -> Result<String, ProcessingError> {
    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| ProcessingError::IoError(e.to_string()))
}

/// Format a token stream. Only token formats are handled here.
pub fn format_tokens(tokens: &[Token<'_>], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if matches!(token.kind, TokenKind::Newline | TokenKind::Eof) {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::SerializationError(e.to_string())),
        OutputFormat::Tag | OutputFormat::Treeviz => Err(ProcessingError::InvalidFormatType(
            format!("Format '{}' only works with AST stage", format.registry_name()),
        )),
    }
}

/// Names of every supported format string
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_from_string() {
        assert_eq!(
            ProcessingSpec::from_string("token-simple").unwrap(),
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple
            }
        );
        assert_eq!(
            ProcessingSpec::from_string("ast-treeviz").unwrap().format,
            OutputFormat::Treeviz
        );
    }

    #[test]
    fn test_spec_errors() {
        assert_eq!(
            ProcessingSpec::from_string("tokens"),
            Err(ProcessingError::InvalidFormat("tokens".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("blob-json"),
            Err(ProcessingError::InvalidStage("blob".to_string()))
        );
        assert!(matches!(
            ProcessingSpec::from_string("token-tag"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-simple"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_available_formats_round_trip() {
        for name in available_formats() {
            let spec = ProcessingSpec::from_string(&name).unwrap();
            assert_eq!(spec.to_string(), name);
        }
    }

    #[test]
    fn test_token_simple_output() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process_source("// \\brief Aaa", &spec, &CommandTable::default()).unwrap();
        assert_eq!(output, "<text:\" \"><command:\\brief><text:\" Aaa\"><eof>\n");
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("ast-tag").unwrap();
        let result = process_file("does/not/exist.txt", &spec, &CommandTable::default());
        assert!(matches!(result, Err(ProcessingError::FileNotFound(_))));
    }
}
