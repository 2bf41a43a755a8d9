//! Sample comment loader
//!
//!     The `samples/` directory holds canonical comment sources, one comment per file. Tests
//!     load them by name through [CommentSamples] instead of hard-coding paths, so a missing
//!     or misspelled sample fails with the list of what is available.

use crate::comments::commands::DEFAULT_COMMANDS;
use crate::comments::lexing::tokenize;
use crate::comments::processor::{process_file, ProcessingError, ProcessingSpec};
use std::fs;
use std::path::PathBuf;

/// Available sample files
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "010-plain-paragraphs.txt",
    "020-brief-and-params.txt",
    "030-verbatim-blocks.txt",
    "040-html-tags.txt",
    "050-headerdoc-block.txt",
    "060-malformed.txt",
];

/// Format options for sample content
#[derive(Debug, Clone, PartialEq)]
pub enum SampleFormat {
    /// Raw string content
    String,
    /// Token stream as JSON
    Tokens,
    /// Processed content using the given format string, e.g. "ast-tag"
    Processed(String),
}

/// Information about a sample file
#[derive(Debug, Clone, PartialEq)]
pub struct SampleInfo {
    pub filename: String,
    pub line_count: usize,
    pub byte_count: usize,
    pub description: Option<String>,
}

pub struct CommentSamples;

impl CommentSamples {
    fn samples_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    fn sample_path(filename: &str) -> PathBuf {
        Self::samples_dir().join(filename)
    }

    fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
        if !AVAILABLE_SAMPLES.contains(&filename) {
            return Err(ProcessingError::FileNotFound(format!(
                "Sample '{}' is not available. Available samples: {:?}",
                filename, AVAILABLE_SAMPLES
            )));
        }
        Ok(())
    }

    fn read(filename: &str) -> Result<String, ProcessingError> {
        let path = Self::sample_path(filename);
        fs::read_to_string(&path).map_err(|e| {
            ProcessingError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
        Self::validate_sample(filename)?;

        match format {
            SampleFormat::String => Self::read(filename),
            SampleFormat::Tokens => {
                let content = Self::read(filename)?;
                let tokens = tokenize(&content, &DEFAULT_COMMANDS);
                serde_json::to_string_pretty(&tokens).map_err(|e| {
                    ProcessingError::SerializationError(format!("Failed to serialize tokens: {}", e))
                })
            }
            SampleFormat::Processed(format_str) => {
                let spec = ProcessingSpec::from_string(&format_str)?;
                process_file(Self::sample_path(filename), &spec, &DEFAULT_COMMANDS)
            }
        }
    }

    pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::String)
    }

    pub fn get_tokens(filename: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::Tokens)
    }

    /// Sample content processed with a format string such as "ast-treeviz"
    pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
        Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
    }

    pub fn list_samples() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }

    pub fn get_sample_info(filename: &str) -> Result<SampleInfo, ProcessingError> {
        Self::validate_sample(filename)?;
        let content = Self::read(filename)?;

        Ok(SampleInfo {
            filename: filename.to_string(),
            line_count: content.lines().count(),
            byte_count: content.len(),
            description: Self::extract_description(&content),
        })
    }

    /// First line with its comment decoration stripped
    fn extract_description(content: &str) -> Option<String> {
        let first_line = content.lines().next()?;
        let description = first_line
            .trim_start()
            .trim_start_matches(['/', '*', '!'])
            .trim();
        if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        }
    }
}
