//! Tests for the comment processor API

use doccomment::comments::commands::DEFAULT_COMMANDS;
use doccomment::comments::diagnostics::Diagnostic;
use doccomment::comments::processor::{
    available_formats, format_tokens, process_file, process_source, process_source_with_sink,
    OutputFormat, ProcessingError, ProcessingSpec, ProcessingStage,
};
use doccomment::comments::lexing::tokenize;
use std::fs;

#[test]
fn test_processing_spec_parsing() {
    let spec = ProcessingSpec::from_string("token-json").unwrap();
    assert_eq!(spec.stage, ProcessingStage::Token);
    assert_eq!(spec.format, OutputFormat::Json);

    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    assert_eq!(spec.stage, ProcessingStage::Ast);
    assert_eq!(spec.format, OutputFormat::Tag);

    assert!(ProcessingSpec::from_string("invalid").is_err());
    assert!(ProcessingSpec::from_string("token-invalid").is_err());
    assert!(ProcessingSpec::from_string("invalid-simple").is_err());
    assert!(ProcessingSpec::from_string("token-treeviz").is_err());
}

#[test]
fn test_available_formats() {
    assert_eq!(
        available_formats(),
        vec!["token-simple", "token-json", "ast-tag", "ast-treeviz", "ast-json"]
    );
}

#[test]
fn test_ast_formats_from_source() {
    let source = "/// \\brief Aaa";
    for format in ["ast-tag", "ast-treeviz", "ast-json"] {
        let spec = ProcessingSpec::from_string(format).unwrap();
        let output = process_source(source, &spec, &DEFAULT_COMMANDS).unwrap();
        assert!(output.contains("brief"), "{}: {}", format, output);
    }
}

#[test]
fn test_diagnostics_reach_the_sink() {
    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let output =
        process_source_with_sink("// <a", &spec, &DEFAULT_COMMANDS, &mut diagnostics).unwrap();

    assert!(output.contains("<html-start-tag name=\"a\""));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "warning: HTML start tag is not terminated [unterminated-html-start-tag] at offset 3"
    );
}

#[test]
fn test_token_json() {
    let tokens = tokenize("// \\c x", &DEFAULT_COMMANDS);
    let json = format_tokens(&tokens, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[1]["kind"]["command"]["name"], "c");
    assert_eq!(value[1]["spelling"], "\\c");
    assert_eq!(value[1]["offset"], 3);
    assert_eq!(value[3]["kind"], "eof");
}

#[test]
fn test_format_tokens_rejects_tree_formats() {
    let tokens = tokenize("// x", &DEFAULT_COMMANDS);
    assert!(matches!(
        format_tokens(&tokens, OutputFormat::Treeviz),
        Err(ProcessingError::InvalidFormatType(_))
    ));
}

#[test]
fn test_process_file() {
    let path = std::env::temp_dir().join(format!("doccomment-process-{}.txt", std::process::id()));
    fs::write(&path, "/// \\param [out] x Result").unwrap();

    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    let output = process_file(&path, &spec, &DEFAULT_COMMANDS);
    fs::remove_file(&path).unwrap();

    assert!(output.unwrap().contains("direction=\"out\""));
}

#[test]
fn test_process_missing_file() {
    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    let result = process_file("does/not/exist.txt", &spec, &DEFAULT_COMMANDS);
    assert!(matches!(result, Err(ProcessingError::FileNotFound(_))));
}
