//! Command-line interface for doccomment
//! Parses documentation comments and prints their tokens or trees in different formats.
//!
//! Usage:
//!   doccomment parse `<path>` [--format `<format>`] [--commands `<file>`] [--diagnostics]
//!   doccomment tokens `<path>` [--format simple|json]
//!   doccomment list-formats
//!   doccomment list-commands [--commands `<file>`]
//!
//! A path of `-` reads the comment from standard input. Set `RUST_LOG=debug` to trace the
//! parser.

use clap::{Arg, ArgAction, ArgMatches, Command};
use doccomment::comments::commands::{CommandTable, DEFAULT_COMMANDS};
use doccomment::comments::diagnostics::Diagnostic;
use doccomment::comments::formats::FormatRegistry;
use doccomment::comments::processor::{
    available_formats, process_source, process_source_with_sink, read_source, ProcessingError,
    ProcessingSpec,
};
use std::io::Read;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("doccomment")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting documentation comments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a comment and print its tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-tag', 'ast-treeviz', 'ast-json')")
                        .default_value("ast-treeviz"),
                )
                .arg(commands_arg())
                .arg(
                    Arg::new("diagnostics")
                        .long("diagnostics")
                        .short('d')
                        .help("Print parse diagnostics to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a comment")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Token format")
                        .value_parser(["simple", "json"])
                        .default_value("simple"),
                )
                .arg(commands_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .subcommand(
            Command::new("list-commands")
                .about("List the commands of a command table")
                .arg(commands_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(sub),
        Some(("tokens", sub)) => handle_tokens_command(sub),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        Some(("list-commands", sub)) => handle_list_commands_command(sub),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to a file holding one comment, or '-' for stdin")
        .required(true)
        .index(1)
}

fn commands_arg() -> Arg {
    Arg::new("commands")
        .long("commands")
        .short('c')
        .help("YAML or JSON command table to use instead of the default vocabulary")
}

fn load_commands(matches: &ArgMatches) -> Result<CommandTable, ProcessingError> {
    let Some(path) = matches.get_one::<String>("commands") else {
        return Ok(DEFAULT_COMMANDS.clone());
    };
    debug!(path = %path, "loading command table");
    let content = read_source(Path::new(path))?;
    let table = if path.ends_with(".json") {
        CommandTable::from_json(&content)
    } else {
        CommandTable::from_yaml(&content)
    };
    table.map_err(|e| ProcessingError::InvalidFormat(e.to_string()))
}

fn load_source(matches: &ArgMatches) -> Result<String, ProcessingError> {
    match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| ProcessingError::IoError(e.to_string()))?;
            Ok(source)
        }
        Some(path) => read_source(Path::new(path)),
    }
}

fn handle_parse_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("ast-treeviz");
    let spec = ProcessingSpec::from_string(format)?;
    let commands = load_commands(matches)?;
    let source = load_source(matches)?;

    let output = if matches.get_flag("diagnostics") {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let output = process_source_with_sink(&source, &spec, &commands, &mut diagnostics)?;
        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic);
        }
        output
    } else {
        process_source(&source, &spec, &commands)?
    };

    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}

fn handle_tokens_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");
    let spec = ProcessingSpec::from_string(&format!("token-{}", format))?;
    let commands = load_commands(matches)?;
    let source = load_source(matches)?;

    print!("{}", process_source(&source, &spec, &commands)?);
    Ok(())
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in available_formats() {
        println!("  {}", name);
    }
    println!();
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {:<10} {}", name, formatter.description());
        }
    }
}

fn handle_list_commands_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let commands = load_commands(matches)?;
    for (name, info) in commands.entries() {
        match info.kind {
            doccomment::comments::CommandKind::VerbatimBlock => println!(
                "  {:<16} {:<16} ends with {}",
                name,
                info.kind,
                commands.closing_name(name)
            ),
            _ => println!("  {:<16} {:<16} args: {}", name, info.kind, info.args),
        }
    }
    Ok(())
}
