//! Lexkit CLI - tokenize a project's entry file
//!
//! All configuration comes from the project profile (`lexkit.json`)

use std::path::PathBuf;
use std::process;

use clap::Parser;
use lexkit_core::{build_lexer, BasicParser, ConfigError, SyntaxError};
use thiserror::Error;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::{OutputFormat, ProjectProfile};
use crate::platform::{print_error_with_source, render_token, source_lines, tokens_to_json};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{}' not found\n\nhint: create it with at least an 'entry' field", .0.display())]
    MissingProfile(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("the 'entry' field must not be empty")]
    EmptyEntry,

    #[error("unknown log level '{0}'")]
    BadLogLevel(String),

    #[error("unknown log format '{0}'")]
    BadLogFormat(String),

    #[error("unknown phase '{0}' in phase_log_levels")]
    UnknownPhase(String),

    #[error("invalid lexer profile: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Parser)]
#[command(
    name = "lexkit",
    about = "Tokenize a source file as described by a project profile",
    version
)]
struct Cli {
    /// Profile file path
    #[arg(value_name = "PROFILE", default_value = "lexkit.json")]
    profile: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(errors) if errors.is_empty() => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Tokenizes the entry file and prints the listing; returns the lexical
/// errors found
fn run(cli: &Cli) -> Result<Vec<SyntaxError>, CliError> {
    let profile = ProjectProfile::load(&cli.profile)?;
    let output = &profile.output;
    logging::init_with_file(
        &output.log_config()?,
        output.log_format()?,
        output.log_file.as_ref(),
    )
    .map_err(|source| CliError::Io {
        path: output.log_file.clone().unwrap_or_default(),
        source,
    })?;

    let entry_path = profile.entry_path(&cli.profile);
    let source = std::fs::read_to_string(&entry_path).map_err(|source| CliError::Io {
        path: entry_path.clone(),
        source,
    })?;
    info!(target: "lexkit::cli", entry = %entry_path.display(), "Tokenizing entry file");

    if output.show_source {
        println!("[Source]");
        for (i, line) in source_lines(&source).into_iter().enumerate() {
            println!("{:3} | {}", i + 1, line);
        }
        println!("[Tokens]");
    }

    let mut lexer = build_lexer(&profile.lexer)?;
    lexer.assign(&source, &entry_path.display().to_string());
    match output.format {
        OutputFormat::Text => {
            for token in lexer.tokens() {
                println!("{}", render_token(token, output.show_spans));
            }
        }
        OutputFormat::Json => {
            let listing = tokens_to_json(lexer.tokens());
            let text = serde_json::to_string_pretty(&listing).map_err(|source| CliError::Json {
                path: entry_path.clone(),
                source,
            })?;
            println!("{}", text);
        }
    }

    let mut parser = BasicParser::new(lexer);
    let count = parser.collect_lexical_errors();
    debug!(target: "lexkit::cli", errors = count, "Lexical errors");
    let errors = parser.take_errors();
    for error in &errors {
        print_error_with_source(error, &source);
    }
    Ok(errors)
}
