//! Error types for the command-line boundary. The analysis pipeline itself
//! has no error paths.

use std::io;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

/// Invalid or missing command-line arguments. Analysis is never attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown flag, missing value, non-numeric value and the like.
    #[error("{}", summarize(.0))]
    Arguments(#[from] clap::Error),

    #[error("Top must be a positive integer.")]
    TopNotPositive(i64),

    #[error("Phrase size must be greater than 1.")]
    PhraseSizeTooSmall(i64),

    #[error("Maximum input size must be a positive number of bytes.")]
    MaxBytesZero,
}

impl ConfigError {
    /// True when clap asked to print help rather than reporting a mistake.
    pub fn is_help_request(&self) -> bool {
        matches!(
            self,
            ConfigError::Arguments(e) if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            )
        )
    }
}

fn context_string(e: &clap::Error, kind: ContextKind) -> String {
    match e.get(kind) {
        Some(ContextValue::String(s)) => s.clone(),
        Some(ContextValue::Strings(list)) => list.join(", "),
        _ => String::new(),
    }
}

/// One-line description of a clap error, without usage or help hints.
fn summarize(e: &clap::Error) -> String {
    let arg = context_string(e, ContextKind::InvalidArg);
    let flag = arg.split_whitespace().next().unwrap_or_default();

    match e.kind() {
        ErrorKind::UnknownArgument => format!("Unknown argument: {}", arg),
        ErrorKind::MissingRequiredArgument if flag == "--file" => {
            "File path not specified.".to_string()
        }
        ErrorKind::MissingRequiredArgument => format!("Missing required argument: {}", arg),
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            let value = context_string(e, ContextKind::InvalidValue);
            match (flag, value.is_empty()) {
                ("--file", true) => "File path not specified.".to_string(),
                ("--top", true) => "Top count not specified.".to_string(),
                ("--top", false) => "Top must be a positive integer.".to_string(),
                ("--phrase-size", true) => "Phrase size not specified.".to_string(),
                ("--phrase-size", false) => {
                    "Phrase size must be a number greater than 1.".to_string()
                }
                (_, true) => format!("Value for {} not specified.", flag),
                (_, false) => format!("Invalid value '{}' for {}.", value, flag),
            }
        }
        _ => e
            .to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string(),
    }
}

/// The input file could not be turned into text.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `size` is the on-disk length, or the bytes read before the cap hit.
    #[error("File {} is at least {size} bytes, above the {limit} byte limit", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}
