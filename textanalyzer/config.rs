use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::analysis::AnalysisOptions;
use crate::error::ConfigError;
use crate::tokenizer::SentenceMode;

/// Report word, sentence and top phrase counts of a text file
#[derive(Parser, Debug)]
#[command(name = "textanalyzer", about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Text file to analyze
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: PathBuf,

    /// Show top N phrases
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        default_value_t = 10,
        allow_negative_numbers = true
    )]
    top: i64,

    /// Number of words per phrase (at least 2)
    #[arg(
        short = 'p',
        long = "phrase-size",
        alias = "phraseSize",
        value_name = "N",
        default_value_t = 2,
        allow_negative_numbers = true
    )]
    phrase_size: i64,

    /// Count a run of sentence terminals ("?!", "...") as one boundary
    #[arg(long)]
    collapse_delimiters: bool,

    /// Refuse files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_bytes: Option<u64>,
}

/// A fully validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_path: PathBuf,
    pub top: usize,
    pub phrase_size: usize,
    pub sentence_mode: SentenceMode,
    pub max_bytes: Option<u64>,
}

impl Config {
    /// Parse and validate a full argument list (program name first).
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = args
            .into_iter()
            .map(Into::into)
            .enumerate()
            .map(|(i, arg)| if i == 0 { arg } else { normalize_legacy_flag(arg) });

        let args = Args::try_parse_from(args)?;

        if args.top <= 0 {
            return Err(ConfigError::TopNotPositive(args.top));
        }
        if args.phrase_size <= 1 {
            return Err(ConfigError::PhraseSizeTooSmall(args.phrase_size));
        }
        if args.max_bytes == Some(0) {
            return Err(ConfigError::MaxBytesZero);
        }

        Ok(Config {
            file_path: args.file,
            top: usize::try_from(args.top).map_err(|_| ConfigError::TopNotPositive(args.top))?,
            phrase_size: usize::try_from(args.phrase_size)
                .map_err(|_| ConfigError::PhraseSizeTooSmall(args.phrase_size))?,
            sentence_mode: if args.collapse_delimiters {
                SentenceMode::CollapseRuns
            } else {
                SentenceMode::PerDelimiter
            },
            max_bytes: args.max_bytes,
        })
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            phrase_size: self.phrase_size,
            top: self.top,
            sentence_mode: self.sentence_mode,
        }
    }
}

/// Rewrite the single-dash long flags of the older tool (`-file`, `-top`,
/// `-phraseSize`), which clap would otherwise read as bundled short flags.
fn normalize_legacy_flag(arg: OsString) -> OsString {
    match arg.to_str() {
        Some("-file") => OsString::from("--file"),
        Some("-top") => OsString::from("--top"),
        Some("-phraseSize") => OsString::from("--phrase-size"),
        _ => arg,
    }
}
