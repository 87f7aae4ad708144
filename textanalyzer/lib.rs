//! Word, sentence and phrase-frequency analysis of plain text.
//!
//! The pipeline is `tokenizer` -> `phrases` -> `frequency` -> `ranking`,
//! wired together by [`analysis::analyze`]. The remaining modules are the
//! command-line glue around it.

pub mod analysis;
pub mod config;
pub mod error;
pub mod frequency;
pub mod input;
pub mod phrases;
pub mod ranking;
pub mod report;
pub mod tokenizer;

pub use analysis::{analyze, AnalysisOptions, TextAnalysis};
pub use config::Config;
pub use error::{ConfigError, FileReadError};
pub use frequency::FrequencyTable;
pub use ranking::{top_k, RankedPhrase};
pub use tokenizer::SentenceMode;
