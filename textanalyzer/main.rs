use std::process::ExitCode;

use textanalyzer::report::{format_counts_table, format_phrase_table};
use textanalyzer::{analyze, input, Config, ConfigError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) if e.is_help_request() => {
            if let ConfigError::Arguments(help) = e {
                print!("{}", help);
            }
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            println!("Configuration Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let content = match input::read_content(&config.file_path, config.max_bytes) {
        Ok(content) => content,
        Err(e) => {
            error!("{}", e);
            println!("Error: Unable to read the file content.");
            return ExitCode::from(1);
        }
    };

    info!(
        file = %config.file_path.display(),
        top = config.top,
        phrase_size = config.phrase_size,
        "analyzing"
    );
    let analysis = analyze(&content, &config.analysis_options());

    println!("{}", format_counts_table(&analysis));
    println!("Top phrases:");
    println!("{}", format_phrase_table(&analysis.top_phrases));

    ExitCode::SUCCESS
}
