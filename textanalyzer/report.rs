//! Fixed-width text tables for the command-line output.

use crate::analysis::TextAnalysis;
use crate::ranking::RankedPhrase;

const COUNTS_SEPARATOR: &str = "+----------------------+-------+\n";
const PHRASE_SEPARATOR: &str = "+--------------------------------+-------+\n";

/// Word and sentence counts, one separator after every row.
pub fn format_counts_table(analysis: &TextAnalysis) -> String {
    let mut table = String::new();
    table.push_str(COUNTS_SEPARATOR);
    table.push_str(&format!("| {:<20} | {:>5} |\n", "Type", "Count"));
    table.push_str(COUNTS_SEPARATOR);

    for (label, count) in [
        ("Number of words", analysis.word_count),
        ("Number of sentences", analysis.sentence_count),
    ] {
        table.push_str(&format!("| {:<20} | {:>5} |\n", label, count));
        table.push_str(COUNTS_SEPARATOR);
    }

    table
}

/// Ranked phrases in the order given. Phrases wider than the column are
/// printed whole and push the rest of their row to the right.
pub fn format_phrase_table(phrases: &[RankedPhrase]) -> String {
    let mut table = String::new();
    table.push_str(PHRASE_SEPARATOR);
    table.push_str(&format!("| {:<30} | {:>5} |\n", "Phrase", "Count"));
    table.push_str(PHRASE_SEPARATOR);

    for entry in phrases {
        table.push_str(&format!("| {:<30} | {:>5} |\n", entry.phrase, entry.count));
    }

    table.push_str(PHRASE_SEPARATOR);
    table
}
