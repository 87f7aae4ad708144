use tracing::debug;

use crate::frequency::FrequencyTable;
use crate::phrases::{expected_phrase_count, extract_phrases};
use crate::ranking::{top_k, RankedPhrase};
use crate::tokenizer::{count_sentences, tokenize, SentenceMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Words per phrase.
    pub phrase_size: usize,
    /// How many phrases to keep in the ranking.
    pub top: usize,
    pub sentence_mode: SentenceMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            phrase_size: 2,
            top: 10,
            sentence_mode: SentenceMode::default(),
        }
    }
}

/// Result of one pass over a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub sentence_count: usize,
    pub distinct_phrases: usize,
    pub top_phrases: Vec<RankedPhrase>,
}

/// Run the full pipeline over `content`.
///
/// Never fails: empty content, a zero phrase size or a window wider than the
/// text all produce zero counts and an empty ranking. Callers holding no
/// content at all pass `""`.
pub fn analyze(content: &str, options: &AnalysisOptions) -> TextAnalysis {
    let words = tokenize(content);
    let sentence_count = count_sentences(content, options.sentence_mode);

    let table: FrequencyTable = extract_phrases(&words, options.phrase_size).collect();
    debug_assert_eq!(
        table.total(),
        expected_phrase_count(words.len(), options.phrase_size)
    );
    let top_phrases = top_k(&table, options.top);

    debug!(
        words = words.len(),
        sentences = sentence_count,
        phrases = table.total(),
        distinct = table.len(),
        ranked = top_phrases.len(),
        "analysis complete"
    );

    TextAnalysis {
        word_count: words.len(),
        sentence_count,
        distinct_phrases: table.len(),
        top_phrases,
    }
}
