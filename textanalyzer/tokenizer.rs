/// How runs of sentence-terminal punctuation are split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceMode {
    /// Every `.`, `!` or `?` is its own split point, so `"Hi!!"` yields
    /// `["Hi", "", ""]`.
    #[default]
    PerDelimiter,
    /// A run of consecutive terminals is a single split point.
    CollapseRuns,
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into word tokens (maximal runs of non-whitespace).
pub fn tokenize(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

/// Split text into sentence fragments. Empty content has no fragments.
pub fn split_sentences(content: &str, mode: SentenceMode) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }

    match mode {
        SentenceMode::PerDelimiter => content.split(is_terminal).collect(),
        SentenceMode::CollapseRuns => {
            let mut fragments = Vec::new();
            let mut start = 0;
            let mut in_run = false;

            for (i, c) in content.char_indices() {
                if is_terminal(c) {
                    if !in_run {
                        fragments.push(&content[start..i]);
                        in_run = true;
                    }
                    start = i + c.len_utf8();
                } else {
                    in_run = false;
                }
            }
            fragments.push(&content[start..]);
            fragments
        }
    }
}

pub fn count_sentences(content: &str, mode: SentenceMode) -> usize {
    split_sentences(content, mode).len()
}
