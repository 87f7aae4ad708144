/// Slide a `size`-word window over `words`, one token at a time, yielding
/// each window joined by a single space.
///
/// A zero `size`, or one larger than the word list, yields nothing.
pub fn extract_phrases<'a>(words: &'a [&'a str], size: usize) -> impl Iterator<Item = String> + 'a {
    let windows = if size == 0 {
        words[..0].windows(1)
    } else {
        words.windows(size)
    };
    windows.map(|window| window.join(" "))
}

/// Number of windows `extract_phrases` produces for `word_count` words.
pub fn expected_phrase_count(word_count: usize, size: usize) -> usize {
    if size == 0 || size > word_count {
        0
    } else {
        word_count - size + 1
    }
}
