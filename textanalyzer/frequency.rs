use std::collections::HashMap;

/// Occurrence count per distinct phrase. Keys are exact, case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_phrases<I>(phrases: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::new();
        for phrase in phrases {
            table.record(phrase);
        }
        table
    }

    pub fn record(&mut self, phrase: String) {
        *self.counts.entry(phrase).or_insert(0) += 1;
    }

    /// Count for `phrase`, 0 when it never occurred.
    pub fn count(&self, phrase: &str) -> usize {
        self.counts.get(phrase).copied().unwrap_or(0)
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of phrases recorded.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(phrase, &count)| (phrase.as_str(), count))
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_phrases(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_counts_repeated_phrases() {
        let table = FrequencyTable::from_phrases(phrases(&[
            "the cat", "cat sat.", "sat. the", "the cat", "cat ran!",
        ]));

        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 5);
        assert_eq!(table.count("the cat"), 2);
        assert_eq!(table.count("cat ran!"), 1);
        assert_eq!(table.count("dog ran"), 0);
    }

    #[test]
    fn test_case_sensitive_keys() {
        let table: FrequencyTable = phrases(&["The cat", "the cat", "the cat"])
            .into_iter()
            .collect();
        assert_eq!(table.count("The cat"), 1);
        assert_eq!(table.count("the cat"), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_phrases(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
