use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;

/// A phrase and its occurrence count, as listed in the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPhrase {
    pub phrase: String,
    pub count: usize,
}

/// Heap entry ordered so that the worst-ranked candidate is the greatest:
/// lower count first, then lexicographically later phrase.
#[derive(PartialEq, Eq)]
struct Candidate<'a> {
    count: usize,
    phrase: &'a str,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.phrase.cmp(other.phrase))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `n` most frequent phrases, by count descending.
///
/// Phrases with equal counts are ordered lexicographically (byte order), so
/// the result is the same for every run over the same table. Asking for more
/// entries than the table holds returns all of them; `n == 0` returns none.
pub fn top_k(table: &FrequencyTable, n: usize) -> Vec<RankedPhrase> {
    if n == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(n.min(table.len()) + 1);
    for (phrase, count) in table.iter() {
        heap.push(Candidate { count, phrase });
        if heap.len() > n {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|c| RankedPhrase {
            phrase: c.phrase.to_string(),
            count: c.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, usize)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(phrase, count) in entries {
            for _ in 0..count {
                table.record(phrase.to_string());
            }
        }
        table
    }

    fn ranked(phrase: &str, count: usize) -> RankedPhrase {
        RankedPhrase {
            phrase: phrase.to_string(),
            count,
        }
    }

    #[test]
    fn test_descending_with_lexicographic_ties() {
        let table = table(&[
            ("the cat", 2),
            ("cat sat.", 1),
            ("sat. the", 1),
            ("cat ran!", 1),
        ]);
        assert_eq!(
            top_k(&table, 10),
            vec![
                ranked("the cat", 2),
                ranked("cat ran!", 1),
                ranked("cat sat.", 1),
                ranked("sat. the", 1),
            ]
        );
    }

    #[test]
    fn test_truncates_to_n() {
        let table = table(&[("a b", 5), ("b c", 3), ("c d", 4), ("d e", 1)]);
        assert_eq!(top_k(&table, 2), vec![ranked("a b", 5), ranked("c d", 4)]);
    }

    #[test]
    fn test_tie_at_cutoff_keeps_smallest_phrase() {
        let table = table(&[
            ("zebra run", 2),
            ("apple pie", 2),
            ("mango tree", 2),
            ("top one", 3),
        ]);
        assert_eq!(
            top_k(&table, 2),
            vec![ranked("top one", 3), ranked("apple pie", 2)]
        );
    }

    #[test]
    fn test_n_larger_than_table_returns_all() {
        let table = table(&[("x y", 1), ("y z", 1)]);
        assert_eq!(top_k(&table, 50).len(), 2);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(top_k(&FrequencyTable::new(), 5).is_empty());
        assert!(top_k(&table(&[("x y", 1)]), 0).is_empty());
    }

    #[test]
    fn test_ranking_is_stable_across_calls() {
        let table = table(&[
            ("d d", 1),
            ("a a", 1),
            ("c c", 1),
            ("b b", 1),
            ("e e", 2),
        ]);
        let first = top_k(&table, 3);
        for _ in 0..10 {
            assert_eq!(top_k(&table.clone(), 3), first);
        }
        assert_eq!(
            first,
            vec![ranked("e e", 2), ranked("a a", 1), ranked("b b", 1)]
        );
    }
}
