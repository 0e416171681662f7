//! Pair counting for merge learning.
//!
//! Counts adjacent token pairs in a tokenized stream, keyed by the
//! concatenation of the two tokens. Only pairs where both tokens are made
//! purely of letters are counted, so a learned token can never absorb a
//! space or a symbol.

use ahash::AHashMap;
use compact_str::CompactString;
use purse_core::is_letter_token;
use rayon::prelude::*;

/// Statistics for one pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStat {
    /// Number of occurrences
    pub count: u64,
    /// Index of the left token of the first occurrence
    pub first_seen: usize,
}

/// Pair-count table built from a single tokenization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCounts {
    pairs: AHashMap<CompactString, PairStat>,
}

impl PairCounts {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of the pair `(left, right)` at token index `idx`.
    pub fn record(&mut self, left: &str, right: &str, idx: usize) {
        let mut key = CompactString::with_capacity(left.len() + right.len());
        key.push_str(left);
        key.push_str(right);

        self.pairs
            .entry(key)
            .and_modify(|stat| {
                stat.count += 1;
                stat.first_seen = stat.first_seen.min(idx);
            })
            .or_insert(PairStat {
                count: 1,
                first_seen: idx,
            });
    }

    /// Fold another table into this one.
    pub fn merge(&mut self, other: PairCounts) {
        for (key, theirs) in other.pairs {
            self.pairs
                .entry(key)
                .and_modify(|ours| {
                    ours.count += theirs.count;
                    ours.first_seen = ours.first_seen.min(theirs.first_seen);
                })
                .or_insert(theirs);
        }
    }

    /// Count for a pairing, by its concatenated form.
    #[inline]
    pub fn get(&self, pairing: &str) -> Option<u64> {
        self.pairs.get(pairing).map(|stat| stat.count)
    }

    #[inline]
    pub fn contains(&self, pairing: &str) -> bool {
        self.pairs.contains_key(pairing)
    }

    /// Number of distinct pairings.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(pairing, count)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.pairs.iter().map(|(k, stat)| (k.as_str(), stat.count))
    }

    /// The pairing to merge next.
    ///
    /// Highest count wins. Among equal counts the pairing seen earliest in
    /// the token stream wins, so the choice never depends on hash order.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.pairs
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_seen.cmp(&a.first_seen))
            })
            .map(|(k, stat)| (k.as_str(), stat.count))
    }

    /// Pairings sorted by descending count, earliest first on ties.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.pairs.iter().collect();
        entries.sort_unstable_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        entries
            .into_iter()
            .map(|(k, stat)| (k.as_str(), stat.count))
            .collect()
    }
}

/// Count adjacent letter-only pairings in a token stream.
pub fn count_letter_pairings<S: AsRef<str>>(tokens: &[S]) -> PairCounts {
    let mut counts = PairCounts::new();

    for (idx, window) in tokens.windows(2).enumerate() {
        let (left, right) = (window[0].as_ref(), window[1].as_ref());
        if is_letter_token(left) && is_letter_token(right) {
            counts.record(left, right, idx);
        }
    }

    counts
}

/// Parallel version of [`count_letter_pairings`].
///
/// Produces exactly the same table, including first-seen positions.
pub fn count_letter_pairings_parallel<S>(tokens: &[S]) -> PairCounts
where
    S: AsRef<str> + Sync,
{
    tokens
        .par_windows(2)
        .enumerate()
        .fold(PairCounts::new, |mut counts, (idx, window)| {
            let (left, right) = (window[0].as_ref(), window[1].as_ref());
            if is_letter_token(left) && is_letter_token(right) {
                counts.record(left, right, idx);
            }
            counts
        })
        .reduce(PairCounts::new, |mut acc, counts| {
            acc.merge(counts);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_basic_pairing() {
        let counts = count_letter_pairings(&["h", "e", "l", "l", "o"]);
        assert_eq!(counts.len(), 4);
        for pair in ["he", "el", "ll", "lo"] {
            assert_eq!(counts.get(pair), Some(1), "{pair}");
        }
    }

    #[test]
    fn test_count_repeated_pairing() {
        let counts = count_letter_pairings(&["p", "e", "p", "p", "e", "r"]);
        assert_eq!(counts.get("pe"), Some(2));
        assert_eq!(counts.get("pp"), Some(1));
        assert_eq!(counts.get("er"), Some(1));
        assert_eq!(counts.get("ep"), Some(1));
    }

    #[test]
    fn test_count_ignores_non_letter_pairings() {
        let counts = count_letter_pairings(&["h", "i", " ", "t", "h", "e", "r", "e"]);
        let mut pairs: Vec<_> = counts.iter().collect();
        pairs.sort_unstable();
        assert_eq!(
            pairs,
            vec![("er", 1), ("he", 1), ("hi", 1), ("re", 1), ("th", 1)]
        );
        assert!(!counts.contains(" t"));
        assert!(!counts.contains("i "));
    }

    #[test]
    fn test_count_no_pairings() {
        assert!(count_letter_pairings(&["!", "@", " "]).is_empty());
        assert!(count_letter_pairings::<&str>(&[]).is_empty());
        assert!(count_letter_pairings(&["a"]).is_empty());
    }

    #[test]
    fn test_count_mixed_content() {
        let counts = count_letter_pairings(&["t", "h", ":", " ", "o", "k", "!"]);
        assert!(counts.contains("th"));
        assert!(counts.contains("ok"));
        assert!(!counts.contains("h:"));
        assert!(!counts.contains(": "));
        assert!(!counts.contains("k!"));
    }

    #[test]
    fn test_multi_char_tokens_are_concatenated() {
        let counts = count_letter_pairings(&["pe", "p", "per", "s"]);
        assert_eq!(counts.get("pep"), Some(1));
        assert_eq!(counts.get("pper"), Some(1));
        assert_eq!(counts.get("pers"), Some(1));
    }

    #[test]
    fn test_mixed_class_token_is_excluded() {
        let counts = count_letter_pairings(&["a", "o ", "b"]);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_most_frequent_prefers_count() {
        let counts = count_letter_pairings(&["a", "b", " ", "c", "d", " ", "c", "d"]);
        assert_eq!(counts.most_frequent(), Some(("cd", 2)));
    }

    #[test]
    fn test_most_frequent_tie_goes_to_first_seen() {
        let counts = count_letter_pairings(&["h", "e", "l", "l", "o"]);
        assert_eq!(counts.most_frequent(), Some(("he", 1)));

        let counts = count_letter_pairings(&["x", "y", " ", "a", "b", " ", "a", "b", " ", "x", "y"]);
        assert_eq!(counts.most_frequent(), Some(("xy", 2)));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(PairCounts::new().most_frequent(), None);
    }

    #[test]
    fn test_ranked() {
        let counts = count_letter_pairings(&["p", "e", "p", "p", "e", "r"]);
        let ranked = counts.ranked();
        assert_eq!(ranked[0], ("pe", 2));
        assert_eq!(ranked[1], ("ep", 1));
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "Peter Piper picked a peck of pickled peppers ".repeat(50);
        let tokens: Vec<String> = text.chars().map(|c| c.to_string()).collect();

        let sequential = count_letter_pairings(&tokens);
        let parallel = count_letter_pairings_parallel(&tokens);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.most_frequent(), parallel.most_frequent());
        assert_eq!(sequential.get("pe"), Some(200));
    }
}
