//! Merge learning.
//!
//! Each step tokenizes the training text with the current vocabulary,
//! counts adjacent letter-only pairings, and adds the most frequent one to
//! the vocabulary. Learning stops early the first time a text has no
//! eligible pairing left.

use super::counter::{count_letter_pairings, count_letter_pairings_parallel, PairCounts};
use compact_str::CompactString;
use purse_core::{GreedyEncoder, Vocabulary};
use serde::Serialize;

/// Configuration for merge learning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Number of merge steps [`MergeTrainer::train`] attempts
    pub iterations: usize,
    /// Count pairings with rayon
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            parallel: false,
        }
    }
}

/// A merge chosen by one learning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnedMerge {
    /// The concatenated pairing that was added to the vocabulary
    pub token: CompactString,
    /// How often the pairing occurred when it was chosen
    pub count: u64,
    /// Zero-based position in the learning history
    pub rank: usize,
}

/// Learns merges into a caller-owned [`Vocabulary`].
///
/// The trainer itself only keeps its configuration and the history of
/// merges it performed.
#[derive(Debug, Clone, Default)]
pub struct MergeTrainer {
    config: TrainingConfig,
    history: Vec<LearnedMerge>,
}

impl MergeTrainer {
    /// Create a new trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
        }
    }

    /// Create a trainer that runs `iterations` steps per [`train`](Self::train).
    pub fn with_iterations(iterations: usize) -> Self {
        Self::new(TrainingConfig {
            iterations,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Count letter pairings the way this trainer is configured to.
    pub fn count_pairings<S>(&self, tokens: &[S]) -> PairCounts
    where
        S: AsRef<str> + Sync,
    {
        if self.config.parallel {
            count_letter_pairings_parallel(tokens)
        } else {
            count_letter_pairings(tokens)
        }
    }

    /// Run one learning step.
    ///
    /// Returns the merge that was added, or `None` when `text` has no
    /// adjacent letter pairing under the current vocabulary.
    pub fn step(&mut self, vocab: &mut Vocabulary, text: &str) -> Option<LearnedMerge> {
        let tokens = GreedyEncoder::new(vocab).tokenize(text);
        let counts = self.count_pairings(&tokens);
        log::trace!(
            "{} tokens, {} distinct letter pairings",
            tokens.len(),
            counts.len()
        );

        let (pairing, count) = counts.most_frequent()?;
        let merge = LearnedMerge {
            token: CompactString::new(pairing),
            count,
            rank: self.history.len(),
        };

        if !vocab.add_token(&merge.token) {
            log::debug!("Pairing {:?} was already in the vocabulary", merge.token);
        }
        log::debug!(
            "Merge {}: {:?} (frequency: {})",
            merge.rank,
            merge.token,
            merge.count
        );

        self.history.push(merge.clone());
        Some(merge)
    }

    /// Run one learning step, reporting only whether a merge happened.
    pub fn learn_one_merge(&mut self, vocab: &mut Vocabulary, text: &str) -> bool {
        self.step(vocab, text).is_some()
    }

    /// Run up to `iterations` learning steps, stopping at the first step
    /// that finds nothing to merge.
    ///
    /// Returns the number of merges performed.
    pub fn learn_from_text(
        &mut self,
        vocab: &mut Vocabulary,
        text: &str,
        iterations: usize,
    ) -> usize {
        log::info!("Starting merge learning: up to {} merges", iterations);

        let mut merges_done = 0;
        while merges_done < iterations {
            if !self.learn_one_merge(vocab, text) {
                log::info!("No letter pairings left after {} merges", merges_done);
                break;
            }
            merges_done += 1;
        }

        log::info!(
            "Finished merge learning: {} merges, vocabulary size {}",
            merges_done,
            vocab.len()
        );
        merges_done
    }

    /// Learn from `text` for the configured number of iterations.
    pub fn train(&mut self, vocab: &mut Vocabulary, text: &str) -> usize {
        let iterations = self.config.iterations;
        self.learn_from_text(vocab, text, iterations)
    }

    /// Merges performed so far, in learning order.
    pub fn history(&self) -> &[LearnedMerge] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use purse_core::is_letter_token;

    const PETER: &str = "Peter Piper picked a peck of pickled peppers";

    fn learned_tokens(trainer: &MergeTrainer) -> Vec<&str> {
        trainer.history().iter().map(|m| m.token.as_str()).collect()
    }

    #[test]
    fn test_one_step() {
        let mut vocab = Vocabulary::new();
        let mut trainer = MergeTrainer::default();

        let merge = trainer.step(&mut vocab, PETER).unwrap();
        assert_eq!(merge.token, "pe");
        assert_eq!(merge.count, 4);
        assert_eq!(merge.rank, 0);
        assert!(vocab.is_token("pe"));
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_learning_sequence() {
        let mut vocab = Vocabulary::new();
        let mut trainer = MergeTrainer::with_iterations(6);

        assert_eq!(trainer.train(&mut vocab, PETER), 6);
        assert_eq!(
            learned_tokens(&trainer),
            vec!["pe", "ck", "per", "pi", "pick", "ed"]
        );
        assert_eq!(vocab.len(), 6);
    }

    #[test]
    fn test_parallel_learns_the_same() {
        let mut seq_vocab = Vocabulary::new();
        let mut seq = MergeTrainer::with_iterations(6);
        seq.train(&mut seq_vocab, PETER);

        let mut par_vocab = Vocabulary::new();
        let mut par = MergeTrainer::new(TrainingConfig {
            iterations: 6,
            parallel: true,
        });
        par.train(&mut par_vocab, PETER);

        assert_eq!(seq.history(), par.history());
        assert_eq!(seq_vocab, par_vocab);
    }

    #[test]
    fn test_no_pairings_stops_early() {
        let mut vocab = Vocabulary::new();
        let mut trainer = MergeTrainer::default();

        assert_eq!(trainer.learn_from_text(&mut vocab, "a", 10), 0);
        assert!(!trainer.learn_one_merge(&mut vocab, "a b c !?"));
        assert!(!trainer.learn_one_merge(&mut vocab, ""));
        assert!(vocab.is_empty());
        assert!(trainer.history().is_empty());
    }

    #[test]
    fn test_symbols_are_never_merged() {
        let mut vocab = Vocabulary::new();
        let mut trainer = MergeTrainer::default();

        assert!(!trainer.learn_one_merge(&mut vocab, "ⒶⒷ ⒶⒷ"));
        assert!(!trainer.learn_one_merge(&mut vocab, "ⅫⅫ"));
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_stops_when_words_are_fully_merged() {
        let mut vocab = Vocabulary::new();
        let mut trainer = MergeTrainer::default();

        // "ab" merges once, then the text is a single token.
        assert_eq!(trainer.learn_from_text(&mut vocab, "ab", 5), 1);
        assert_eq!(vocab.sorted(), vec!["ab"]);
    }

    #[test]
    fn test_zero_iterations() {
        let mut vocab = Vocabulary::new();
        let mut trainer = MergeTrainer::with_iterations(0);
        assert_eq!(trainer.train(&mut vocab, PETER), 0);
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_merges_are_letters_only() {
        let mut vocab = Vocabulary::new();
        let mut trainer = MergeTrainer::default();
        trainer.learn_from_text(&mut vocab, "hello, world! 42 ünïcödé 🦑🦑 hello", 20);

        for token in vocab.iter() {
            assert!(is_letter_token(token), "{token:?}");
            assert!(token.chars().count() >= 2, "{token:?}");
        }
    }

    #[test]
    fn test_existing_token_is_not_counted_twice() {
        let mut vocab: Vocabulary = ["ab"].into_iter().collect();
        let mut trainer = MergeTrainer::default();

        // Tokenized as ["ab", "c"]; the only pairing is "abc".
        let merge = trainer.step(&mut vocab, "abc").unwrap();
        assert_eq!(merge.token, "abc");
        assert_eq!(vocab.len(), 2);
    }
}
