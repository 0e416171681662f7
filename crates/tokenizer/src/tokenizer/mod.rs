//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that owns a
//! vocabulary and the merge learner that grows it.

use purse_core::{segment, GreedyEncoder, Result, TokenizerError, Vocabulary};
use purse_training::{LearnedMerge, MergeTrainer, PairCounts, TrainingConfig};

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Merge learning settings
    pub training: TrainingConfig,
    /// Tokens the vocabulary starts with
    pub seed_tokens: Vec<String>,
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of merges [`Tokenizer::train`] attempts.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.training.iterations = iterations;
        self
    }

    /// Count pairings in parallel while learning.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.training.parallel = parallel;
        self
    }

    /// Seed the vocabulary with a token.
    pub fn seed_token(mut self, token: impl Into<String>) -> Self {
        self.config.seed_tokens.push(token.into());
        self
    }

    /// Seed the vocabulary with several tokens.
    pub fn seed_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .seed_tokens
            .extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Build the tokenizer.
    ///
    /// Fails if a seed token is shorter than two characters or contains
    /// anything other than letters.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::with_config(self.config)
    }
}

/// Main tokenizer struct.
///
/// Owns the learned vocabulary exclusively. Hosts that share a tokenizer
/// between threads must serialize learning against tokenizing themselves,
/// e.g. behind an `RwLock`.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    vocab: Vocabulary,
    trainer: MergeTrainer,
}

impl Tokenizer {
    /// Create a tokenizer with an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Create a tokenizer from a configuration.
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        let mut vocab = Vocabulary::with_capacity(config.seed_tokens.len());
        for token in &config.seed_tokens {
            vocab.try_add_token(token).map_err(|err| match err {
                TokenizerError::InvalidToken { token, reason } => {
                    TokenizerError::InvalidConfig(format!("seed token {token:?}: {reason}"))
                }
                other => other,
            })?;
        }

        Ok(Self {
            vocab,
            trainer: MergeTrainer::new(config.training),
        })
    }

    /// Check whether `candidate` is a legal token.
    pub fn is_token(&self, candidate: &str) -> bool {
        self.vocab.is_token(candidate)
    }

    /// Add a token to the vocabulary without validation.
    ///
    /// Returns `true` if the token was new.
    pub fn add_token(&mut self, token: &str) -> bool {
        self.vocab.add_token(token)
    }

    /// Break text into letter and non-letter segments.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        segment(text)
    }

    /// Tokenize text with the current vocabulary.
    ///
    /// The returned tokens borrow from `text` and concatenate back to it.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        GreedyEncoder::new(&self.vocab).tokenize(text)
    }

    /// Count adjacent pairings of letter-only tokens.
    pub fn count_letter_pairings<S>(&self, tokens: &[S]) -> PairCounts
    where
        S: AsRef<str> + Sync,
    {
        self.trainer.count_pairings(tokens)
    }

    /// Learn the most frequent pairing in `text`.
    ///
    /// Returns `false` when there was no pairing to learn.
    pub fn learn_one_merge(&mut self, text: &str) -> bool {
        self.trainer.learn_one_merge(&mut self.vocab, text)
    }

    /// Learn up to `iterations` merges from `text`, stopping early when
    /// nothing is left to merge. Returns the number of merges performed.
    pub fn learn_from_text(&mut self, text: &str, iterations: usize) -> usize {
        self.trainer
            .learn_from_text(&mut self.vocab, text, iterations)
    }

    /// Learn from `text` for the configured number of iterations.
    pub fn train(&mut self, text: &str) -> usize {
        self.trainer.train(&mut self.vocab, text)
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Merges learned so far, in order.
    pub fn learned_merges(&self) -> &[LearnedMerge] {
        self.trainer.history()
    }
}
