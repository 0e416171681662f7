//! Purse-training - merge learning for the purse tokenizer
//!
//! This crate learns multi-character tokens from text by repeatedly
//! merging the most frequent adjacent pair of letter tokens.
//!
//! # Example
//!
//! ```rust
//! use purse_core::Vocabulary;
//! use purse_training::MergeTrainer;
//!
//! let mut vocab = Vocabulary::new();
//! let mut trainer = MergeTrainer::with_iterations(1);
//! trainer.train(&mut vocab, "Peter Piper picked a peck of pickled peppers");
//!
//! assert!(vocab.is_token("pe"));
//! ```

pub use purse_core::{Result, TokenizerError};

pub mod training;
pub use training::{
    count_letter_pairings, count_letter_pairings_parallel, LearnedMerge, MergeTrainer,
    PairCounts, PairStat, TrainingConfig,
};
