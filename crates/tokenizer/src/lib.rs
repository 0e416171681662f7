//! Purse-tokenizer - High-level tokenizer API
//!
//! This crate ties the vocabulary, segmentation, greedy matching and merge
//! learning together behind a single `Tokenizer`.
//!
//! # Example
//!
//! ```rust
//! use purse_tokenizer::Tokenizer;
//!
//! let text = "Peter Piper picked a peck of pickled peppers";
//!
//! let mut tokenizer = Tokenizer::builder().iterations(5).build()?;
//! tokenizer.train(text);
//!
//! let tokens = tokenizer.tokenize(text);
//! assert_eq!(tokens.concat(), text);
//! # Ok::<(), purse_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use purse_core::{
    classify, is_letter_token, CharClass, GreedyEncoder, Result, Segment, Segments,
    TokenizerError, Vocabulary,
};
pub use purse_training::{LearnedMerge, PairCounts, TrainingConfig};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
