//! Purse-core - Core data structures for the purse tokenizer
//!
//! This crate provides the pieces of the tokenizer that do not learn
//! anything: character classification, segmentation, the vocabulary and
//! greedy longest-match tokenization.
//!
//! # Example
//!
//! ```rust
//! use purse_core::{GreedyEncoder, Vocabulary};
//!
//! let mut vocab = Vocabulary::new();
//! vocab.add_token("Pe");
//!
//! let tokens = GreedyEncoder::new(&vocab).tokenize("Peter!");
//! assert_eq!(tokens, vec!["Pe", "t", "e", "r", "!"]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use self::core::Vocabulary;

pub mod encoding;
pub use encoding::{
    classify, is_letter_token, segment, CharClass, GreedyEncoder, Segment, Segments,
};
