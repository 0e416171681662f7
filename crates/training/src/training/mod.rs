//! Training infrastructure for the purse tokenizer.
//!
//! This module provides letter-pair counting and the merge learner that
//! grows a vocabulary one pairing at a time.

pub mod counter;
pub mod trainer;

pub use counter::{count_letter_pairings, count_letter_pairings_parallel, PairCounts, PairStat};
pub use trainer::{LearnedMerge, MergeTrainer, TrainingConfig};
