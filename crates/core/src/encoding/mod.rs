//! Text segmentation and greedy tokenization.
//!
//! Text is first split into letter and non-letter segments, then letter
//! segments are matched greedily against the vocabulary.

pub mod classify;
pub mod greedy;
pub mod segment;

pub use classify::{classify, is_letter_token, CharClass};
pub use greedy::GreedyEncoder;
pub use segment::{segment, Segment, Segments};
