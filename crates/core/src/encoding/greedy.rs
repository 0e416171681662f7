//! Greedy longest-match tokenization.
//!
//! Letter segments are consumed left to right, always taking the longest
//! prefix that is a known token. Non-letter segments are never merged and
//! come out one character per token.

use super::segment::{Segment, Segments};
use crate::core::Vocabulary;

/// Tokenizes text against a borrowed [`Vocabulary`].
///
/// Output tokens borrow from the input text, and their concatenation is
/// always the input text.
#[derive(Debug, Clone, Copy)]
pub struct GreedyEncoder<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> GreedyEncoder<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Tokenize arbitrary text, segment by segment.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut tokens = Vec::with_capacity(text.len());
        for segment in Segments::new(text) {
            self.tokenize_segment_into(segment, &mut tokens);
        }
        tokens
    }

    fn tokenize_segment_into<'t>(&self, segment: Segment<'t>, out: &mut Vec<&'t str>) {
        if segment.is_letter() {
            self.tokenize_word_into(segment.text, out);
        } else {
            out.extend(split_chars(segment.text));
        }
    }

    /// Tokenize a run of letters by greedy longest match.
    pub fn tokenize_word<'t>(&self, word: &'t str) -> Vec<&'t str> {
        let mut tokens = Vec::new();
        self.tokenize_word_into(word, &mut tokens);
        tokens
    }

    fn tokenize_word_into<'t>(&self, word: &'t str, out: &mut Vec<&'t str>) {
        // bounds[i] is the byte offset of the i-th char; the last entry is word.len().
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let num_chars = bounds.len() - 1;
        // Nothing longer than the longest stored token can match.
        let cap = self.vocab.max_token_len().max(1);

        let mut pos = 0;
        while pos < num_chars {
            let longest = cap.min(num_chars - pos);
            let Some(len) = (1..=longest)
                .rev()
                .find(|&len| self.vocab.is_token(&word[bounds[pos]..bounds[pos + len]]))
            else {
                unreachable!("single characters are always tokens");
            };

            out.push(&word[bounds[pos]..bounds[pos + len]]);
            pos += len;
        }
    }
}

/// One slice per character.
fn split_chars(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .map(move |(i, c)| &text[i..i + c.len_utf8()])
}
