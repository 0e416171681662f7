//! Vocabulary storage and lookup.
//!
//! The vocabulary is the set of learned multi-character tokens. Single
//! characters are never stored: they are implicitly valid tokens, which is
//! what lets greedy matching always fall back to one character.

use crate::encoding::classify::is_letter_token;
use crate::error::{Result, TokenizerError};
use ahash::AHashSet;
use compact_str::CompactString;
use serde::{Serialize, Serializer};

/// Set of learned tokens.
///
/// Grows monotonically: tokens are added, never removed or modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: AHashSet<CompactString>,
    /// Longest stored token, in chars
    max_token_len: usize,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: AHashSet::with_capacity(capacity),
            max_token_len: 0,
        }
    }

    /// Add a token to the vocabulary.
    ///
    /// No validation happens here; callers that take tokens from untrusted
    /// input should use [`Vocabulary::try_add_token`]. Returns `true` if the
    /// token was not present before.
    pub fn add_token(&mut self, token: &str) -> bool {
        if self.tokens.contains(token) {
            return false;
        }

        self.max_token_len = self.max_token_len.max(token.chars().count());
        self.tokens.insert(CompactString::new(token))
    }

    /// Add a token after checking it is at least two letters long and
    /// contains nothing but letters.
    pub fn try_add_token(&mut self, token: &str) -> Result<bool> {
        if token.chars().nth(1).is_none() {
            return Err(TokenizerError::invalid_token(
                token,
                "learned tokens must be at least two characters long",
            ));
        }
        if !is_letter_token(token) {
            return Err(TokenizerError::invalid_token(
                token,
                "learned tokens must contain only letters",
            ));
        }

        Ok(self.add_token(token))
    }

    /// Check whether `token` was added to the vocabulary.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Check whether `candidate` is a legal token.
    ///
    /// Any single character is a token; longer candidates must have been
    /// added.
    #[inline]
    pub fn is_token(&self, candidate: &str) -> bool {
        let mut chars = candidate.chars();
        if chars.next().is_some() && chars.next().is_none() {
            return true;
        }
        self.contains(candidate)
    }

    /// Number of stored tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Length in chars of the longest stored token, 0 when empty.
    #[inline]
    pub fn max_token_len(&self) -> usize {
        self.max_token_len
    }

    /// Iterate over stored tokens in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    /// Stored tokens in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.iter().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl<S: AsRef<str>> Extend<S> for Vocabulary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for token in iter {
            self.add_token(token.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = Vocabulary::new();
        vocab.extend(iter);
        vocab
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}
