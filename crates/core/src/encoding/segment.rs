//! Splitting text into letter and non-letter segments.
//!
//! A segment is a maximal run of characters sharing one [`CharClass`].
//! Concatenating the segments of a string gives back the string, and two
//! neighbouring segments never share a class.

use super::classify::{classify, CharClass};

/// A classified, non-empty slice of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment text
    pub text: &'a str,
    /// Class shared by every character of the segment
    pub class: CharClass,
}

impl<'a> Segment<'a> {
    #[inline]
    pub fn is_letter(&self) -> bool {
        self.class.is_letter()
    }
}

/// Iterator over the segments of a string, borrowing from it.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let class = classify(first);

        let end = self
            .rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| classify(c) != class)
            .map_or(self.rest.len(), |(i, _)| i);

        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(Segment { text, class })
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Break text into its segments, in order.
///
/// Returns an empty vector for empty input.
pub fn segment(text: &str) -> Vec<&str> {
    Segments::new(text).map(|s| s.text).collect()
}
