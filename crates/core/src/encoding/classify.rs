//! Letter / non-letter character classification.
//!
//! Every other piece of the tokenizer leans on this split: segments are
//! maximal runs of one class, and only letter tokens are ever merged.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Character in one of the Unicode letter categories (Lu, Ll, Lt, Lm, Lo)
    Letter,
    /// Anything else: digits, whitespace, punctuation, symbols, emoji
    Other,
}

impl CharClass {
    #[inline]
    pub fn is_letter(self) -> bool {
        self == CharClass::Letter
    }
}

/// Classify a character as [`CharClass::Letter`] or [`CharClass::Other`].
///
/// Only the letter general categories count, so `é`, `ß` and `ǅ` are
/// letters while `7`, `_`, `🦑`, `Ⓐ` (So), `Ⅻ` (Nl) and combining marks
/// such as `\u{947}` (Mn) are not.
#[inline]
pub fn classify(ch: char) -> CharClass {
    match get_general_category(ch) {
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter => CharClass::Letter,
        _ => CharClass::Other,
    }
}

/// Check whether a token is non-empty and made only of letters.
#[inline]
pub fn is_letter_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| classify(c).is_letter())
}
