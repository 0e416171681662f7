//! Core vocabulary storage.

pub mod vocab;

pub use vocab::Vocabulary;
