//! CLI commands for the purse tokenizer.

pub mod demo;
pub mod learn;
pub mod report;
pub mod tokenize;

pub use demo::DemoCommand;
pub use learn::LearnCommand;
pub use tokenize::TokenizeCommand;
