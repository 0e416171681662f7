//! Tokenize command implementation.

use clap::Parser;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Text to tokenize
    #[arg(short, long)]
    pub input: String,

    /// Token to seed the vocabulary with (repeatable)
    #[arg(short = 't', long = "token")]
    pub tokens: Vec<String>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::report::Report;
use anyhow::Result as AnyhowResult;
use purse_tokenizer::Tokenizer;

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::builder().seed_tokens(cmd.tokens).build()?;

    Report::new(&tokenizer, &cmd.input).print(cmd.json)
}
