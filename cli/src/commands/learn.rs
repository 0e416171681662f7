//! Learn command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Learn command arguments.
#[derive(Parser)]
pub struct LearnCommand {
    /// Text to learn from ("-" reads stdin)
    #[arg(short, long, required_unless_present = "file", conflicts_with = "file")]
    pub input: Option<String>,

    /// File to learn from
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum number of merges to learn
    #[arg(short = 'n', long, default_value_t = 5)]
    pub iterations: usize,

    /// Count pairings in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::report::Report;
use anyhow::{Context, Result as AnyhowResult};
use purse_tokenizer::Tokenizer;
use std::io::Read;

pub fn run(cmd: LearnCommand) -> AnyhowResult<()> {
    let text = match (&cmd.input, &cmd.file) {
        (Some(input), _) if input == "-" => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
        (Some(input), _) => input.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("either --input or --file is required"),
    };

    let mut tokenizer = Tokenizer::builder()
        .iterations(cmd.iterations)
        .parallel(cmd.parallel)
        .build()?;

    let merges = tokenizer.train(&text);
    if merges < cmd.iterations {
        log::warn!(
            "Stopped after {} of {} merges: no letter pairings left",
            merges,
            cmd.iterations
        );
    }

    Report::new(&tokenizer, &text).print(cmd.json)
}
