//! Demo command implementation.

use clap::Parser;

/// Demo command arguments.
#[derive(Parser)]
pub struct DemoCommand {
    /// Number of merges to learn
    #[arg(short = 'n', long, default_value_t = 5)]
    pub iterations: usize,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use super::report::Report;
use anyhow::Result as AnyhowResult;
use purse_tokenizer::Tokenizer;

pub const SAMPLE: &str = "Peter Piper picked a peck of pickled peppers";

pub fn run(cmd: DemoCommand) -> AnyhowResult<()> {
    let mut tokenizer = Tokenizer::new();

    tokenizer.learn_from_text(SAMPLE, cmd.iterations);

    if !cmd.json {
        println!("Sample: {SAMPLE:?}");
        println!();
    }
    Report::new(&tokenizer, SAMPLE).print(cmd.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_json() {
        let cmd = DemoCommand {
            iterations: 5,
            json: true,
        };
        assert!(run(cmd).is_ok());
    }
}
