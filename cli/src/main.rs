//! Purse CLI - Command-line driver for the purse tokenizer.
//!
//! This is the main entry point for the `purse` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DemoCommand, LearnCommand, TokenizeCommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "purse")]
#[command(about = "A letter-pair merging tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn merges from text and show the resulting tokenization
    Learn(LearnCommand),
    /// Tokenize text with a seeded vocabulary
    Tokenize(TokenizeCommand),
    /// Run the "Peter Piper" sample
    Demo(DemoCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Learn(cmd) => commands::learn::run(cmd)?,
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Demo(cmd) => commands::demo::run(cmd)?,
    }

    Ok(())
}
