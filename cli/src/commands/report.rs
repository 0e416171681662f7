//! Shared output for the CLI commands.

use anyhow::Result as AnyhowResult;
use purse_tokenizer::{LearnedMerge, Tokenizer, Vocabulary};
use serde::Serialize;

/// Pairings listed as candidates for the next merge.
const TOP_PAIRINGS: usize = 5;

/// A pairing and its count in the final tokenization.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub pairing: String,
    pub count: u64,
}

/// Everything a command prints about one run.
#[derive(Serialize)]
pub struct Report<'a> {
    pub merges: &'a [LearnedMerge],
    pub vocabulary: &'a Vocabulary,
    pub tokens: Vec<&'a str>,
    pub next_pairings: Vec<Pairing>,
}

impl<'a> Report<'a> {
    pub fn new(tokenizer: &'a Tokenizer, text: &'a str) -> Self {
        let tokens = tokenizer.tokenize(text);
        let next_pairings = tokenizer
            .count_letter_pairings(&tokens)
            .ranked()
            .into_iter()
            .take(TOP_PAIRINGS)
            .map(|(pairing, count)| Pairing {
                pairing: pairing.to_string(),
                count,
            })
            .collect();

        Self {
            merges: tokenizer.learned_merges(),
            vocabulary: tokenizer.vocab(),
            tokens,
            next_pairings,
        }
    }

    /// Print as JSON or as plain text.
    pub fn print(&self, json: bool) -> AnyhowResult<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        if !self.merges.is_empty() {
            println!("Learned merges:");
            for merge in self.merges {
                println!(
                    "  {:>3}. {:?} (frequency: {})",
                    merge.rank + 1,
                    merge.token,
                    merge.count
                );
            }
            println!();
        }

        println!(
            "Vocabulary ({} tokens): {:?}",
            self.vocabulary.len(),
            self.vocabulary.sorted()
        );
        println!("Tokens ({}): {:?}", self.tokens.len(), self.tokens);

        if !self.next_pairings.is_empty() {
            println!("Next pairings:");
            for Pairing { pairing, count } in &self.next_pairings {
                println!("  {pairing:?}: {count}");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::demo::SAMPLE;

    #[test]
    fn test_report_serializes_tokens() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.learn_from_text(SAMPLE, 5);

        let report = Report::new(&tokenizer, SAMPLE);
        let json = serde_json::to_value(&report).unwrap();

        let tokens: Vec<&str> = json["tokens"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_str().unwrap())
            .collect();
        assert_eq!(tokens.concat(), SAMPLE);
        assert!(tokens.contains(&"pick"));
        assert_eq!(
            json["vocabulary"],
            serde_json::json!(["ck", "pe", "per", "pi", "pick"])
        );
        assert_eq!(json["merges"][0]["token"], "pe");
        assert_eq!(json["merges"][0]["count"], 4);
        assert!(report.print(false).is_ok());
    }

    #[test]
    fn test_next_pairings_ranked() {
        let tokenizer = Tokenizer::new();
        let report = Report::new(&tokenizer, SAMPLE);

        assert_eq!(report.next_pairings.len(), TOP_PAIRINGS);
        assert_eq!(
            report.next_pairings[0],
            Pairing {
                pairing: "pe".to_string(),
                count: 4
            }
        );
        assert!(report.merges.is_empty());
    }

    #[test]
    fn test_next_pairings_empty_without_letters() {
        let tokenizer = Tokenizer::new();
        let report = Report::new(&tokenizer, "42 !?");
        assert!(report.next_pairings.is_empty());
        assert_eq!(report.tokens, vec!["4", "2", " ", "!", "?"]);
    }
}
