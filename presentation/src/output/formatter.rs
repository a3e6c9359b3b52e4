//! Console formatting for command results

use colored::Colorize;
use jokehub_domain::{JokeText, PairedJoke};

/// Formats results for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable rendering of a paired-jokes batch
    pub fn format_paired(batch: &[PairedJoke]) -> String {
        let mut out = String::new();
        for (i, paired) in batch.iter().enumerate() {
            out.push_str(&format!("{}\n", format!("── Pair {} ──", i + 1).bold()));
            out.push_str(&format!("{} {}\n", "Chuck:".cyan(), paired.chuck));
            out.push_str(&format!("{} {}\n", "Dad:".yellow(), paired.dad));
            out.push_str(&format!("{} {}\n\n", "Combined:".green().bold(), paired.combined));
        }
        out
    }

    /// JSON rendering of a paired-jokes batch
    pub fn format_paired_json(batch: &[PairedJoke]) -> String {
        serde_json::to_string_pretty(batch).unwrap_or_else(|_| "[]".to_string())
    }

    /// Human-readable rendering of a single joke
    pub fn format_joke(joke: &JokeText) -> String {
        joke.as_str().to_string()
    }

    /// JSON rendering of a single joke
    pub fn format_joke_json(joke: &JokeText) -> String {
        serde_json::json!({ "joke": joke.as_str() }).to_string()
    }
}
