//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for jokehub
#[derive(Parser, Debug)]
#[command(name = "jokehub")]
#[command(author, version, about = "Joke management service - fetch, pair, and manage jokes")]
#[command(long_about = r#"
jokehub fetches jokes from two public sources, and can pair them: five jokes
from each source are fetched in parallel and every pair is merged into a
single combined joke by a generative-text service.

Configuration files are loaded from (in priority order):
1. JOKEHUB_* environment variables
2. --config <path>     Explicit config file
3. ./jokehub.toml      Project-level config
4. ~/.config/jokehub/config.toml   Global config

The combiner needs an API key (combiner.api_key or ANTHROPIC_API_KEY).

Example:
  jokehub joke chuck
  jokehub paired --output json
  jokehub notify email ops@example.com "backup finished"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one random joke from a source ("chuck" or "dad")
    Joke {
        /// Which source to fetch from
        kind: String,
    },

    /// Fetch five jokes from each source and combine every pair
    Paired,

    /// Send an alert over a channel ("email" or "sms")
    Notify {
        /// Delivery channel
        channel: String,
        /// Recipient (email address or phone number)
        recipient: String,
        /// Message body
        message: String,
    },

    /// Least common multiple of a list of positive integers
    Lcm {
        /// Numbers to combine
        #[arg(required = true)]
        numbers: Vec<u64>,
    },

    /// Add one to a number
    Increment {
        /// The number to increment
        number: i64,
    },
}
