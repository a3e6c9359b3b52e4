//! CLI entrypoint for jokehub
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use jokehub_application::{
    CalculateLcm, Channel, FetchExternalJoke, FetchPairedJokes, IncrementNumber, SendAlert,
};
use jokehub_infrastructure::{
    AnthropicCombiner, ChuckNorrisClient, ConfigLoader, DadJokesClient, NotifierFactory,
};
use jokehub_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    info!("Starting jokehub");

    // === Dependency Injection ===
    // One HTTP client for the whole process, cloned into each adapter.
    let http = reqwest::Client::new();
    let retry = config.retry.policy();

    let chuck_source = Arc::new(ChuckNorrisClient::with_policy(
        http.clone(),
        &config.sources.chuck_api_url,
        retry.clone(),
    ));
    let dad_source = Arc::new(DadJokesClient::with_policy(
        http.clone(),
        &config.sources.dad_jokes_api_url,
        retry,
    ));

    match cli.command {
        Command::Joke { kind } => {
            let use_case = FetchExternalJoke::new(chuck_source, dad_source);
            let joke = use_case.execute(&kind).await?;
            match cli.output {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_joke(&joke)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_joke_json(&joke)),
            }
        }

        Command::Paired => {
            let Some(api_key) = config.combiner.api_key.clone() else {
                bail!(
                    "Combiner API key missing. Set combiner.api_key in the config \
                     file or the ANTHROPIC_API_KEY environment variable."
                );
            };
            let combiner = Arc::new(AnthropicCombiner::with_options(
                http.clone(),
                api_key,
                config.combiner.base_url.clone(),
                config.combiner.model.clone(),
                config.combiner.max_tokens,
            ));

            let use_case = FetchPairedJokes::new(chuck_source, dad_source, combiner);
            let batch = use_case.execute().await?;

            match cli.output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_paired(&batch)),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_paired_json(&batch))
                }
            }
        }

        Command::Notify {
            channel,
            recipient,
            message,
        } => {
            let channel: Channel = channel.parse()?;
            let use_case = SendAlert::new(NotifierFactory::create(channel));
            use_case.execute(&recipient, &message).await?;
            println!("Alert sent via {channel}");
        }

        Command::Lcm { numbers } => {
            let result = CalculateLcm::new().execute(&numbers)?;
            println!("{result}");
        }

        Command::Increment { number } => {
            let result = IncrementNumber::new().execute(number)?;
            println!("{result}");
        }
    }

    Ok(())
}
