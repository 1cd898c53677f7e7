//! Skycast CLI
//!
//! Interactive weather recommendation agent: type a location, get a
//! weather-appropriate suggestion.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::sync::Arc;

use anyhow::Context;
use application::workflow::WeatherWorkflow;
use clap::Parser;
use domain::WorkflowState;
use infrastructure::{AppConfig, GeocodingAdapter, OllamaInferenceAdapter, WeatherAdapter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Skycast weather recommendation agent
#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Weather recommendation agent", long_about = None)]
struct Cli {
    /// Path to a configuration file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What one line of input asks the loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
enum Turn {
    /// End the session
    Quit,
    /// Nothing typed; prompt again
    Empty,
    /// Run the workflow for this location
    Query(String),
}

/// Classify one trimmed input line
fn classify_input(line: &str) -> Turn {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Turn::Empty;
    }
    if matches!(trimmed.to_lowercase().as_str(), "quit" | "exit" | "q") {
        return Turn::Quit;
    }
    Turn::Query(trimmed.to_string())
}

fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let geocoding =
        Arc::new(GeocodingAdapter::new(&config.geocoding).context("geocoding client")?);
    let weather = Arc::new(WeatherAdapter::new(config.weather).context("weather client")?);
    let inference =
        Arc::new(OllamaInferenceAdapter::new(config.inference).context("inference client")?);

    let workflow = WeatherWorkflow::new(geocoding, weather, inference);

    println!("🌤️  Skycast Weather Recommendation Agent");
    println!("Type a city name or 'quit' to exit");
    println!("Examples: 'Malaga Spain', 'London', 'New York'");
    println!("{}", "-".repeat(40));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("\nEnter location:");
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break; // stdin closed
        };

        match classify_input(&line) {
            Turn::Quit => {
                println!("Goodbye! 👋");
                break;
            },
            Turn::Empty => {
                println!("Please enter a location!");
            },
            Turn::Query(location) => {
                println!("\n🔍 Looking up weather for: {location}");
                let state = WorkflowState::new(format!("weather in {location}"));
                let result = workflow.run(state).await;
                println!("\n✅ {}", result.final_response);
            },
        }
    }

    Ok(())
}
