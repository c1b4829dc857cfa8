//! trait-scope CLI: estimate Big Five traits for a block of text.
//!
//! Usage:
//!   trait-scope --file notes.txt --pretty
//!   echo "I love meeting people" | trait-scope --no-delay
//!   trait-scope --text "..." --strategy corpus --seed 7
//!   trait-scope --file notes.txt --features

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use trait_scope::{Analyzer, Config, Strategy, TraitScopeError};

#[derive(Parser)]
#[command(name = "trait-scope")]
#[command(about = "Big Five personality estimates from free text", long_about = None)]
struct Cli {
    /// Read text from a plain-text file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Analyze this text directly
    #[arg(short, long)]
    text: Option<String>,

    /// Scoring strategy: corpus, lexicon or blended
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Seed for reproducible summary phrasing
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated processing delay
    #[arg(long)]
    no_delay: bool,

    /// Print extracted text features instead of the personality result
    #[arg(long)]
    features: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn read_input(cli: &Cli) -> trait_scope::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path).map_err(|e| TraitScopeError::Input {
            message: format!("cannot read {}: {}", path.display(), e),
        });
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn load_config(cli: &Cli) -> trait_scope::Result<Config> {
    let mut config = Config::load().map_err(|e| TraitScopeError::Config {
        message: e.to_string(),
    })?;
    if let Some(strategy) = cli.strategy {
        config.analysis.strategy = strategy;
    }
    if let Some(seed) = cli.seed {
        config.narrative.seed = Some(seed);
    }
    if cli.no_delay {
        config.analysis.latency_ms = 0;
    }
    config
        .analysis
        .validate()
        .map_err(|e| TraitScopeError::Validation {
            message: e.to_string(),
        })?;
    Ok(config)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> trait_scope::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

async fn run(cli: Cli) -> trait_scope::Result<()> {
    let config = load_config(&cli)?;
    let text = read_input(&cli)?;
    let analyzer = Analyzer::new(&config);

    let out = if cli.features {
        to_json(&analyzer.features(&text), cli.pretty)?
    } else {
        tracing::info!(
            "Analyzing {} characters with the {} strategy",
            text.chars().count(),
            analyzer.strategy_name()
        );
        to_json(&analyzer.analyze(&text).await, cli.pretty)?
    };
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trait_scope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
