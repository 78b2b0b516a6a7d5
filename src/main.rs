//! Strictly Skill - unified CLI
//!
//! Plays noughts and crosses in the terminal or handles adapter exchanges.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, Document};
use std::io::Read;
use strictly_noughts::{Reply, SessionState};
use strictly_skill::{Exchange, SkillConfig, run_repl};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = SkillConfig::load_or_default(&cli.config)?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match cli.command {
        Command::Play => play(&config),
        Command::Handle => handle(&config),
        Command::Schema { document } => schema(document),
    }
}

/// Interactive session on stdin/stdout.
#[instrument(skip(config))]
fn play(config: &SkillConfig) -> Result<()> {
    let mut handler = config.handler();
    info!(
        medium_random_threshold = handler.engine().medium_random_threshold(),
        "Starting terminal session"
    );
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_repl(&mut handler, config.new_session(), stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Single JSON exchange on stdin/stdout.
#[instrument(skip(config))]
fn handle(config: &SkillConfig) -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut handler = config.handler();
    let output = Exchange::run_json(&input, &mut handler, config)?;
    println!("{output}");
    Ok(())
}

/// Prints a JSON schema.
fn schema(document: Document) -> Result<()> {
    let schema = match document {
        Document::Exchange => schemars::schema_for!(Exchange),
        Document::Reply => schemars::schema_for!(Reply),
        Document::State => schemars::schema_for!(SessionState),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
