//! Command-line interface for strictly_skill.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Skill - noughts and crosses voice-skill handler
#[derive(Parser, Debug)]
#[command(name = "strictly_skill")]
#[command(about = "Noughts and crosses game handler for voice sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "strictly_skill.toml")]
    pub config: PathBuf,

    /// Override the RNG seed from the configuration
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a session in the terminal
    Play,

    /// Handle one JSON exchange from stdin and print the reply as JSON
    Handle,

    /// Print the JSON schema of the exchange or reply documents
    Schema {
        /// Which document to describe
        #[arg(value_enum, default_value = "exchange")]
        document: Document,
    },
}

/// JSON documents exchanged with the adapter.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Document {
    /// Intent plus prior state
    Exchange,
    /// Reply with next state
    Reply,
    /// Session state blob
    State,
}
