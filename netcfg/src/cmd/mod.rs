//! CLI definitions and command implementations for netcfg.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub mod init;
pub mod resolve;

/// netcfg — multi-chain network configuration resolver.
#[derive(Debug, Parser)]
#[command(name = "netcfg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a commented environment template.
    Init {
        /// Output path for the template.
        #[arg(short, long, default_value = ".env.example")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Resolve the network configuration and print it.
    Resolve {
        /// Path to an env file to load; defaults to `.env` when present.
        #[arg(short, long, env = "ENV_FILE")]
        env_file: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Print a single network entry by name instead of everything.
        #[arg(short, long)]
        network: Option<String>,

        /// Fork target chain id, overriding `FORK_CHAIN_ID`.
        #[arg(long)]
        fork: Option<u64>,
    },
}

/// Serialization format for resolved output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// TOML.
    Toml,
}
