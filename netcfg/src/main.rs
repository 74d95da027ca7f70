//! netcfg CLI
//!
//! Resolves per-chain network configuration (RPC endpoints, signer
//! credentials, fork parameters) for EVM deploy and test tooling.
//!
//! ```sh
//! netcfg init             # Generate a .env.example template
//! netcfg resolve          # Print the resolved configuration
//! ```

mod cmd;

use clap::Parser;
use cmd::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[allow(clippy::print_stderr)]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Resolve {
            env_file,
            format,
            network,
            fork,
        } => cmd::resolve::run(env_file.as_deref(), format, network.as_deref(), fork),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
