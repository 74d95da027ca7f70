//! `netcfg resolve` command — run the resolver and print the result.
//!
//! Loads `.env` values, captures the environment bundle, resolves the full
//! network configuration, and writes it to stdout in the requested format.
//! Logs go to stderr so stdout stays machine-consumable.

use std::path::Path;

use serde::Serialize;

use netcfg::env::EnvValues;
use netcfg::error::Error;
use netcfg::resolver::Resolver;

use super::OutputFormat;

/// Execute the `resolve` command.
///
/// # Errors
///
/// Returns an error if env-file loading fails, if resolution fails, or if
/// `--network` names an unsupported chain.
#[allow(clippy::print_stdout)]
pub fn run(
    env_file: Option<&Path>,
    format: OutputFormat,
    network: Option<&str>,
    fork: Option<u64>,
) -> Result<(), Error> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| {
                Error::Config(format!("failed to load env file '{}': {e}", path.display()))
            })?;
        }
        // A missing default .env is fine; the process env may be complete.
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let mut env = EnvValues::from_process()?;
    if fork.is_some() {
        env.fork_chain_id = fork;
    }

    let resolved = Resolver::new(env).resolve()?;

    let rendered = match network {
        Some(name) => {
            let config = resolved
                .by_name(name)
                .ok_or_else(|| Error::Config(format!("unknown network '{name}'")))?;
            render(config, format)?
        }
        None => render(&resolved, format)?,
    };
    println!("{rendered}");
    Ok(())
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| Error::Config(format!("failed to render json: {e}"))),
        OutputFormat::Toml => toml::to_string_pretty(value)
            .map_err(|e| Error::Config(format!("failed to render toml: {e}"))),
    }
}
