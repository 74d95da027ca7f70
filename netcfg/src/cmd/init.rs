//! `netcfg init` command — generate an environment template.

use std::fs;
use std::path::Path;

use netcfg::env::generate_env_template;
use netcfg::error::Error;

/// Execute the `init` command.
///
/// Writes the commented env template to `output`. Refuses to overwrite an
/// existing file unless `force` is `true`.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// writing fails.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    if output.exists() && !force {
        return Err(Error::Config(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }

    let content = generate_env_template();
    fs::write(output, content)
        .map_err(|e| Error::Config(format!("failed to write '{}': {e}", output.display())))?;

    eprintln!("Environment template written to {}", output.display());
    Ok(())
}
