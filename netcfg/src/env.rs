//! The environment-value bundle driving resolution.
//!
//! The resolver never reads ambient process state: everything it consumes
//! is captured once into an [`EnvValues`] struct, which tests can build
//! directly. [`EnvValues::from_process`] is the only place that touches
//! `std::env`, and it treats empty or whitespace-only values as absent.

use std::env;
use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Name of the variable holding the mnemonic phrase.
pub const MNEMONIC: &str = "MNEMONIC";
/// Name of the variable holding the first discrete private key.
pub const PRIVATE_KEY_1: &str = "PRIVATE_KEY_1";
/// Name of the variable holding the second discrete private key.
pub const PRIVATE_KEY_2: &str = "PRIVATE_KEY_2";
/// Name of the variable holding the managed-provider API key.
pub const INFURA_API_KEY: &str = "INFURA_API_KEY";
/// Name of the variable selecting the fork target chain (decimal id).
pub const FORK_CHAIN_ID: &str = "FORK_CHAIN_ID";

/// Block-explorer API keys, passed through unresolved for the downstream
/// contract-verification tooling. Absence is not an error here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExplorerKeys {
    /// Etherscan (mainnet and Sepolia).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etherscan: Option<String>,
    /// Arbiscan (Arbitrum One).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arbiscan: Option<String>,
    /// Snowtrace (Avalanche C-Chain).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snowtrace: Option<String>,
    /// BscScan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bscscan: Option<String>,
    /// Optimistic Etherscan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimistic_etherscan: Option<String>,
    /// Polygonscan (Polygon PoS and Mumbai).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygonscan: Option<String>,
}

/// Snapshot of every environment value the resolver consumes.
#[derive(Clone, Default)]
pub struct EnvValues {
    /// BIP-39 mnemonic phrase, if set.
    pub mnemonic: Option<String>,
    /// First discrete private key, if set.
    pub private_key_1: Option<String>,
    /// Second discrete private key, if set.
    pub private_key_2: Option<String>,
    /// Managed-provider (Infura) API key, if set.
    pub infura_api_key: Option<String>,
    /// Fork target chain id, if forking is requested.
    pub fork_chain_id: Option<u64>,
    /// Block-explorer keys, passed through unresolved.
    pub explorer: ExplorerKeys,
}

impl EnvValues {
    /// Captures the resolver's environment surface from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `FORK_CHAIN_ID` is set but not a
    /// decimal integer.
    pub fn from_process() -> Result<Self, Error> {
        let fork_chain_id = match read(FORK_CHAIN_ID) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| {
                Error::Config(format!("{FORK_CHAIN_ID} '{raw}' is not a chain id: {e}"))
            })?),
            None => None,
        };

        Ok(Self {
            mnemonic: read(MNEMONIC),
            private_key_1: read(PRIVATE_KEY_1),
            private_key_2: read(PRIVATE_KEY_2),
            infura_api_key: read(INFURA_API_KEY),
            fork_chain_id,
            explorer: ExplorerKeys {
                etherscan: read("ETHERSCAN_API_KEY"),
                arbiscan: read("ARBISCAN_API_KEY"),
                snowtrace: read("SNOWTRACE_API_KEY"),
                bscscan: read("BSCSCAN_API_KEY"),
                optimistic_etherscan: read("OPTIMISM_API_KEY"),
                polygonscan: read("POLYGONSCAN_API_KEY"),
            },
        })
    }
}

// Secrets stay out of log output; only presence is reported.
impl fmt::Debug for EnvValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvValues")
            .field("mnemonic", &self.mnemonic.is_some())
            .field("private_key_1", &self.private_key_1.is_some())
            .field("private_key_2", &self.private_key_2.is_some())
            .field("infura_api_key", &self.infura_api_key.is_some())
            .field("fork_chain_id", &self.fork_chain_id)
            .finish_non_exhaustive()
    }
}

/// Reads an env var, mapping empty and whitespace-only values to `None`.
fn read(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Generate a commented `.env` template covering the full environment
/// surface of the resolver.
#[must_use]
pub fn generate_env_template() -> String {
    String::from(
        r"# netcfg environment template
# Copy to .env and fill in; empty values are treated as unset.

# Credentials: set both discrete keys (preferred), or a mnemonic phrase.
# A single key without its pair counts as no keys at all.
PRIVATE_KEY_1=
PRIVATE_KEY_2=
MNEMONIC=

# Required whenever an Infura-backed chain is resolved.
INFURA_API_KEY=

# Optional: pin the local chain to fork this chain id (e.g. 295).
FORK_CHAIN_ID=

# Optional block-explorer keys, passed through for verification tooling.
ETHERSCAN_API_KEY=
ARBISCAN_API_KEY=
SNOWTRACE_API_KEY=
BSCSCAN_API_KEY=
OPTIMISM_API_KEY=
POLYGONSCAN_API_KEY=
",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secrets() {
        let env = EnvValues {
            mnemonic: Some("test test test junk".into()),
            private_key_1: Some("0xdeadbeef".into()),
            ..EnvValues::default()
        };
        let rendered = format!("{env:?}");
        assert!(!rendered.contains("junk"));
        assert!(!rendered.contains("deadbeef"));
        assert!(rendered.contains("mnemonic: true"));
    }

    #[test]
    fn template_names_every_variable() {
        let template = generate_env_template();
        for key in [
            MNEMONIC,
            PRIVATE_KEY_1,
            PRIVATE_KEY_2,
            INFURA_API_KEY,
            FORK_CHAIN_ID,
            "ETHERSCAN_API_KEY",
            "POLYGONSCAN_API_KEY",
        ] {
            assert!(template.contains(key), "template is missing {key}");
        }
    }
}
