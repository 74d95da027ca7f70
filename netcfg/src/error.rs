//! Unified error types for the resolver.
//!
//! Every variant indicates misconfiguration detected at startup, never a
//! transient condition, so none of them is retried. Unreachable RPC
//! endpoints are not reported here; they surface from whatever network
//! client consumes the resolved configuration.

use thiserror::Error;

/// Top-level error type for network configuration resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither credential mode is resolvable: the discrete key pair is
    /// incomplete and no mnemonic is set.
    #[error("credentials: set PRIVATE_KEY_1 and PRIVATE_KEY_2, or MNEMONIC")]
    MissingCredentials,

    /// A chain requires the managed RPC provider but no API key is set.
    #[error("endpoint: INFURA_API_KEY is required for Infura-backed chains")]
    MissingApiKey,

    /// A chain identifier is outside the supported enumeration.
    #[error("chain: unknown chain id {0}")]
    UnknownChain(u64),

    /// The configured fork target is not a supported chain.
    #[error("fork: target chain id {0} is not a supported chain")]
    InvalidForkTarget(u64),

    /// Malformed environment value or CLI-level file handling failure.
    #[error("config: {0}")]
    Config(String),
}
