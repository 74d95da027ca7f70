//! Signer credential resolution.
//!
//! Exactly one credential mode is active per process: either the two
//! discrete private keys, or a mnemonic phrase. The mode is chosen once at
//! startup from the environment bundle and threaded explicitly to every
//! consumer rather than re-derived at each use site.

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::env::{EnvValues, PRIVATE_KEY_1, PRIVATE_KEY_2};
use crate::error::Error;

/// The resolved signer credentials for this process.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Two specific private keys used directly.
    DiscreteKeys {
        /// Key bound to the first local account.
        primary: String,
        /// Key bound to the second local account.
        secondary: String,
    },
    /// Accounts derived from a BIP-39 mnemonic phrase.
    Mnemonic {
        /// The phrase itself.
        phrase: String,
    },
}

impl Credentials {
    /// Selects the credential mode from the environment bundle.
    ///
    /// Discrete keys win when both are present; a mnemonic set alongside
    /// them is ignored for this mode. A single key without its pair counts
    /// as no keys at all, so resolution fails closed rather than degrading
    /// to a half-configured key set.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCredentials`] when neither mode is resolvable, or
    /// [`Error::Config`] when a present key is not 32-byte hex.
    pub fn resolve(env: &EnvValues) -> Result<Self, Error> {
        if let (Some(primary), Some(secondary)) = (&env.private_key_1, &env.private_key_2) {
            validate_key(PRIVATE_KEY_1, primary)?;
            validate_key(PRIVATE_KEY_2, secondary)?;
            return Ok(Self::DiscreteKeys {
                primary: primary.clone(),
                secondary: secondary.clone(),
            });
        }

        if let Some(phrase) = &env.mnemonic {
            return Ok(Self::Mnemonic {
                phrase: phrase.clone(),
            });
        }

        Err(Error::MissingCredentials)
    }

    /// Whether the discrete-key mode is active.
    #[must_use]
    pub const fn is_discrete(&self) -> bool {
        matches!(self, Self::DiscreteKeys { .. })
    }
}

/// Checks that a key is 0x-prefixed 32-byte hex.
fn validate_key(name: &str, key: &str) -> Result<(), Error> {
    let hex_part = key
        .strip_prefix("0x")
        .ok_or_else(|| Error::Config(format!("{name} must be 0x-prefixed hex")))?;
    let bytes = hex::decode(hex_part)
        .map_err(|e| Error::Config(format!("{name} is not valid hex: {e}")))?;
    if bytes.len() != 32 {
        return Err(Error::Config(format!(
            "{name} must encode 32 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(())
}

// Serialized in the shape the downstream deploy tool expects: discrete keys
// as a two-element array, a mnemonic as `{ "mnemonic": ... }`.
impl Serialize for Credentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::DiscreteKeys { primary, secondary } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(primary)?;
                seq.serialize_element(secondary)?;
                seq.end()
            }
            Self::Mnemonic { phrase } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("mnemonic", phrase)?;
                map.end()
            }
        }
    }
}

// Key material and phrases stay out of log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiscreteKeys { .. } => f.write_str("Credentials::DiscreteKeys(<redacted>)"),
            Self::Mnemonic { .. } => f.write_str("Credentials::Mnemonic(<redacted>)"),
        }
    }
}
