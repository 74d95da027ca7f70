//! Fork policy for the local development chain.
//!
//! When a fork target is configured, the local chain mirrors that chain's
//! state as of a pinned block, or "latest" when no pin exists. Pins live in
//! a static, operator-curated override table: historical forking of some
//! chains fails for certain block ranges, so the table records a block
//! known to succeed, while leaving the general default at "latest" keeps
//! the common cases current without manual upkeep.

use serde::Serialize;

use crate::chain::ChainId;
use crate::error::Error;

/// Per-chain fork pin overrides. Absence means "latest".
pub const PIN_OVERRIDES: &[(ChainId, u64)] = &[
    // Forking hedera from nearby earlier blocks fails downstream.
    (ChainId::HederaMainnet, 62_617_300),
];

/// The resolved fork target for the local chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForkSpec {
    /// The remote chain whose state the local chain mirrors.
    pub chain: ChainId,
    /// The block the fork is pinned to; `None` means the latest block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

impl ForkSpec {
    /// Builds the fork spec from the configured target, if any.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidForkTarget`] when the target id is not a supported
    /// chain.
    pub fn build(target: Option<u64>) -> Result<Option<Self>, Error> {
        let Some(id) = target else {
            return Ok(None);
        };
        let chain = ChainId::try_from(id).map_err(|_| Error::InvalidForkTarget(id))?;
        Ok(Some(Self {
            chain,
            block_number: pinned_block(chain),
        }))
    }
}

/// Looks up the pin override for a chain.
#[must_use]
pub fn pinned_block(chain: ChainId) -> Option<u64> {
    PIN_OVERRIDES
        .iter()
        .find(|(pinned, _)| *pinned == chain)
        .map(|&(_, block)| block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_target_disables_forking() {
        assert_eq!(ForkSpec::build(None).expect("no target"), None);
        // Idempotent: repeated builds with no target stay absent.
        assert_eq!(ForkSpec::build(None).expect("no target"), None);
    }

    #[test]
    fn target_without_override_pins_to_latest() {
        let spec = ForkSpec::build(Some(1)).expect("target").expect("spec");
        assert_eq!(spec.chain, ChainId::EthereumMainnet);
        assert_eq!(spec.block_number, None);
    }

    #[test]
    fn hedera_target_uses_the_pin_override() {
        let spec = ForkSpec::build(Some(295)).expect("target").expect("spec");
        assert_eq!(spec.chain, ChainId::HederaMainnet);
        assert_eq!(spec.block_number, Some(62_617_300));
    }

    #[test]
    fn unsupported_target_is_rejected() {
        assert!(matches!(
            ForkSpec::build(Some(5)),
            Err(Error::InvalidForkTarget(5))
        ));
    }

    #[test]
    fn overrides_reference_supported_chains() {
        for &(chain, block) in PIN_OVERRIDES {
            assert_eq!(pinned_block(chain), Some(block));
        }
    }
}
