//! RPC endpoint selection.
//!
//! Pure string construction from the registry and the managed-provider API
//! key: no connectivity check, no retry, no failover between fallbacks. If
//! the selected URL turns out to be unreachable, that failure belongs to
//! whatever network client consumes it.

use url::Url;

use crate::chain::{self, ChainId};
use crate::error::Error;

/// Resolves the single RPC URL to use for a chain.
///
/// Infura-supported chains get the managed URL
/// `https://<name>.infura.io/v3/<key>`; everything else gets the first
/// fallback endpoint from the registry. The check for the API key is per
/// chain, so chains outside Infura's coverage resolve without one — but the
/// assembler visits every chain, which keeps the missing-key case a
/// startup-wide failure.
///
/// # Errors
///
/// [`Error::MissingApiKey`] when the chain is Infura-supported and no key
/// is configured.
pub fn select_url(chain: ChainId, infura_api_key: Option<&str>) -> Result<String, Error> {
    let descriptor = chain::describe(chain);

    let raw = if descriptor.infura_supported {
        let key = infura_api_key.ok_or(Error::MissingApiKey)?;
        format!("https://{}.infura.io/v3/{key}", descriptor.name)
    } else {
        // Registry invariant: the fallback list is never empty.
        descriptor.fallback_urls[0].to_owned()
    };

    Url::parse(&raw)
        .map_err(|e| Error::Config(format!("endpoint for {chain} is not a valid url: {e}")))?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infura_chain_uses_managed_url() {
        let url = select_url(ChainId::EthereumMainnet, Some("ABC")).expect("managed url");
        assert_eq!(url, "https://mainnet.infura.io/v3/ABC");
    }

    #[test]
    fn non_infura_chain_uses_first_fallback() {
        let url = select_url(ChainId::Devnet, Some("ABC")).expect("fallback url");
        assert_eq!(url, "http://localhost:8545");
        let url = select_url(ChainId::BscMainnet, None).expect("fallback url");
        assert_eq!(url, "https://bsc-dataseed.bnbchain.org");
    }

    #[test]
    fn missing_key_fails_only_for_infura_chains() {
        assert!(matches!(
            select_url(ChainId::EthereumMainnet, None),
            Err(Error::MissingApiKey)
        ));
        assert!(select_url(ChainId::Devnet, None).is_ok());
    }

    #[test]
    fn selection_is_deterministic() {
        let first = select_url(ChainId::AvalancheMainnet, Some("k")).expect("url");
        let second = select_url(ChainId::AvalancheMainnet, Some("k")).expect("url");
        assert_eq!(first, second);
    }

    #[test]
    fn every_chain_resolves_with_a_key() {
        for &chain in ChainId::ALL {
            let url = select_url(chain, Some("k")).expect("url");
            assert!(!url.is_empty());
        }
    }
}
