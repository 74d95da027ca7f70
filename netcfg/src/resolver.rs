//! Configuration assembly.
//!
//! [`Resolver`] composes the chain registry, credential resolver, endpoint
//! selector and fork policy into one [`ResolvedNetworks`] value: a
//! connection configuration per supported chain plus the local development
//! chain's configuration. Assembly is synchronous, runs once per process,
//! and is all-or-nothing — any failure aborts before a partial result can
//! escape.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::chain::ChainId;
use crate::credentials::Credentials;
use crate::endpoint;
use crate::env::{EnvValues, ExplorerKeys};
use crate::error::Error;
use crate::fork::ForkSpec;

/// Connection timeout applied to every chain, in milliseconds. Generous
/// because some chains (hedera in particular) respond slowly relative to
/// typical client defaults.
pub const CONNECT_TIMEOUT_MS: u64 = 60_000;

/// Starting balance of each pre-funded local account, in wei (1000 ETH).
pub const LOCAL_ACCOUNT_BALANCE_WEI: &str = "1000000000000000000000";

/// Block at which the london hardfork activates on every simulated chain.
pub const LONDON_ACTIVATION_BLOCK: u64 = 1;

/// Connection configuration for one supported chain.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkConfig {
    /// Numeric chain id.
    pub chain_id: ChainId,
    /// The resolved RPC endpoint.
    pub url: String,
    /// The process-wide signer credentials.
    pub credentials: Credentials,
    /// Connection timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Hardfork activation history attached to each simulated chain.
///
/// Identical across all chains in the current design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HardforkHistory {
    /// Activation block of the london hardfork.
    pub london: u64,
}

/// One pre-funded account on the local chain.
#[derive(Clone, Serialize)]
pub struct LocalAccount {
    /// The discrete private key bound to this account.
    pub private_key: String,
    /// Starting balance in wei.
    pub balance: &'static str,
}

impl fmt::Debug for LocalAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalAccount")
            .field("balance", &self.balance)
            .finish_non_exhaustive()
    }
}

/// Account provisioning for the local chain, mirroring the active
/// credential mode: funded discrete-key accounts or mnemonic derivation,
/// never both.
#[derive(Clone, Serialize)]
#[serde(untagged)]
pub enum LocalAccounts {
    /// One pre-funded account per discrete key.
    Funded(Vec<LocalAccount>),
    /// Accounts derived from the mnemonic phrase.
    Derived {
        /// The phrase to derive from.
        mnemonic: String,
    },
}

impl fmt::Debug for LocalAccounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Funded(accounts) => f.debug_tuple("Funded").field(accounts).finish(),
            Self::Derived { .. } => f.write_str("Derived(<redacted>)"),
        }
    }
}

/// Remote-state mirroring parameters for a forked local chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForkingConfig {
    /// RPC endpoint of the chain being forked.
    pub url: String,
    /// Pinned block; absent means the latest block at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

/// Configuration of the local development chain.
///
/// The local chain runs in-process, so unlike [`NetworkConfig`] it carries
/// no url or timeout of its own; when forking, the remote endpoint lives in
/// [`ForkingConfig`].
#[derive(Debug, Clone, Serialize)]
pub struct LocalChainConfig {
    /// The fork target's id when forking, the dedicated local id otherwise.
    pub chain_id: ChainId,
    /// Provisioned accounts, matching the active credential mode.
    pub accounts: LocalAccounts,
    /// Hardfork activation history per simulated chain, keyed by decimal
    /// chain id.
    pub chains: BTreeMap<String, HardforkHistory>,
    /// Fork parameters, present only when a fork target is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forking: Option<ForkingConfig>,
}

/// The fully assembled network configuration.
#[derive(Debug, Clone)]
pub struct ResolvedNetworks {
    /// One connection configuration per supported chain.
    pub per_chain: BTreeMap<ChainId, NetworkConfig>,
    /// The local development chain.
    pub local: LocalChainConfig,
    /// Block-explorer keys, passed through unresolved.
    pub explorer: ExplorerKeys,
}

impl ResolvedNetworks {
    /// Looks up a chain's configuration by identifier.
    #[must_use]
    pub fn by_chain(&self, chain: ChainId) -> Option<&NetworkConfig> {
        self.per_chain.get(&chain)
    }

    /// Looks up a chain's configuration by display name, the way downstream
    /// tools select a target network.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&NetworkConfig> {
        ChainId::from_name(name).and_then(|chain| self.by_chain(chain))
    }
}

// The per-chain map is serialized keyed by display name so downstream
// tooling can index it the way operators write it.
impl Serialize for ResolvedNetworks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let networks: BTreeMap<&'static str, &NetworkConfig> = self
            .per_chain
            .iter()
            .map(|(chain, config)| (chain.name(), config))
            .collect();

        let mut out = serializer.serialize_struct("ResolvedNetworks", 3)?;
        out.serialize_field("networks", &networks)?;
        out.serialize_field("local", &self.local)?;
        out.serialize_field("explorer", &self.explorer)?;
        out.end()
    }
}

/// Builds [`ResolvedNetworks`] from an environment bundle.
#[derive(Debug, Clone)]
pub struct Resolver {
    env: EnvValues,
}

impl Resolver {
    /// Creates a resolver over a captured environment bundle.
    #[must_use]
    pub const fn new(env: EnvValues) -> Self {
        Self { env }
    }

    /// Resolves the full network configuration.
    ///
    /// Credentials are resolved once and threaded to every chain entry;
    /// every supported chain is visited exactly once, so a missing Infura
    /// key fails the whole resolution even when the caller only cares
    /// about a fallback-served chain.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from credential resolution, endpoint selection or the
    /// fork policy; no partial configuration is returned.
    pub fn resolve(&self) -> Result<ResolvedNetworks, Error> {
        let credentials = Credentials::resolve(&self.env)?;
        let fork = ForkSpec::build(self.env.fork_chain_id)?;
        let api_key = self.env.infura_api_key.as_deref();

        let mut per_chain = BTreeMap::new();
        for &chain in ChainId::ALL {
            let url = endpoint::select_url(chain, api_key)?;
            debug!(chain = %chain, url = %url, "endpoint selected");
            per_chain.insert(
                chain,
                NetworkConfig {
                    chain_id: chain,
                    url,
                    credentials: credentials.clone(),
                    timeout_ms: CONNECT_TIMEOUT_MS,
                },
            );
        }

        let local = Self::local_chain(&credentials, fork.as_ref(), api_key)?;
        info!(
            networks = per_chain.len(),
            forked = fork.is_some(),
            "network configuration resolved"
        );

        Ok(ResolvedNetworks {
            per_chain,
            local,
            explorer: self.env.explorer.clone(),
        })
    }

    fn local_chain(
        credentials: &Credentials,
        fork: Option<&ForkSpec>,
        api_key: Option<&str>,
    ) -> Result<LocalChainConfig, Error> {
        let accounts = match credentials {
            Credentials::DiscreteKeys { primary, secondary } => LocalAccounts::Funded(vec![
                LocalAccount {
                    private_key: primary.clone(),
                    balance: LOCAL_ACCOUNT_BALANCE_WEI,
                },
                LocalAccount {
                    private_key: secondary.clone(),
                    balance: LOCAL_ACCOUNT_BALANCE_WEI,
                },
            ]),
            Credentials::Mnemonic { phrase } => LocalAccounts::Derived {
                mnemonic: phrase.clone(),
            },
        };

        let chains = ChainId::ALL
            .iter()
            .map(|chain| {
                (
                    chain.id().to_string(),
                    HardforkHistory {
                        london: LONDON_ACTIVATION_BLOCK,
                    },
                )
            })
            .collect();

        let forking = fork
            .map(|spec| {
                Ok::<_, Error>(ForkingConfig {
                    url: endpoint::select_url(spec.chain, api_key)?,
                    block_number: spec.block_number,
                })
            })
            .transpose()?;

        Ok(LocalChainConfig {
            chain_id: fork.map_or(ChainId::Local, |spec| spec.chain),
            accounts,
            chains,
            forking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_A: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";
    const KEY_B: &str = "0x2222222222222222222222222222222222222222222222222222222222222222";
    const PHRASE: &str = "test test test test test test test test test test test junk";

    fn keyed_env() -> EnvValues {
        EnvValues {
            private_key_1: Some(KEY_A.into()),
            private_key_2: Some(KEY_B.into()),
            infura_api_key: Some("ABC".into()),
            ..EnvValues::default()
        }
    }

    fn mnemonic_env() -> EnvValues {
        EnvValues {
            mnemonic: Some(PHRASE.into()),
            infura_api_key: Some("ABC".into()),
            ..EnvValues::default()
        }
    }

    #[test]
    fn every_registry_chain_gets_exactly_one_entry() {
        let resolved = Resolver::new(keyed_env()).resolve().expect("resolve");
        assert_eq!(resolved.per_chain.len(), ChainId::ALL.len());
        for &chain in ChainId::ALL {
            let config = resolved.by_chain(chain).expect("entry per chain");
            assert_eq!(config.chain_id, chain);
            assert_eq!(config.timeout_ms, CONNECT_TIMEOUT_MS);
        }
    }

    #[test]
    fn managed_and_fallback_urls_land_per_chain() {
        let resolved = Resolver::new(keyed_env()).resolve().expect("resolve");
        assert_eq!(
            resolved.by_name("mainnet").expect("mainnet").url,
            "https://mainnet.infura.io/v3/ABC"
        );
        assert_eq!(
            resolved.by_name("devnet").expect("devnet").url,
            "http://localhost:8545"
        );
    }

    #[test]
    fn missing_api_key_fails_the_whole_resolution() {
        let env = EnvValues {
            infura_api_key: None,
            ..keyed_env()
        };
        assert!(matches!(
            Resolver::new(env).resolve(),
            Err(Error::MissingApiKey)
        ));
    }

    #[test]
    fn missing_credentials_fail_before_anything_else() {
        let env = EnvValues {
            infura_api_key: Some("ABC".into()),
            ..EnvValues::default()
        };
        assert!(matches!(
            Resolver::new(env).resolve(),
            Err(Error::MissingCredentials)
        ));
    }

    #[test]
    fn discrete_keys_provision_two_funded_accounts() {
        let resolved = Resolver::new(keyed_env()).resolve().expect("resolve");
        let LocalAccounts::Funded(accounts) = &resolved.local.accounts else {
            panic!("expected funded accounts");
        };
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].private_key, KEY_A);
        assert_eq!(accounts[1].private_key, KEY_B);
        for account in accounts {
            assert_eq!(account.balance, LOCAL_ACCOUNT_BALANCE_WEI);
        }
    }

    #[test]
    fn mnemonic_mode_derives_local_accounts() {
        let resolved = Resolver::new(mnemonic_env()).resolve().expect("resolve");
        let LocalAccounts::Derived { mnemonic } = &resolved.local.accounts else {
            panic!("expected derived accounts");
        };
        assert_eq!(mnemonic, PHRASE);
    }

    #[test]
    fn unforked_local_chain_keeps_the_local_id() {
        let resolved = Resolver::new(keyed_env()).resolve().expect("resolve");
        assert_eq!(resolved.local.chain_id, ChainId::Local);
        assert_eq!(resolved.local.forking, None);
    }

    #[test]
    fn fork_target_rebinds_the_local_chain() {
        let env = EnvValues {
            fork_chain_id: Some(295),
            ..keyed_env()
        };
        let resolved = Resolver::new(env).resolve().expect("resolve");
        assert_eq!(resolved.local.chain_id, ChainId::HederaMainnet);
        assert_eq!(
            resolved.local.forking,
            Some(ForkingConfig {
                url: "https://mainnet.hashio.io/api".into(),
                block_number: Some(62_617_300),
            })
        );
    }

    #[test]
    fn fork_target_without_pin_uses_latest() {
        let env = EnvValues {
            fork_chain_id: Some(1),
            ..keyed_env()
        };
        let resolved = Resolver::new(env).resolve().expect("resolve");
        let forking = resolved.local.forking.expect("forking");
        assert_eq!(forking.url, "https://mainnet.infura.io/v3/ABC");
        assert_eq!(forking.block_number, None);
    }

    #[test]
    fn invalid_fork_target_is_fatal() {
        let env = EnvValues {
            fork_chain_id: Some(5),
            ..keyed_env()
        };
        assert!(matches!(
            Resolver::new(env).resolve(),
            Err(Error::InvalidForkTarget(5))
        ));
    }

    #[test]
    fn hardfork_history_covers_every_chain() {
        let resolved = Resolver::new(keyed_env()).resolve().expect("resolve");
        assert_eq!(resolved.local.chains.len(), ChainId::ALL.len());
        for &chain in ChainId::ALL {
            assert_eq!(
                resolved.local.chains.get(&chain.id().to_string()),
                Some(&HardforkHistory {
                    london: LONDON_ACTIVATION_BLOCK
                })
            );
        }
    }

    #[test]
    fn output_is_keyed_by_chain_name() {
        let env = EnvValues {
            explorer: ExplorerKeys {
                etherscan: Some("E".into()),
                ..ExplorerKeys::default()
            },
            ..keyed_env()
        };
        let resolved = Resolver::new(env).resolve().expect("resolve");
        let value = serde_json::to_value(&resolved).expect("serialize");

        let networks = value["networks"].as_object().expect("networks table");
        assert_eq!(networks.len(), ChainId::ALL.len());
        assert_eq!(
            networks["mainnet"]["url"],
            serde_json::json!("https://mainnet.infura.io/v3/ABC")
        );
        assert_eq!(networks["mainnet"]["chain_id"], serde_json::json!(1));
        assert_eq!(
            networks["sepolia"]["credentials"],
            serde_json::json!([KEY_A, KEY_B])
        );
        assert_eq!(value["local"]["chains"]["1"]["london"], serde_json::json!(1));
        assert_eq!(value["explorer"]["etherscan"], serde_json::json!("E"));
    }

    #[test]
    fn output_renders_as_toml() {
        let resolved = Resolver::new(keyed_env()).resolve().expect("resolve");
        let rendered = toml::to_string_pretty(&resolved).expect("toml");
        assert!(rendered.contains("[networks.mainnet]"));
    }
}
