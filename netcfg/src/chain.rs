//! The chain registry: supported chain identifiers and their descriptors.
//!
//! One [`ChainDescriptor`] per [`ChainId`], held in a single `const` table.
//! Keeping identifier, display name, provider support and fallback
//! endpoints in one entry (instead of parallel per-field maps) makes a
//! registry/name-table mismatch unrepresentable, so lookups against the
//! table are total.
//!
//! The fallback endpoint lists are a versioned operational surface:
//! operators edit them out-of-band when a public endpoint becomes
//! unreliable. No health-checking happens here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of a supported chain (EIP-155 chain id).
///
/// The enumeration is closed: every chain the resolver can produce
/// configuration for has exactly one variant, and [`ChainId::try_from`]
/// rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u64)]
pub enum ChainId {
    /// Ethereum mainnet.
    EthereumMainnet = 1,
    /// Optimism mainnet.
    OptimismMainnet = 10,
    /// BNB Smart Chain mainnet.
    BscMainnet = 56,
    /// Polygon PoS mainnet.
    PolygonMainnet = 137,
    /// Hedera mainnet (JSON-RPC relay).
    HederaMainnet = 295,
    /// Secondary local test network on the conventional devnet id.
    Devnet = 1337,
    /// The local development chain.
    Local = 31337,
    /// Arbitrum One mainnet.
    ArbitrumMainnet = 42161,
    /// Avalanche C-Chain mainnet.
    AvalancheMainnet = 43114,
    /// Polygon Mumbai testnet.
    PolygonMumbai = 80001,
    /// Sepolia testnet.
    Sepolia = 11155111,
}

impl ChainId {
    /// Every supported chain, each exactly once.
    pub const ALL: &'static [Self] = &[
        Self::EthereumMainnet,
        Self::OptimismMainnet,
        Self::BscMainnet,
        Self::PolygonMainnet,
        Self::HederaMainnet,
        Self::Devnet,
        Self::Local,
        Self::ArbitrumMainnet,
        Self::AvalancheMainnet,
        Self::PolygonMumbai,
        Self::Sepolia,
    ];

    /// Returns the numeric chain id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self as u64
    }

    /// Returns the chain's display name, used to key the resolved output
    /// and to build managed-provider URLs.
    #[must_use]
    pub fn name(self) -> &'static str {
        describe(self).name
    }

    /// Looks a chain up by display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY.iter().find(|d| d.name == name).map(|d| d.chain)
    }
}

impl TryFrom<u64> for ChainId {
    type Error = Error;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        REGISTRY
            .iter()
            .find(|d| d.chain.id() == id)
            .map(|d| d.chain)
            .ok_or(Error::UnknownChain(id))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.id())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Self::try_from(id).map_err(serde::de::Error::custom)
    }
}

/// Static description of one supported chain.
#[derive(Debug, Clone, Copy)]
pub struct ChainDescriptor {
    /// The chain this entry describes.
    pub chain: ChainId,
    /// Human-readable name; also the key downstream tools index by.
    pub name: &'static str,
    /// Whether the managed RPC provider (Infura) serves this chain.
    pub infura_supported: bool,
    /// Ordered public endpoints used when no managed provider applies.
    /// Never empty; only the first entry is selected (no runtime failover).
    pub fallback_urls: &'static [&'static str],
}

/// The chain registry. Exactly one entry per [`ChainId`] variant.
pub const REGISTRY: &[ChainDescriptor] = &[
    ChainDescriptor {
        chain: ChainId::EthereumMainnet,
        name: "mainnet",
        infura_supported: true,
        fallback_urls: &["https://eth.llamarpc.com"],
    },
    ChainDescriptor {
        chain: ChainId::OptimismMainnet,
        name: "optimism",
        infura_supported: true,
        fallback_urls: &["https://optimism.llamarpc.com"],
    },
    ChainDescriptor {
        chain: ChainId::BscMainnet,
        name: "bsc",
        infura_supported: false,
        fallback_urls: &[
            "https://bsc-dataseed.bnbchain.org",
            "https://getblock.io/nodes/bsc",
            "https://binance.llamarpc.com",
            "https://rpc.ankr.com/bsc",
        ],
    },
    ChainDescriptor {
        chain: ChainId::PolygonMainnet,
        name: "polygon",
        infura_supported: true,
        fallback_urls: &["https://polygon.llamarpc.com"],
    },
    ChainDescriptor {
        chain: ChainId::HederaMainnet,
        name: "hedera",
        infura_supported: false,
        fallback_urls: &["https://mainnet.hashio.io/api"],
    },
    ChainDescriptor {
        chain: ChainId::Devnet,
        name: "devnet",
        infura_supported: false,
        fallback_urls: &["http://localhost:8545"],
    },
    ChainDescriptor {
        chain: ChainId::Local,
        name: "local",
        infura_supported: false,
        fallback_urls: &["http://127.0.0.1:8545"],
    },
    ChainDescriptor {
        chain: ChainId::ArbitrumMainnet,
        name: "arbitrum",
        infura_supported: true,
        fallback_urls: &["https://arbitrum.llamarpc.com"],
    },
    ChainDescriptor {
        chain: ChainId::AvalancheMainnet,
        name: "avalanche",
        infura_supported: true,
        fallback_urls: &[
            "https://avalanche-mainnet-rpc.allthatnode.com",
            "https://rpc.ankr.com/avalanche",
            "https://1rpc.io/avax/c",
            "https://api.avax.network/ext/bc/C/rpc",
            "https://avalanche.public-rpc.com",
            "https://avalanche-c-chain.publicnode.com",
            "https://avalanche.blockpi.network/v1/rpc/public",
            "https://avalanche.drpc.org",
        ],
    },
    ChainDescriptor {
        chain: ChainId::PolygonMumbai,
        name: "polygon-mumbai",
        infura_supported: false,
        fallback_urls: &["https://polygon-testnet.public.blastapi.io"],
    },
    ChainDescriptor {
        chain: ChainId::Sepolia,
        name: "sepolia",
        infura_supported: false,
        fallback_urls: &["https://1rpc.io/sepolia"],
    },
];

/// Returns the descriptor for a supported chain.
///
/// Total by construction: the registry holds one entry per variant.
#[must_use]
pub fn describe(chain: ChainId) -> &'static ChainDescriptor {
    match REGISTRY.iter().find(|d| d.chain == chain) {
        Some(descriptor) => descriptor,
        None => unreachable!("REGISTRY holds one entry per ChainId variant"),
    }
}
