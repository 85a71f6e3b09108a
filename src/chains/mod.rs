/// Static registry of supported EVM chains
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{Result, TrackerError};

/// Metadata for one supported chain
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Numeric EVM chain ID
    pub id: u64,
    /// Human-readable display label
    pub label: &'static str,
    /// Upstream provider network slug (Alchemy subdomain)
    pub network: &'static str,
    /// Block explorer base URL
    pub explorer_url: &'static str,
}

/// Chain selectors accepted by the registry, in display order
pub const SUPPORTED_CHAINS: [&str; 5] = ["ethereum", "optimism", "base", "arbitrum", "bnbchain"];

static CHAIN_REGISTRY: Lazy<HashMap<&'static str, ChainConfig>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    registry.insert(
        "ethereum",
        ChainConfig {
            id: 1,
            label: "Ethereum",
            network: "eth-mainnet",
            explorer_url: "https://etherscan.io",
        },
    );
    registry.insert(
        "optimism",
        ChainConfig {
            id: 10,
            label: "Optimism",
            network: "opt-mainnet",
            explorer_url: "https://optimistic.etherscan.io",
        },
    );
    registry.insert(
        "base",
        ChainConfig {
            id: 8453,
            label: "Base",
            network: "base-mainnet",
            explorer_url: "https://basescan.org",
        },
    );
    registry.insert(
        "arbitrum",
        ChainConfig {
            id: 42161,
            label: "Arbitrum",
            network: "arb-mainnet",
            explorer_url: "https://arbiscan.io",
        },
    );
    registry.insert(
        "bnbchain",
        ChainConfig {
            id: 56,
            label: "BNB Chain",
            network: "bnb-mainnet",
            explorer_url: "https://bscscan.com",
        },
    );
    registry
});

/// Resolve a chain selector against the registry.
///
/// An unknown selector is a configuration mistake, not transient data
/// unavailability, so it surfaces as an error rather than fallback data.
pub fn resolve_chain(selector: &str) -> Result<&'static ChainConfig> {
    CHAIN_REGISTRY
        .get(selector)
        .ok_or_else(|| TrackerError::UnsupportedChain(selector.to_string()))
}

/// All chain selectors known to the registry
pub fn supported_chains() -> impl Iterator<Item = &'static str> {
    SUPPORTED_CHAINS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_chains() {
        for selector in SUPPORTED_CHAINS {
            let config = resolve_chain(selector).unwrap();
            assert!(config.id > 0);
            assert!(!config.network.is_empty());
        }

        assert_eq!(resolve_chain("ethereum").unwrap().id, 1);
        assert_eq!(resolve_chain("base").unwrap().network, "base-mainnet");
        assert_eq!(resolve_chain("bnbchain").unwrap().id, 56);
    }

    #[test]
    fn test_unknown_chain_is_an_error() {
        let err = resolve_chain("unknownchain").unwrap_err();
        assert!(matches!(err, TrackerError::UnsupportedChain(_)));
    }
}
