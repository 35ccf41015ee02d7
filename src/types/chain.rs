//! Chain taxonomy: the blockchain networks a fan-out round can quote
//! against. Pure data definitions with light helper behavior; no I/O.

use serde::{Deserialize, Serialize};

use crate::types::common::{Address, ChainId, TxHash};

/// Supported blockchain families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Evm,
    Sol,
    Sui,
    Btc,
}

/// Native currency details for a chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// A blockchain network.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chain {
    pub chain_id: ChainId,

    #[serde(rename = "type")]
    pub chain_type: ChainType,

    /// Internal name (e.g., "ethereum_mainnet").
    pub name: String,

    /// User-facing name (e.g., "Ethereum").
    pub display_name: String,

    /// Chain icon URL.
    pub icon: String,

    /// Block explorer base URL.
    pub explorer_url: String,

    pub native_currency: NativeCurrency,
}

/// Extended chain configuration with network details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainConfig {
    #[serde(flatten)]
    pub chain: Chain,

    /// RPC endpoint URL, when a custom one is provided.
    #[serde(default)]
    pub http_rpc_url: Option<String>,

    /// Whether the chain is currently supported.
    pub is_supported: bool,
}

/// Solana's chain id when addressed as a Relay node. Special identifier
/// used internally by the Relay protocol.
pub const SOLANA_AS_RELAY_NUM: u64 = 792_703_809;

/// Well-known chain ids.
pub mod chain_ids {
    pub const ETHEREUM_MAINNET: &str = "1";
    pub const POLYGON: &str = "137";
    pub const BSC: &str = "56";
    pub const AVALANCHE: &str = "43114";
    pub const ARBITRUM: &str = "42161";
    pub const OPTIMISM: &str = "10";
    pub const BASE: &str = "8453";
    pub const SOLANA: &str = "solana";
    pub const SUI: &str = "sui";
    pub const BITCOIN: &str = "btc";
}

/// Fallback RPC endpoint for a chain when no custom RPC is configured.
pub fn default_rpc_url(chain_id: &ChainId) -> Option<&'static str> {
    match chain_id.as_str() {
        "1" => Some("https://eth.public-rpc.com"),
        "137" => Some("https://polygon-rpc.com"),
        "56" => Some("https://bsc-dataseed.binance.org"),
        "43114" => Some("https://api.avax.network/ext/bc/C/rpc"),
        "42161" => Some("https://arb1.arbitrum.io/rpc"),
        "10" => Some("https://mainnet.optimism.io"),
        "8453" => Some("https://mainnet.base.org"),
        _ => None,
    }
}

impl Chain {
    pub fn is_evm(&self) -> bool {
        self.chain_type == ChainType::Evm
    }

    pub fn is_solana(&self) -> bool {
        self.chain_type == ChainType::Sol
    }

    pub fn is_sui(&self) -> bool {
        self.chain_type == ChainType::Sui
    }

    pub fn is_bitcoin(&self) -> bool {
        self.chain_type == ChainType::Btc
    }

    /// Explorer URL for a transaction. Sui explorers use `/txblock/`;
    /// everything else uses `/tx/`.
    pub fn explorer_tx_url(&self, tx_hash: &TxHash) -> String {
        let base = self.explorer_url.trim_end_matches('/');
        match self.chain_type {
            ChainType::Sui => format!("{base}/txblock/{tx_hash}"),
            _ => format!("{base}/tx/{tx_hash}"),
        }
    }

    /// Explorer URL for an account. Sui explorers use `/account/`;
    /// everything else uses `/address/`.
    pub fn explorer_address_url(&self, address: &Address) -> String {
        let base = self.explorer_url.trim_end_matches('/');
        match self.chain_type {
            ChainType::Sui => format!("{base}/account/{address}"),
            _ => format!("{base}/address/{address}"),
        }
    }

    /// Chains are equal when their ids match.
    pub fn same_chain(&self, other: &Chain) -> bool {
        self.chain_id == other.chain_id
    }
}

/// Find a chain by id.
pub fn find_by_id<'a>(chains: &'a [Chain], chain_id: &ChainId) -> Option<&'a Chain> {
    chains.iter().find(|chain| &chain.chain_id == chain_id)
}

/// Chains of one family, preserving input order.
pub fn filter_by_type(chains: &[Chain], chain_type: ChainType) -> Vec<&Chain> {
    chains
        .iter()
        .filter(|chain| chain.chain_type == chain_type)
        .collect()
}

/// Sort chains alphabetically by display name.
pub fn sort_by_display_name(chains: &mut [Chain]) {
    chains.sort_by(|a, b| a.display_name.cmp(&b.display_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(id: &str, chain_type: ChainType, explorer_url: &str) -> Chain {
        Chain {
            chain_id: ChainId::new(id),
            chain_type,
            name: format!("chain_{id}"),
            display_name: id.to_uppercase(),
            icon: String::new(),
            explorer_url: explorer_url.to_string(),
            native_currency: NativeCurrency {
                name: "Ether".into(),
                symbol: "ETH".into(),
                decimals: 18,
            },
        }
    }

    #[test]
    fn explorer_urls_follow_the_chain_family() {
        let evm = chain("1", ChainType::Evm, "https://etherscan.io/");
        let sui = chain("sui", ChainType::Sui, "https://suiscan.xyz");
        let tx = TxHash::from("0xabc");
        let addr = Address::from("0xdef");

        assert_eq!(evm.explorer_tx_url(&tx), "https://etherscan.io/tx/0xabc");
        assert_eq!(
            evm.explorer_address_url(&addr),
            "https://etherscan.io/address/0xdef"
        );
        assert_eq!(sui.explorer_tx_url(&tx), "https://suiscan.xyz/txblock/0xabc");
        assert_eq!(
            sui.explorer_address_url(&addr),
            "https://suiscan.xyz/account/0xdef"
        );
    }

    #[test]
    fn lookup_and_filter() {
        let chains = vec![
            chain("1", ChainType::Evm, "https://etherscan.io"),
            chain("137", ChainType::Evm, "https://polygonscan.com"),
            chain("solana", ChainType::Sol, "https://solscan.io"),
        ];

        assert_eq!(
            find_by_id(&chains, &ChainId::new("137")).unwrap().name,
            "chain_137"
        );
        assert!(find_by_id(&chains, &ChainId::new("999")).is_none());
        assert_eq!(filter_by_type(&chains, ChainType::Evm).len(), 2);
    }

    #[test]
    fn default_rpc_urls_cover_known_evm_chains() {
        assert_eq!(
            default_rpc_url(&ChainId::new(chain_ids::BASE)),
            Some("https://mainnet.base.org")
        );
        assert_eq!(default_rpc_url(&ChainId::new("unknown")), None);
    }

    #[test]
    fn sorting_is_by_display_name() {
        let mut chains = vec![
            chain("solana", ChainType::Sol, "https://solscan.io"),
            chain("1", ChainType::Evm, "https://etherscan.io"),
        ];
        sort_by_display_name(&mut chains);
        assert_eq!(chains[0].chain_id, ChainId::new("1"));
    }
}
