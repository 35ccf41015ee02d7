//! Routing-node taxonomy: the bridges and exchange aggregators a router
//! can route through, and which chain families each supports.

use serde::{Deserialize, Serialize};

use crate::types::chain::ChainType;

/// Primary function of a routing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// Cross-chain bridge moving tokens between blockchains.
    Bridge,
    /// DEX aggregator finding optimal trading routes.
    Exchange,
}

/// Every routing node the SDK knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingNode {
    /// Multi-chain bridge supporting EVM, Solana, Sui, and Bitcoin.
    Relay,
    /// Cross-chain liquidity protocol.
    Debridge,
    /// Optimistic cross-chain bridge.
    Across,
    /// Native cross-chain liquidity protocol supporting Bitcoin.
    Thorchain,
    /// Cross-chain bridge using LayerZero.
    StargateTaxi,
    /// Mayan protocol using Circle's Cross-Chain Transfer Protocol.
    MayanFmctp,
    /// Fast bridging solution from Mayan.
    MayanSwift,
    /// Native token bridge for gas fee optimization.
    GaszipNative,
    /// DEX aggregator with cross-chain capabilities.
    Openocean,
}

impl RoutingNode {
    pub const ALL: [RoutingNode; 9] = [
        RoutingNode::Relay,
        RoutingNode::Debridge,
        RoutingNode::Across,
        RoutingNode::Thorchain,
        RoutingNode::StargateTaxi,
        RoutingNode::MayanFmctp,
        RoutingNode::MayanSwift,
        RoutingNode::GaszipNative,
        RoutingNode::Openocean,
    ];

    /// Human-readable name for UI presentation.
    pub fn display_name(self) -> &'static str {
        match self {
            RoutingNode::Relay => "Relay",
            RoutingNode::Debridge => "deBridge",
            RoutingNode::Across => "Across",
            RoutingNode::Thorchain => "THORChain",
            RoutingNode::StargateTaxi => "Stargate Taxi",
            RoutingNode::MayanFmctp => "Mayan Using CCTP",
            RoutingNode::MayanSwift => "Mayan Swift",
            RoutingNode::GaszipNative => "GasZip",
            RoutingNode::Openocean => "OpenOcean",
        }
    }

    pub fn category(self) -> NodeCategory {
        match self {
            RoutingNode::Openocean => NodeCategory::Exchange,
            _ => NodeCategory::Bridge,
        }
    }

    pub fn is_bridge(self) -> bool {
        self.category() == NodeCategory::Bridge
    }

    pub fn is_exchange(self) -> bool {
        self.category() == NodeCategory::Exchange
    }
}

/// All bridge nodes.
pub fn bridge_nodes() -> Vec<RoutingNode> {
    RoutingNode::ALL
        .into_iter()
        .filter(|node| node.is_bridge())
        .collect()
}

/// All exchange nodes.
pub fn exchange_nodes() -> Vec<RoutingNode> {
    RoutingNode::ALL
        .into_iter()
        .filter(|node| node.is_exchange())
        .collect()
}

/// Routing nodes able to serve a chain family. EVM chains can use every
/// node; the other families are restricted.
pub fn compatible_nodes(chain_type: ChainType) -> &'static [RoutingNode] {
    match chain_type {
        ChainType::Sol => &[
            RoutingNode::Relay,
            RoutingNode::Debridge,
            RoutingNode::Across,
        ],
        ChainType::Sui => &[RoutingNode::Relay],
        ChainType::Btc => &[RoutingNode::Thorchain, RoutingNode::Relay],
        ChainType::Evm => &RoutingNode::ALL,
    }
}
