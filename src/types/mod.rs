//! Type taxonomy subsystem: chains, tokens, and routing nodes.
//!
//! Pure data definitions shared by SDK consumers; the fan-out engine does
//! not depend on them.

pub mod chain;
pub mod common;
pub mod node;
pub mod token;

pub use chain::{Chain, ChainConfig, ChainType, NativeCurrency};
pub use common::{Address, ChainId, TokenSymbol, TxHash};
pub use node::{NodeCategory, RoutingNode};
pub use token::{Token, TokenWithBalance};
