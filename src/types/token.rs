//! Token taxonomy. Pure data definitions with helper behavior for
//! comparison, identification, and display; no I/O.

use serde::{Deserialize, Serialize};

use crate::types::common::{Address, ChainId, TokenSymbol};

/// Sentinel addresses conventionally used for a chain's native token.
pub const NATIVE_TOKEN_ADDRESSES: [&str; 2] = [
    "0x0000000000000000000000000000000000000000",
    "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
];

/// A token on some chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Token {
    pub address: Address,
    pub symbol: TokenSymbol,
    pub decimals: u8,
    pub name: String,
    pub chain_id: ChainId,

    /// Display label, when it differs from the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Token icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Explicit native-token marker; the sentinel addresses also count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_native: Option<bool>,

    /// Tags like "stable" or "governance".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A token together with a holder's balance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenWithBalance {
    #[serde(flatten)]
    pub token: Token,

    /// Raw balance in the token's smallest unit.
    pub amount: String,

    /// USD value of the balance, when priced.
    pub value_usd: Option<f64>,

    /// USD price per token, when priced.
    pub price_usd: Option<f64>,

    /// Liquidity warning flag.
    #[serde(default)]
    pub low_liquidity: bool,
}

impl Token {
    /// Whether this is the chain's native token (ETH, SOL, ...).
    pub fn is_native(&self) -> bool {
        if self.is_native == Some(true) {
            return true;
        }
        let address = self.address.as_str().to_ascii_lowercase();
        NATIVE_TOKEN_ADDRESSES.contains(&address.as_str())
    }

    /// Display name: label, then name, then symbol.
    pub fn display_name(&self) -> &str {
        match &self.label {
            Some(label) if !label.is_empty() => label,
            _ if !self.name.is_empty() => &self.name,
            _ => self.symbol.as_str(),
        }
    }

    /// Tokens match when address (case-insensitive) and chain agree.
    pub fn matches(&self, other: &Token) -> bool {
        self.chain_id == other.chain_id
            && self
                .address
                .as_str()
                .eq_ignore_ascii_case(other.address.as_str())
    }

    /// Unique identifier in `"<chainId>-<lowercased address>"` form.
    pub fn unique_id(&self) -> String {
        format!(
            "{}-{}",
            self.chain_id,
            self.address.as_str().to_ascii_lowercase()
        )
    }
}

/// Format a raw amount in the token's smallest unit as a decimal string,
/// trimming trailing zeros. Returns None when the amount is not an
/// unsigned integer or the decimal count exceeds u128 range.
pub fn format_amount(amount: &str, decimals: u8) -> Option<String> {
    let value: u128 = amount.parse().ok()?;
    let divisor = 10u128.checked_pow(u32::from(decimals))?;

    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder == 0 {
        return Some(quotient.to_string());
    }

    let fraction = format!("{remainder:0width$}", width = usize::from(decimals));
    Some(format!("{}.{}", quotient, fraction.trim_end_matches('0')))
}
