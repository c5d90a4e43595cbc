use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::ETH_ADDRESS_LEN;
use crate::error::FeesError;

/// Token amount in base units. u128 covers any realistic supply without
/// overflow on the emission arithmetic.
pub type Amount = u128;

/// Block height.
pub type BlockHeight = u64;

/// Unix timestamp (seconds, UTC).
pub type Timestamp = i64;

// ── EthAddress ───────────────────────────────────────────────────────────────

/// 20-byte EVM-side address as carried in bridge events.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EthAddress(pub [u8; ETH_ADDRESS_LEN]);

impl EthAddress {
    /// Parse a hex address, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, FeesError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|_| FeesError::InvalidAddress(s.to_string()))?;
        if bytes.len() != ETH_ADDRESS_LEN {
            return Err(FeesError::InvalidAddress(s.to_string()));
        }
        let mut arr = [0u8; ETH_ADDRESS_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Lowercase `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EthAddress({})", self.to_hex())
    }
}

// ── VaultId / TokenContract ──────────────────────────────────────────────────

/// Identifier of a registered strategy vault, derived from the sender of a
/// bridge deposit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub struct VaultId(pub EthAddress);

impl fmt::Display for VaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vault:{}", self.0)
    }
}

/// Token contract on the far side of the bridge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub struct TokenContract(pub EthAddress);

impl fmt::Display for TokenContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Coin ─────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Coin {
    pub denom: String,
    pub amount: Amount,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Amount) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// ── Block context ────────────────────────────────────────────────────────────

/// What the block driver hands to `begin_block` / `end_block`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BlockContext {
    pub height: BlockHeight,
    pub time: Timestamp,
}

impl BlockContext {
    pub fn new(height: BlockHeight, time: Timestamp) -> Self {
        Self { height, time }
    }
}

// ── Bridge deposit event ─────────────────────────────────────────────────────

/// A finalized inbound bridge transfer, exactly as reported by the bridge.
///
/// Addresses are kept in their raw string form; the deposit hook parses them
/// and treats anything malformed as not fee-relevant.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DepositEvent {
    /// Sender on the EVM side. For vault fee payouts this is the vault.
    pub ethereum_sender: String,
    /// Receiving account on this chain.
    pub receiver: String,
    pub token_contract: String,
    pub amount: Amount,
}

// ── Auctions ─────────────────────────────────────────────────────────────────

/// Summary of a running auction, as reported by the auction module.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ActiveAuction {
    pub id: u32,
    pub starting_tokens_for_sale: Coin,
    pub remaining_tokens_for_sale: Coin,
    pub funding_module_account: String,
    pub proceeds_module_account: String,
    pub start_block: BlockHeight,
}

/// Arguments for starting a new liquidation auction.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct AuctionRequest {
    pub starting_tokens_for_sale: Coin,
    /// Parts per billion, see `RATE_SCALE`.
    pub initial_price_decrease_rate: u64,
    pub price_decrease_block_interval: u64,
    pub funding_module_account: String,
    pub proceeds_module_account: String,
}
