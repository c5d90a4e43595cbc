use thiserror::Error;

use crate::types::Amount;

#[derive(Debug, Error)]
pub enum FeesError {
    // ── Collaborator failures (fatal for the block) ─────────────────────────
    #[error("bank transfer of {amount}{denom} from {from} to {to} failed: {reason}")]
    BankTransfer {
        from: String,
        to: String,
        denom: String,
        amount: Amount,
        reason: String,
    },

    #[error("auction request for {amount}{denom} rejected: {reason}")]
    AuctionRequest {
        denom: String,
        amount: Amount,
        reason: String,
    },

    // ── Configuration ────────────────────────────────────────────────────────
    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("invalid genesis: {0}")]
    InvalidGenesis(String),

    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    // ── Serialization / storage ──────────────────────────────────────────────
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(String),
}
