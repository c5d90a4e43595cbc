//! Contracts of the subsystems the keeper calls into. All calls are
//! synchronous and run against the same replicated state as the keeper.

use std::fmt::Display;

use vaultfees_core::types::{
    ActiveAuction, Amount, AuctionRequest, BlockContext, Coin, TokenContract, VaultId,
};

/// Registry of strategy vaults whose bridge deposits count as protocol fees.
pub trait VaultRegistry {
    fn has_vault(&self, vault_id: &VaultId) -> bool;
}

/// Maps bridged token contracts to denominations on this chain.
pub trait BridgeTokenRegistry {
    /// `Some((is_native, denom))`, or `None` if the contract is unknown.
    fn resolve_denom(&self, token_contract: &TokenContract) -> Option<(bool, String)>;
}

pub trait Bank {
    type Error: Display;

    fn get_balance(&self, account: &str, denom: &str) -> Amount;

    fn transfer_between_modules(
        &mut self,
        from_account: &str,
        to_account: &str,
        coin: &Coin,
    ) -> Result<(), Self::Error>;
}

pub trait AuctionHouse {
    type Error: Display;

    fn get_active_auctions(&self) -> Vec<ActiveAuction>;

    /// Start a new auction. The auction module owns any de-duplication
    /// policy for denominations that already have a running auction.
    fn begin_auction(
        &mut self,
        ctx: &BlockContext,
        request: &AuctionRequest,
    ) -> Result<(), Self::Error>;
}
