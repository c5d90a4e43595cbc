//! vaultfees-keeper
//!
//! The fee module's state machine: the bridge deposit hook, the per-block
//! reward emission ratchet and the auction trigger, plus read-only queries.
//! Collaborating subsystems (vault registry, bridge token registry, bank,
//! auction module) are reached through the traits in `expected`.

pub mod abci;
pub mod auction;
pub mod emission;
pub mod expected;
pub mod hooks;
pub mod keeper;
pub mod memory;
pub mod query;

#[cfg(test)]
mod test_helpers;

pub use abci::BlockReport;
pub use auction::{is_due, AuctionOutcome};
pub use emission::compute_emission;
pub use expected::{AuctionHouse, Bank, BridgeTokenRegistry, VaultRegistry};
pub use keeper::Keeper;
pub use query::FeeQuery;
