//! vaultfees-genesis
//!
//! Imports and exports the fee module's state at chain genesis. Import writes
//! the three module records straight into a store in one batch; nothing runs
//! through the keeper.

pub mod state;

pub use state::GenesisState;

use tracing::info;
use vaultfees_core::error::FeesError;
use vaultfees_state::{FeeStore, StoreBatch};

/// Validate `genesis` and write params, counters and peak into `store`.
///
/// Overwrites whatever the store already holds. Callers backed by sled
/// should `flush()` afterwards.
pub fn init_genesis<S: FeeStore>(store: &mut S, genesis: &GenesisState) -> Result<(), FeesError> {
    genesis.validate()?;
    info!("applying vaultfees genesis state");

    store.write_batch(&StoreBatch {
        params: Some(genesis.params.clone()),
        counters: Some(genesis.fee_accrual_counters.clone()),
        peak: Some(genesis.last_reward_supply_peak),
    })?;

    info!(
        reward_emission_period = genesis.params.reward_emission_period,
        auction_interval = genesis.params.auction_interval,
        counters = genesis.fee_accrual_counters.len(),
        peak = genesis.last_reward_supply_peak,
        "genesis: module state written"
    );
    Ok(())
}

/// Read the module's current state back out in genesis form.
pub fn export_genesis<S: FeeStore>(store: &S) -> Result<GenesisState, FeesError> {
    Ok(GenesisState {
        params: store.get_params()?,
        fee_accrual_counters: store.get_fee_accrual_counters()?,
        last_reward_supply_peak: store.get_last_reward_supply_peak()?,
    })
}
