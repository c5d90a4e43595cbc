//! Reward emission ratchet.
//!
//! Each block pays `peak / reward_emission_period` native tokens from the fee
//! account to the rewards account, where `peak` is the largest native balance
//! the fee account has ever held. Because the peak only ratchets up, the
//! per-block rate stays fixed while the balance drains and steps up again when
//! a large batch of fees lands.
//!
//!   emission = min(max(floor(peak / period), 1), balance)

use std::num::NonZeroU64;

use tracing::{debug, info};
use vaultfees_core::constants::MIN_EMISSION;
use vaultfees_core::error::FeesError;
use vaultfees_core::params::Params;
use vaultfees_core::types::{Amount, BlockContext, Coin};
use vaultfees_state::FeeStore;

use crate::expected::{AuctionHouse, Bank, BridgeTokenRegistry, VaultRegistry};
use crate::keeper::Keeper;

/// Emission for one block. `balance` must be non-zero.
pub fn compute_emission(peak: Amount, balance: Amount, period: NonZeroU64) -> Amount {
    let mut emission = peak / Amount::from(period.get());
    if emission == 0 {
        emission = MIN_EMISSION;
    }
    if emission > balance {
        emission = balance;
    }
    emission
}

pub(crate) fn emission_period(params: &Params) -> Result<NonZeroU64, FeesError> {
    NonZeroU64::new(params.reward_emission_period).ok_or_else(|| {
        FeesError::InvalidParams("reward emission period must be positive".into())
    })
}

impl<V, T, B, A> Keeper<V, T, B, A>
where
    V: VaultRegistry,
    T: BridgeTokenRegistry,
    B: Bank,
    A: AuctionHouse,
{
    /// Pay this block's reward emission and ratchet the stored peak.
    ///
    /// Returns the amount emitted, or `None` if the fee account holds no
    /// native tokens (nothing is read or written beyond the balance).
    ///
    /// # Errors
    /// A failed bank transfer aborts the block with `FeesError::BankTransfer`;
    /// the peak is not written in that case.
    pub fn run_emission<S: FeeStore>(
        &mut self,
        store: &mut S,
        ctx: &BlockContext,
        params: &Params,
    ) -> Result<Option<Amount>, FeesError> {
        let period = emission_period(params)?;
        let balance = self
            .bank
            .get_balance(&self.config.fees_account, &self.config.native_denom);
        if balance == 0 {
            debug!(height = ctx.height, "no native fees to emit");
            return Ok(None);
        }

        let last_peak = store.get_last_reward_supply_peak()?;
        let peak = last_peak.max(balance);
        let emission = compute_emission(peak, balance, period);

        let coin = Coin::new(self.config.native_denom.clone(), emission);
        self.bank
            .transfer_between_modules(&self.config.fees_account, &self.config.rewards_account, &coin)
            .map_err(|e| FeesError::BankTransfer {
                from: self.config.fees_account.clone(),
                to: self.config.rewards_account.clone(),
                denom: coin.denom.clone(),
                amount: emission,
                reason: e.to_string(),
            })?;

        store.set_last_reward_supply_peak(peak)?;

        info!(
            height = ctx.height,
            time = ctx.time,
            emission = %coin,
            balance,
            peak,
            "emitted fee rewards"
        );
        Ok(Some(emission))
    }
}
