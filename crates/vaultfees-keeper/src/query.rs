use vaultfees_core::counters::FeeAccrualCounters;
use vaultfees_core::error::FeesError;
use vaultfees_core::params::Params;
use vaultfees_core::types::Amount;
use vaultfees_state::FeeStore;

use crate::emission::{compute_emission, emission_period};

/// Read-only view over module state.
pub struct FeeQuery<'a, S: FeeStore> {
    store: &'a S,
}

impl<'a, S: FeeStore> FeeQuery<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn params(&self) -> Result<Params, FeesError> {
        self.store.get_params()
    }

    pub fn fee_accrual_counters(&self) -> Result<FeeAccrualCounters, FeesError> {
        self.store.get_fee_accrual_counters()
    }

    /// Count for one denom; 0 if it has never received a qualifying deposit.
    pub fn fee_accrual_counter(&self, denom: &str) -> Result<u64, FeesError> {
        Ok(self.store.get_fee_accrual_counters()?.get(denom).unwrap_or(0))
    }

    pub fn last_reward_supply_peak(&self) -> Result<Amount, FeesError> {
        self.store.get_last_reward_supply_peak()
    }

    /// What the next block would emit if the fee account held
    /// `native_balance`. Writes nothing.
    pub fn next_emission(&self, native_balance: Amount) -> Result<Amount, FeesError> {
        if native_balance == 0 {
            return Ok(0);
        }
        let params = self.store.get_params()?;
        let period = emission_period(&params)?;
        let peak = self.store.get_last_reward_supply_peak()?.max(native_balance);
        Ok(compute_emission(peak, native_balance, period))
    }

    /// Human-readable summary of module state.
    pub fn describe(&self) -> Result<String, FeesError> {
        let params = self.params()?;
        let counters = self.fee_accrual_counters()?;
        let peak = self.last_reward_supply_peak()?;
        let tracked: Vec<String> = counters
            .iter()
            .map(|c| format!("{}={}", c.denom, c.count))
            .collect();
        Ok(format!(
            "peak {} | emission period {} blocks | auction every {} deposits | counters [{}]",
            peak,
            params.reward_emission_period,
            params.auction_interval,
            tracked.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultfees_state::MemoryStore;

    #[test]
    fn missing_counter_reads_zero() {
        let store = MemoryStore::new();
        let q = FeeQuery::new(&store);
        assert_eq!(q.fee_accrual_counter("nope").unwrap(), 0);
    }

    #[test]
    fn next_emission_uses_peak_and_writes_nothing() {
        let mut store = MemoryStore::new();
        store.set_params(&Params { reward_emission_period: 10, ..Params::default() }).unwrap();
        store.set_last_reward_supply_peak(2_000_000).unwrap();

        let q = FeeQuery::new(&store);
        assert_eq!(q.next_emission(1_000_000).unwrap(), 200_000);
        assert_eq!(q.next_emission(0).unwrap(), 0);
        assert_eq!(q.next_emission(3).unwrap(), 3);
        assert_eq!(store.get_last_reward_supply_peak().unwrap(), 2_000_000);
    }

    #[test]
    fn describe_lists_counters() {
        let mut store = MemoryStore::new();
        let mut counters = FeeAccrualCounters::new();
        counters.increment("gravity0xaa");
        store.set_fee_accrual_counters(&counters).unwrap();
        let text = FeeQuery::new(&store).describe().unwrap();
        assert!(text.contains("gravity0xaa=1"), "{text}");
    }
}
