use vaultfees_core::counters::FeeAccrualCounters;
use vaultfees_core::error::FeesError;
use vaultfees_core::params::Params;
use vaultfees_core::types::Amount;

/// The module's persisted records: params, fee-accrual counters and the
/// reward-supply peak.
///
/// A missing record reads as its default (default params, no counters, zero
/// peak). Implementations do no validation.
pub trait FeeStore {
    fn get_params(&self) -> Result<Params, FeesError>;
    fn set_params(&mut self, params: &Params) -> Result<(), FeesError>;

    fn get_fee_accrual_counters(&self) -> Result<FeeAccrualCounters, FeesError>;
    fn set_fee_accrual_counters(&mut self, counters: &FeeAccrualCounters) -> Result<(), FeesError>;

    fn get_last_reward_supply_peak(&self) -> Result<Amount, FeesError>;
    fn set_last_reward_supply_peak(&mut self, peak: Amount) -> Result<(), FeesError>;

    /// Write every record present in `batch`. Backends that can write
    /// atomically should override this.
    fn write_batch(&mut self, batch: &StoreBatch) -> Result<(), FeesError> {
        if let Some(p) = &batch.params {
            self.set_params(p)?;
        }
        if let Some(c) = &batch.counters {
            self.set_fee_accrual_counters(c)?;
        }
        if let Some(peak) = batch.peak {
            self.set_last_reward_supply_peak(peak)?;
        }
        Ok(())
    }
}

/// Pending writes, one optional slot per record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreBatch {
    pub params: Option<Params>,
    pub counters: Option<FeeAccrualCounters>,
    pub peak: Option<Amount>,
}

impl StoreBatch {
    pub fn is_empty(&self) -> bool {
        self.params.is_none() && self.counters.is_none() && self.peak.is_none()
    }
}

// ── MemoryStore ──────────────────────────────────────────────────────────────

/// In-memory store for tests and simulations.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    params: Option<Params>,
    counters: Option<FeeAccrualCounters>,
    peak: Option<Amount>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeeStore for MemoryStore {
    fn get_params(&self) -> Result<Params, FeesError> {
        Ok(self.params.clone().unwrap_or_default())
    }

    fn set_params(&mut self, params: &Params) -> Result<(), FeesError> {
        self.params = Some(params.clone());
        Ok(())
    }

    fn get_fee_accrual_counters(&self) -> Result<FeeAccrualCounters, FeesError> {
        Ok(self.counters.clone().unwrap_or_default())
    }

    fn set_fee_accrual_counters(&mut self, counters: &FeeAccrualCounters) -> Result<(), FeesError> {
        self.counters = Some(counters.clone());
        Ok(())
    }

    fn get_last_reward_supply_peak(&self) -> Result<Amount, FeesError> {
        Ok(self.peak.unwrap_or(0))
    }

    fn set_last_reward_supply_peak(&mut self, peak: Amount) -> Result<(), FeesError> {
        self.peak = Some(peak);
        Ok(())
    }
}

// ── CachedStore ──────────────────────────────────────────────────────────────

/// Write-buffering overlay over another store.
///
/// Reads see buffered writes first. Nothing reaches the backing store until
/// `commit`; dropping the overlay discards every buffered write.
pub struct CachedStore<'a, S: FeeStore> {
    inner: &'a mut S,
    pending: StoreBatch,
}

impl<'a, S: FeeStore> CachedStore<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            pending: StoreBatch::default(),
        }
    }

    pub fn pending(&self) -> &StoreBatch {
        &self.pending
    }

    /// Flush buffered writes to the backing store in one batch.
    pub fn commit(self) -> Result<(), FeesError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.inner.write_batch(&self.pending)
    }
}

impl<S: FeeStore> FeeStore for CachedStore<'_, S> {
    fn get_params(&self) -> Result<Params, FeesError> {
        match &self.pending.params {
            Some(p) => Ok(p.clone()),
            None => self.inner.get_params(),
        }
    }

    fn set_params(&mut self, params: &Params) -> Result<(), FeesError> {
        self.pending.params = Some(params.clone());
        Ok(())
    }

    fn get_fee_accrual_counters(&self) -> Result<FeeAccrualCounters, FeesError> {
        match &self.pending.counters {
            Some(c) => Ok(c.clone()),
            None => self.inner.get_fee_accrual_counters(),
        }
    }

    fn set_fee_accrual_counters(&mut self, counters: &FeeAccrualCounters) -> Result<(), FeesError> {
        self.pending.counters = Some(counters.clone());
        Ok(())
    }

    fn get_last_reward_supply_peak(&self) -> Result<Amount, FeesError> {
        match self.pending.peak {
            Some(p) => Ok(p),
            None => self.inner.get_last_reward_supply_peak(),
        }
    }

    fn set_last_reward_supply_peak(&mut self, peak: Amount) -> Result<(), FeesError> {
        self.pending.peak = Some(peak);
        Ok(())
    }
}
