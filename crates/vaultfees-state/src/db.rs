use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use vaultfees_core::constants::{
    FEE_ACCRUAL_COUNTERS_KEY, LAST_REWARD_SUPPLY_PEAK_KEY, MODULE_NAME, PARAMS_KEY,
};
use vaultfees_core::counters::FeeAccrualCounters;
use vaultfees_core::error::FeesError;
use vaultfees_core::params::Params;
use vaultfees_core::types::Amount;

use crate::store::{FeeStore, StoreBatch};

/// Persistent module state backed by sled (pure-Rust, no C dependencies).
///
/// One named tree, `vaultfees`, holding three records:
///   params                  → bincode(Params)
///   fee_accrual_counters    → bincode(FeeAccrualCounters)
///   last_reward_supply_peak → bincode(u128)
pub struct StateDb {
    _db: sled::Db,
    records: sled::Tree,
}

impl StateDb {
    /// Open or create the state database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FeesError> {
        let db = sled::open(path).map_err(|e| FeesError::Storage(e.to_string()))?;
        let records = db
            .open_tree(MODULE_NAME)
            .map_err(|e| FeesError::Storage(e.to_string()))?;
        Ok(Self { _db: db, records })
    }

    fn get_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, FeesError> {
        match self
            .records
            .get(key.as_bytes())
            .map_err(|e| FeesError::Storage(e.to_string()))?
        {
            Some(bytes) => {
                let value = bincode::deserialize(&bytes)
                    .map_err(|e| FeesError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn put_record<T: Serialize>(&self, key: &str, value: &T) -> Result<(), FeesError> {
        let bytes = encode(value)?;
        self.records
            .insert(key.as_bytes(), bytes)
            .map_err(|e| FeesError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), FeesError> {
        self._db.flush().map_err(|e| FeesError::Storage(e.to_string()))?;
        Ok(())
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, FeesError> {
    bincode::serialize(value).map_err(|e| FeesError::Serialization(e.to_string()))
}

impl FeeStore for StateDb {
    fn get_params(&self) -> Result<Params, FeesError> {
        Ok(self.get_record(PARAMS_KEY)?.unwrap_or_default())
    }

    fn set_params(&mut self, params: &Params) -> Result<(), FeesError> {
        self.put_record(PARAMS_KEY, params)
    }

    fn get_fee_accrual_counters(&self) -> Result<FeeAccrualCounters, FeesError> {
        Ok(self.get_record(FEE_ACCRUAL_COUNTERS_KEY)?.unwrap_or_default())
    }

    fn set_fee_accrual_counters(&mut self, counters: &FeeAccrualCounters) -> Result<(), FeesError> {
        self.put_record(FEE_ACCRUAL_COUNTERS_KEY, counters)
    }

    fn get_last_reward_supply_peak(&self) -> Result<Amount, FeesError> {
        Ok(self.get_record(LAST_REWARD_SUPPLY_PEAK_KEY)?.unwrap_or(0))
    }

    fn set_last_reward_supply_peak(&mut self, peak: Amount) -> Result<(), FeesError> {
        self.put_record(LAST_REWARD_SUPPLY_PEAK_KEY, &peak)
    }

    /// All records in `batch` land in a single sled batch.
    fn write_batch(&mut self, batch: &StoreBatch) -> Result<(), FeesError> {
        let mut sled_batch = sled::Batch::default();
        if let Some(p) = &batch.params {
            sled_batch.insert(PARAMS_KEY.as_bytes(), encode(p)?);
        }
        if let Some(c) = &batch.counters {
            sled_batch.insert(FEE_ACCRUAL_COUNTERS_KEY.as_bytes(), encode(c)?);
        }
        if let Some(peak) = batch.peak {
            sled_batch.insert(LAST_REWARD_SUPPLY_PEAK_KEY.as_bytes(), encode(&peak)?);
        }
        self.records
            .apply_batch(sled_batch)
            .map_err(|e| FeesError::Storage(e.to_string()))?;
        debug!(
            params = batch.params.is_some(),
            counters = batch.counters.is_some(),
            peak = batch.peak.is_some(),
            "committed module state batch"
        );
        Ok(())
    }
}
