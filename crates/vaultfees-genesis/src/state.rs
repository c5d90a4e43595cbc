use serde::{Deserialize, Serialize};
use vaultfees_core::counters::FeeAccrualCounters;
use vaultfees_core::error::FeesError;
use vaultfees_core::params::Params;
use vaultfees_core::types::Amount;

/// Module state as carried in a chain's genesis file.
///
/// Every field falls back to its default when missing from the JSON, so an
/// empty object `{}` is a valid genesis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisState {
    pub params: Params,
    pub fee_accrual_counters: FeeAccrualCounters,
    /// Stored as a decimal string in JSON so it survives tools that read
    /// numbers as doubles.
    #[serde(with = "amount_string")]
    pub last_reward_supply_peak: Amount,
}

impl GenesisState {
    /// Params must be runnable and each counter denom must be non-empty and
    /// unique.
    pub fn validate(&self) -> Result<(), FeesError> {
        self.params.validate()?;

        if self.fee_accrual_counters.iter().any(|c| c.denom.is_empty()) {
            return Err(FeesError::InvalidGenesis(
                "fee accrual counter with empty denom".into(),
            ));
        }
        if let Some(denom) = self.fee_accrual_counters.find_duplicate() {
            return Err(FeesError::InvalidGenesis(format!(
                "duplicate fee accrual counter for {denom}"
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, FeesError> {
        serde_json::from_str(json).map_err(|e| FeesError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, FeesError> {
        serde_json::to_string_pretty(self).map_err(|e| FeesError::Serialization(e.to_string()))
    }
}

mod amount_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use vaultfees_core::types::Amount;

    pub fn serialize<S: Serializer>(amount: &Amount, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Amount, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
