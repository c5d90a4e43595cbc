use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AUCTION_INTERVAL, DEFAULT_INITIAL_PRICE_DECREASE_RATE,
    DEFAULT_PRICE_DECREASE_BLOCK_INTERVAL, DEFAULT_REWARD_EMISSION_PERIOD, MODULE_NAME,
    NATIVE_DENOM, RATE_SCALE, REWARDS_ACCOUNT,
};
use crate::error::FeesError;

/// Governance-controlled module parameters.
///
/// Read once at the start of each block and never changed within it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Blocks over which the reward-supply peak is emitted.
    pub reward_emission_period: u64,
    /// Qualifying deposits between auctions of one denomination.
    pub auction_interval: u64,
    /// Parts per billion, forwarded to the auction module.
    pub initial_price_decrease_rate: u64,
    /// Forwarded to the auction module.
    pub price_decrease_block_interval: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            reward_emission_period: DEFAULT_REWARD_EMISSION_PERIOD,
            auction_interval: DEFAULT_AUCTION_INTERVAL,
            initial_price_decrease_rate: DEFAULT_INITIAL_PRICE_DECREASE_RATE,
            price_decrease_block_interval: DEFAULT_PRICE_DECREASE_BLOCK_INTERVAL,
        }
    }
}

impl Params {
    /// Reject values the keeper cannot run with. Both divisors must be
    /// positive and the rate must lie strictly between 0 and 1.
    pub fn validate(&self) -> Result<(), FeesError> {
        if self.reward_emission_period == 0 {
            return Err(FeesError::InvalidParams(
                "reward emission period must be positive".into(),
            ));
        }
        if self.auction_interval == 0 {
            return Err(FeesError::InvalidParams(
                "auction interval must be positive".into(),
            ));
        }
        if self.initial_price_decrease_rate == 0 || self.initial_price_decrease_rate >= RATE_SCALE {
            return Err(FeesError::InvalidParams(format!(
                "initial price decrease rate must be in (0, {RATE_SCALE}) ppb, got {}",
                self.initial_price_decrease_rate
            )));
        }
        if self.price_decrease_block_interval == 0 {
            return Err(FeesError::InvalidParams(
                "price decrease block interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Static wiring: which denom is native and which accounts the module uses.
/// Not governance-controlled; fixed per chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub native_denom: String,
    /// Fee-collection account. Also funds and receives proceeds of auctions.
    pub fees_account: String,
    pub rewards_account: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            native_denom: NATIVE_DENOM.to_string(),
            fees_account: MODULE_NAME.to_string(),
            rewards_account: REWARDS_ACCOUNT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        Params::default().validate().unwrap();
    }

    #[test]
    fn zero_emission_period_rejected() {
        let p = Params { reward_emission_period: 0, ..Params::default() };
        assert!(matches!(p.validate(), Err(FeesError::InvalidParams(_))));
    }

    #[test]
    fn zero_auction_interval_rejected() {
        let p = Params { auction_interval: 0, ..Params::default() };
        assert!(matches!(p.validate(), Err(FeesError::InvalidParams(_))));
    }

    #[test]
    fn rate_bounds() {
        let zero = Params { initial_price_decrease_rate: 0, ..Params::default() };
        assert!(zero.validate().is_err());
        let one = Params { initial_price_decrease_rate: RATE_SCALE, ..Params::default() };
        assert!(one.validate().is_err());
        let ok = Params { initial_price_decrease_rate: RATE_SCALE - 1, ..Params::default() };
        ok.validate().unwrap();
    }

    #[test]
    fn zero_price_decrease_interval_rejected() {
        let p = Params { price_decrease_block_interval: 0, ..Params::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn params_json_round_trip_keeps_field_names() {
        let json = serde_json::to_value(Params::default()).unwrap();
        assert_eq!(json["reward_emission_period"], DEFAULT_REWARD_EMISSION_PERIOD);
        assert_eq!(json["auction_interval"], DEFAULT_AUCTION_INTERVAL);
    }
}
