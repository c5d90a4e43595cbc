pub mod constants;
pub mod counters;
pub mod error;
pub mod params;
pub mod types;

pub use constants::*;
pub use counters::{FeeAccrualCounter, FeeAccrualCounters};
pub use error::FeesError;
pub use params::{ModuleConfig, Params};
pub use types::*;
