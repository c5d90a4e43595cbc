/// ─── Vaultfees Module Constants ─────────────────────────────────────────────
///
/// Fees collected by the protocol land in a single module account. Native
/// token fees are emitted to stakers over time; bridged non-native fees are
/// periodically auctioned off for the native token.

// ── Module accounts ──────────────────────────────────────────────────────────

/// Module name, also the name of the fee-collection account.
pub const MODULE_NAME: &str = "vaultfees";

/// Account that receives emitted native-token rewards for staker distribution.
pub const REWARDS_ACCOUNT: &str = "fee_collector";

/// Base unit of the chain's native token.
pub const NATIVE_DENOM: &str = "unative";

// ── Default parameters ───────────────────────────────────────────────────────

/// Blocks over which the reward-supply peak is notionally emitted.
/// 28 days at ~6 second blocks.
pub const DEFAULT_REWARD_EMISSION_PERIOD: u64 = 403_200;

/// Qualifying deposits between auctions for a single denomination.
pub const DEFAULT_AUCTION_INTERVAL: u64 = 15_000;

/// Starting price decrease rate handed to the auction module, in parts per
/// billion (64_800 ppb = 0.0000648).
pub const DEFAULT_INITIAL_PRICE_DECREASE_RATE: u64 = 64_800;

/// Blocks between price decreases in a running auction.
pub const DEFAULT_PRICE_DECREASE_BLOCK_INTERVAL: u64 = 10;

/// Fixed-point scale for `initial_price_decrease_rate` (1.0 == RATE_SCALE).
pub const RATE_SCALE: u64 = 1_000_000_000;

// ── Emission ─────────────────────────────────────────────────────────────────

/// Smallest emission ever paid out while the fee account holds native tokens.
pub const MIN_EMISSION: u128 = 1;

/// Auctions of this many base units or fewer do not reset the accrual counter.
pub const DUST_AUCTION_AMOUNT: u128 = 1;

// ── Store keys ───────────────────────────────────────────────────────────────

pub const PARAMS_KEY: &str = "params";
pub const FEE_ACCRUAL_COUNTERS_KEY: &str = "fee_accrual_counters";
pub const LAST_REWARD_SUPPLY_PEAK_KEY: &str = "last_reward_supply_peak";

// ── Addresses ────────────────────────────────────────────────────────────────

/// Byte length of an EVM-side address (vault ids and token contracts).
pub const ETH_ADDRESS_LEN: usize = 20;
