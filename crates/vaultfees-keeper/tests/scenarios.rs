//! Block-level scenarios: deposits arrive through the hook, then
//! `begin_block` runs emission and the auction trigger.
//!
//! Run with:
//!   cargo test -p vaultfees-keeper --test scenarios

use vaultfees_core::constants::{MODULE_NAME, NATIVE_DENOM, REWARDS_ACCOUNT};
use vaultfees_core::counters::{FeeAccrualCounter, FeeAccrualCounters};
use vaultfees_core::params::{ModuleConfig, Params};
use vaultfees_core::types::{BlockContext, Coin, DepositEvent, EthAddress, TokenContract, VaultId};
use vaultfees_keeper::memory::{
    Call, CallLog, InMemoryAuctionHouse, InMemoryBank, MemoryKeeper, StaticTokenRegistry,
    StaticVaultRegistry,
};
use vaultfees_keeper::{Bank, FeeQuery};
use vaultfees_state::{FeeStore, MemoryStore, StateDb};

const VAULT: &str = "0x0000000000000000000000000000000000000000";
const FEE_TOKEN: &str = "0x1111111111111111111111111111111111111111";
const FEE_DENOM: &str = "gravity0x1111111111111111111111111111111111111111";
const CTX: BlockContext = BlockContext { height: 100, time: 1_700_000_000 };

// ── Helpers ───────────────────────────────────────────────────────────────────

fn keeper() -> MemoryKeeper {
    let vault = VaultId(EthAddress::from_hex(VAULT).unwrap());
    let token = TokenContract(EthAddress::from_hex(FEE_TOKEN).unwrap());
    MemoryKeeper::new(
        ModuleConfig::default(),
        StaticVaultRegistry::new().with_vault(vault),
        StaticTokenRegistry::new().with_token(token, false, FEE_DENOM),
        InMemoryBank::new(),
        InMemoryAuctionHouse::new(),
    )
}

fn deposit(amount: u128) -> DepositEvent {
    DepositEvent {
        ethereum_sender: VAULT.to_string(),
        receiver: MODULE_NAME.to_string(),
        token_contract: FEE_TOKEN.to_string(),
        amount,
    }
}

fn seed<S: FeeStore>(store: &mut S, auction_interval: u64, count: u64) {
    store
        .set_params(&Params { auction_interval, ..Params::default() })
        .unwrap();
    store
        .set_fee_accrual_counters(&FeeAccrualCounters {
            counters: vec![FeeAccrualCounter { denom: FEE_DENOM.to_string(), count }],
        })
        .unwrap();
    store.set_last_reward_supply_peak(1_000_000).unwrap();
}

/// Deposit lands in the fee account and is reported through the hook.
fn bridge_in<S: FeeStore>(keeper: &mut MemoryKeeper, store: &mut S, amount: u128) {
    keeper.bank_mut().credit(MODULE_NAME, FEE_DENOM, amount);
    keeper.on_deposit(store, &deposit(amount)).unwrap();
}

// ── Emission ──────────────────────────────────────────────────────────────────

#[test]
fn scenario_a_empty_treasury() {
    let mut keeper = keeper();
    let mut store = MemoryStore::new();
    store.set_fee_accrual_counters(&FeeAccrualCounters::new()).unwrap();

    let report = keeper.begin_block(&mut store, &CTX).unwrap();
    keeper.end_block(&mut store, &CTX).unwrap();

    assert_eq!(report.emitted, None);
    assert!(keeper.bank().transfers().is_empty());
    assert_eq!(store.get_last_reward_supply_peak().unwrap(), 0);
}

#[test]
fn scenario_b_first_emission_sets_peak() {
    let mut keeper = keeper();
    keeper.bank_mut().set_balance(MODULE_NAME, NATIVE_DENOM, 1_000_000);
    let mut store = MemoryStore::new();
    store.set_last_reward_supply_peak(0).unwrap();
    let period = Params::default().reward_emission_period as u128;

    keeper.begin_block(&mut store, &CTX).unwrap();

    let transfers = keeper.bank().transfers();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].to, REWARDS_ACCOUNT);
    assert_eq!(transfers[0].coin, Coin::new(NATIVE_DENOM, 1_000_000 / period));
    assert_eq!(store.get_last_reward_supply_peak().unwrap(), 1_000_000);
}

#[test]
fn emission_underflow_emits_one() {
    let mut keeper = keeper();
    keeper.bank_mut().set_balance(MODULE_NAME, NATIVE_DENOM, 1);
    let mut store = MemoryStore::new();

    keeper.begin_block(&mut store, &CTX).unwrap();
    assert_eq!(keeper.bank().transfers()[0].coin.amount, 1);
}

#[test]
fn emission_capped_to_balance() {
    let mut keeper = keeper();
    keeper.bank_mut().set_balance(MODULE_NAME, NATIVE_DENOM, 1);
    let mut store = MemoryStore::new();
    store.set_params(&Params { reward_emission_period: 1, ..Params::default() }).unwrap();
    store.set_last_reward_supply_peak(1_000_000).unwrap();

    keeper.begin_block(&mut store, &CTX).unwrap();
    assert_eq!(keeper.bank().transfers()[0].coin.amount, 1);
    assert_eq!(store.get_last_reward_supply_peak().unwrap(), 1_000_000);
}

#[test]
fn peak_persists_after_balance_drops() {
    let mut keeper = keeper();
    let mut store = MemoryStore::new();
    let period = 50u64;
    store.set_params(&Params { reward_emission_period: period, ..Params::default() }).unwrap();

    keeper.bank_mut().set_balance(MODULE_NAME, NATIVE_DENOM, 2_000_000);
    keeper.begin_block(&mut store, &BlockContext::new(1, 0)).unwrap();
    assert_eq!(store.get_last_reward_supply_peak().unwrap(), 2_000_000);

    keeper.bank_mut().set_balance(MODULE_NAME, NATIVE_DENOM, 1_000_000);
    let report = keeper.begin_block(&mut store, &BlockContext::new(2, 0)).unwrap();
    assert_eq!(report.emitted, Some(2_000_000 / period as u128));
    assert_eq!(store.get_last_reward_supply_peak().unwrap(), 2_000_000);
}

// ── Auctions ──────────────────────────────────────────────────────────────────

#[test]
fn scenario_c_auction_with_sufficient_funds_resets_counter() {
    let mut keeper = keeper();
    let mut store = MemoryStore::new();
    seed(&mut store, 1, 1);

    bridge_in(&mut keeper, &mut store, 2);
    assert_eq!(FeeQuery::new(&store).fee_accrual_counter(FEE_DENOM).unwrap(), 2);

    let report = keeper.begin_block(&mut store, &CTX).unwrap();
    assert_eq!(report.emitted, None);

    let requests = keeper.auctions().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1.starting_tokens_for_sale, Coin::new(FEE_DENOM, 2));
    assert_eq!(keeper.auctions().active_queries(), 1);
    assert_eq!(
        store.get_fee_accrual_counters().unwrap(),
        FeeAccrualCounters {
            counters: vec![FeeAccrualCounter { denom: FEE_DENOM.to_string(), count: 0 }],
        }
    );
}

#[test]
fn scenario_d_dust_auction_keeps_counter() {
    let mut keeper = keeper();
    let mut store = MemoryStore::new();
    seed(&mut store, 1, 0);

    bridge_in(&mut keeper, &mut store, 1);
    keeper.begin_block(&mut store, &CTX).unwrap();

    assert_eq!(keeper.auctions().requests().len(), 1);
    assert_eq!(
        store.get_fee_accrual_counters().unwrap(),
        FeeAccrualCounters {
            counters: vec![FeeAccrualCounter { denom: FEE_DENOM.to_string(), count: 1 }],
        }
    );
}

#[test]
fn scenario_e_not_on_boundary() {
    let mut keeper = keeper();
    let mut store = MemoryStore::new();
    seed(&mut store, 1000, 1);

    bridge_in(&mut keeper, &mut store, 2);
    keeper.begin_block(&mut store, &CTX).unwrap();

    assert!(keeper.auctions().requests().is_empty());
    assert_eq!(store.get_fee_accrual_counters().unwrap().get(FEE_DENOM), Some(2));
}

#[test]
fn cadence_restarts_after_reset() {
    let mut keeper = keeper();
    let mut store = MemoryStore::new();
    seed(&mut store, 3, 0);

    for height in 1..=7u64 {
        bridge_in(&mut keeper, &mut store, 10);
        keeper.begin_block(&mut store, &BlockContext::new(height, 0)).unwrap();
    }
    // Due at 3 deposits, reset, due again at 3 more; one deposit pending.
    assert_eq!(keeper.auctions().requests().len(), 2);
    assert_eq!(store.get_fee_accrual_counters().unwrap().get(FEE_DENOM), Some(1));
}

#[test]
fn emission_transfer_precedes_auction_request() {
    let mut keeper = keeper();
    let mut store = MemoryStore::new();
    seed(&mut store, 1, 0);
    keeper.bank_mut().set_balance(MODULE_NAME, NATIVE_DENOM, 5);

    bridge_in(&mut keeper, &mut store, 2);
    let log = CallLog::default();
    keeper.bank_mut().record_calls(log.clone());
    keeper.auctions_mut().record_calls(log.clone());
    keeper.begin_block(&mut store, &CTX).unwrap();

    let calls = log.borrow().clone();
    let transfer = calls.iter().position(|c| matches!(c, Call::Transfer(_))).unwrap();
    let auction = calls.iter().position(|c| matches!(c, Call::BeginAuction(_))).unwrap();
    assert!(transfer < auction, "{calls:?}");

    // Emission only moved native tokens.
    let transfers = keeper.bank().transfers();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].coin.denom, NATIVE_DENOM);
    assert_eq!(keeper.bank().get_balance(MODULE_NAME, FEE_DENOM), 2);
}

// ── Persistence ──────────────────────────────────────────────────────────────

#[test]
fn blocks_against_sled_store() {
    let dir = std::env::temp_dir().join("vaultfees_scenarios_sled");
    let _ = std::fs::remove_dir_all(&dir);

    {
        let mut db = StateDb::open(&dir).unwrap();
        let mut keeper = keeper();
        seed(&mut db, 1, 0);
        keeper.bank_mut().set_balance(MODULE_NAME, NATIVE_DENOM, 3_000_000);

        bridge_in(&mut keeper, &mut db, 2);
        keeper.begin_block(&mut db, &CTX).unwrap();
        db.flush().unwrap();
    }

    let db = StateDb::open(&dir).unwrap();
    let q = FeeQuery::new(&db);
    assert_eq!(q.last_reward_supply_peak().unwrap(), 3_000_000);
    assert_eq!(q.fee_accrual_counter(FEE_DENOM).unwrap(), 0);
    assert_eq!(q.params().unwrap().auction_interval, 1);

    let _ = std::fs::remove_dir_all(&dir);
}
