//! In-memory collaborators for tests and offline simulation.
//!
//! Each one records the calls the keeper makes so call order and arguments
//! can be asserted. The bank and auction house can also share a `CallLog`
//! to capture ordering across both.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use thiserror::Error;
use vaultfees_core::types::{
    ActiveAuction, Amount, AuctionRequest, BlockContext, Coin, TokenContract, VaultId,
};

use crate::expected::{AuctionHouse, Bank, BridgeTokenRegistry, VaultRegistry};

// ── Call log ─────────────────────────────────────────────────────────────────

/// A bank or auction call, as seen by the collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Balance { account: String, denom: String },
    Transfer(Transfer),
    ActiveAuctions,
    BeginAuction(Coin),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

fn record(log: &Option<CallLog>, call: Call) {
    if let Some(log) = log {
        log.borrow_mut().push(call);
    }
}

// ── Registries ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct StaticVaultRegistry {
    vaults: HashSet<VaultId>,
}

impl StaticVaultRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vault(mut self, vault: VaultId) -> Self {
        self.vaults.insert(vault);
        self
    }
}

impl VaultRegistry for StaticVaultRegistry {
    fn has_vault(&self, vault_id: &VaultId) -> bool {
        self.vaults.contains(vault_id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct StaticTokenRegistry {
    tokens: HashMap<TokenContract, (bool, String)>,
}

impl StaticTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, contract: TokenContract, is_native: bool, denom: &str) -> Self {
        self.tokens.insert(contract, (is_native, denom.to_string()));
        self
    }
}

impl BridgeTokenRegistry for StaticTokenRegistry {
    fn resolve_denom(&self, token_contract: &TokenContract) -> Option<(bool, String)> {
        self.tokens.get(token_contract).cloned()
    }
}

// ── Bank ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryBankError {
    #[error("insufficient funds in {account}: need {need}, have {have}")]
    InsufficientFunds {
        account: String,
        need: Amount,
        have: Amount,
    },

    #[error("transfers disabled")]
    TransfersDisabled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub coin: Coin,
}

/// Balances keyed by (account, denom).
#[derive(Debug, Default)]
pub struct InMemoryBank {
    balances: HashMap<(String, String), Amount>,
    scripted: RefCell<HashMap<(String, String), VecDeque<Amount>>>,
    balance_reads: Cell<usize>,
    transfers: Vec<Transfer>,
    fail_transfers: bool,
    log: Option<CallLog>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&mut self, account: &str, denom: &str, amount: Amount) {
        self.balances
            .insert((account.to_string(), denom.to_string()), amount);
    }

    pub fn credit(&mut self, account: &str, denom: &str, amount: Amount) {
        let bal = self
            .balances
            .entry((account.to_string(), denom.to_string()))
            .or_insert(0);
        *bal = bal.saturating_add(amount);
    }

    /// Queue values returned by the next `get_balance` calls for this pair,
    /// ahead of the stored balance.
    pub fn script_balances(&mut self, account: &str, denom: &str, values: &[Amount]) {
        self.scripted
            .get_mut()
            .entry((account.to_string(), denom.to_string()))
            .or_default()
            .extend(values.iter().copied());
    }

    /// Append every balance read and successful transfer to `log`.
    pub fn record_calls(&mut self, log: CallLog) {
        self.log = Some(log);
    }

    pub fn fail_transfers(&mut self, fail: bool) {
        self.fail_transfers = fail;
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn balance_reads(&self) -> usize {
        self.balance_reads.get()
    }
}

impl Bank for InMemoryBank {
    type Error = MemoryBankError;

    fn get_balance(&self, account: &str, denom: &str) -> Amount {
        self.balance_reads.set(self.balance_reads.get() + 1);
        record(
            &self.log,
            Call::Balance {
                account: account.to_string(),
                denom: denom.to_string(),
            },
        );
        let key = (account.to_string(), denom.to_string());
        if let Some(v) = self
            .scripted
            .borrow_mut()
            .get_mut(&key)
            .and_then(|q| q.pop_front())
        {
            return v;
        }
        self.balances.get(&key).copied().unwrap_or(0)
    }

    fn transfer_between_modules(
        &mut self,
        from_account: &str,
        to_account: &str,
        coin: &Coin,
    ) -> Result<(), MemoryBankError> {
        if self.fail_transfers {
            return Err(MemoryBankError::TransfersDisabled);
        }
        let from_key = (from_account.to_string(), coin.denom.clone());
        let have = self.balances.get(&from_key).copied().unwrap_or(0);
        if have < coin.amount {
            return Err(MemoryBankError::InsufficientFunds {
                account: from_account.to_string(),
                need: coin.amount,
                have,
            });
        }
        self.balances.insert(from_key, have - coin.amount);
        self.credit(to_account, &coin.denom, coin.amount);
        let transfer = Transfer {
            from: from_account.to_string(),
            to: to_account.to_string(),
            coin: coin.clone(),
        };
        record(&self.log, Call::Transfer(transfer.clone()));
        self.transfers.push(transfer);
        Ok(())
    }
}

// ── Auction house ────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryAuctionError {
    #[error("auction rejected: {0}")]
    Rejected(String),
}

/// Records auction requests; never clears them.
#[derive(Debug, Default)]
pub struct InMemoryAuctionHouse {
    active: Vec<ActiveAuction>,
    requests: Vec<(BlockContext, AuctionRequest)>,
    active_queries: Cell<usize>,
    reject_with: Option<String>,
    next_id: u32,
    log: Option<CallLog>,
}

impl InMemoryAuctionHouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_with(&mut self, reason: &str) {
        self.reject_with = Some(reason.to_string());
    }

    /// Append every active-auction query and accepted request to `log`.
    pub fn record_calls(&mut self, log: CallLog) {
        self.log = Some(log);
    }

    pub fn requests(&self) -> &[(BlockContext, AuctionRequest)] {
        &self.requests
    }

    pub fn active_queries(&self) -> usize {
        self.active_queries.get()
    }
}

impl AuctionHouse for InMemoryAuctionHouse {
    type Error = MemoryAuctionError;

    fn get_active_auctions(&self) -> Vec<ActiveAuction> {
        self.active_queries.set(self.active_queries.get() + 1);
        record(&self.log, Call::ActiveAuctions);
        self.active.clone()
    }

    fn begin_auction(
        &mut self,
        ctx: &BlockContext,
        request: &AuctionRequest,
    ) -> Result<(), MemoryAuctionError> {
        if let Some(reason) = &self.reject_with {
            return Err(MemoryAuctionError::Rejected(reason.clone()));
        }
        self.next_id += 1;
        self.active.push(ActiveAuction {
            id: self.next_id,
            starting_tokens_for_sale: request.starting_tokens_for_sale.clone(),
            remaining_tokens_for_sale: request.starting_tokens_for_sale.clone(),
            funding_module_account: request.funding_module_account.clone(),
            proceeds_module_account: request.proceeds_module_account.clone(),
            start_block: ctx.height,
        });
        record(
            &self.log,
            Call::BeginAuction(request.starting_tokens_for_sale.clone()),
        );
        self.requests.push((*ctx, request.clone()));
        Ok(())
    }
}

/// A keeper wired entirely to in-memory collaborators.
pub type MemoryKeeper =
    crate::Keeper<StaticVaultRegistry, StaticTokenRegistry, InMemoryBank, InMemoryAuctionHouse>;
