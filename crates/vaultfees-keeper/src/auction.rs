use std::num::NonZeroU64;

use tracing::{debug, info, warn};
use vaultfees_core::constants::DUST_AUCTION_AMOUNT;
use vaultfees_core::error::FeesError;
use vaultfees_core::params::Params;
use vaultfees_core::types::{Amount, AuctionRequest, BlockContext, Coin};
use vaultfees_state::FeeStore;

use crate::expected::{AuctionHouse, Bank, BridgeTokenRegistry, VaultRegistry};
use crate::keeper::Keeper;

/// What the trigger did for one due denomination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuctionOutcome {
    pub denom: String,
    pub amount: Amount,
    pub counter_reset: bool,
}

/// A counter is due when it is non-zero and lands on a multiple of the
/// auction interval.
pub fn is_due(count: u64, interval: NonZeroU64) -> bool {
    count != 0 && count % interval.get() == 0
}

impl<V, T, B, A> Keeper<V, T, B, A>
where
    V: VaultRegistry,
    T: BridgeTokenRegistry,
    B: Bank,
    A: AuctionHouse,
{
    /// Request an auction for every denomination whose counter is due.
    ///
    /// Due denominations are picked from a snapshot of the counters, then
    /// handled in collection order. A counter is reset only when the
    /// auctioned balance exceeds `DUST_AUCTION_AMOUNT`; a dust auction leaves
    /// it due for the next block. The counters are written back once at the
    /// end.
    ///
    /// # Errors
    /// A rejected auction request aborts the block with
    /// `FeesError::AuctionRequest`. Nothing is written in that case.
    pub fn run_auction_trigger<S: FeeStore>(
        &mut self,
        store: &mut S,
        ctx: &BlockContext,
        params: &Params,
    ) -> Result<Vec<AuctionOutcome>, FeesError> {
        let interval = NonZeroU64::new(params.auction_interval).ok_or_else(|| {
            FeesError::InvalidParams("auction interval must be positive".into())
        })?;

        let mut counters = store.get_fee_accrual_counters()?;
        let due: Vec<String> = counters
            .iter()
            .filter(|c| is_due(c.count, interval))
            .map(|c| c.denom.clone())
            .collect();

        let mut outcomes = Vec::with_capacity(due.len());
        for denom in due {
            let fees_account = self.config.fees_account.as_str();
            let observed = self.bank.get_balance(fees_account, &denom);

            let active = self.auctions.get_active_auctions();
            debug!(
                height = ctx.height,
                denom = %denom,
                observed,
                active = active.len(),
                "fee denom due for auction"
            );

            let amount = self.bank.get_balance(fees_account, &denom);
            let request = AuctionRequest {
                starting_tokens_for_sale: Coin::new(denom.clone(), amount),
                initial_price_decrease_rate: params.initial_price_decrease_rate,
                price_decrease_block_interval: params.price_decrease_block_interval,
                funding_module_account: fees_account.to_string(),
                proceeds_module_account: fees_account.to_string(),
            };
            self.auctions
                .begin_auction(ctx, &request)
                .map_err(|e| FeesError::AuctionRequest {
                    denom: denom.clone(),
                    amount,
                    reason: e.to_string(),
                })?;

            let counter_reset = amount > DUST_AUCTION_AMOUNT;
            if counter_reset {
                counters.reset(&denom);
                info!(
                    height = ctx.height,
                    time = ctx.time,
                    denom = %denom,
                    amount,
                    "fee auction requested"
                );
            } else {
                warn!(
                    height = ctx.height,
                    denom = %denom,
                    amount,
                    "dust fee auction requested; counter stays due"
                );
            }
            outcomes.push(AuctionOutcome {
                denom,
                amount,
                counter_reset,
            });
        }

        store.set_fee_accrual_counters(&counters)?;
        Ok(outcomes)
    }
}
