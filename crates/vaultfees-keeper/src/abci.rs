use tracing::debug;
use vaultfees_core::error::FeesError;
use vaultfees_core::types::{Amount, BlockContext};
use vaultfees_state::{CachedStore, FeeStore};

use crate::auction::AuctionOutcome;
use crate::expected::{AuctionHouse, Bank, BridgeTokenRegistry, VaultRegistry};
use crate::keeper::Keeper;

/// Summary of one `begin_block`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockReport {
    pub emitted: Option<Amount>,
    pub auctions: Vec<AuctionOutcome>,
}

impl<V, T, B, A> Keeper<V, T, B, A>
where
    V: VaultRegistry,
    T: BridgeTokenRegistry,
    B: Bank,
    A: AuctionHouse,
{
    /// Run reward emission, then the auction trigger.
    ///
    /// Module writes are staged and committed only if both steps succeed, so
    /// a failed block leaves the peak and counters exactly as they were.
    pub fn begin_block<S: FeeStore>(
        &mut self,
        store: &mut S,
        ctx: &BlockContext,
    ) -> Result<BlockReport, FeesError> {
        let mut cache = CachedStore::new(store);

        let params = cache.get_params()?;
        params.validate()?;

        let emitted = self.run_emission(&mut cache, ctx, &params)?;
        let auctions = self.run_auction_trigger(&mut cache, ctx, &params)?;

        cache.commit()?;
        debug!(
            height = ctx.height,
            time = ctx.time,
            ?emitted,
            auctions = auctions.len(),
            "begin block done"
        );
        Ok(BlockReport { emitted, auctions })
    }

    /// Reserved; does nothing.
    pub fn end_block<S: FeeStore>(
        &mut self,
        _store: &mut S,
        _ctx: &BlockContext,
    ) -> Result<(), FeesError> {
        Ok(())
    }
}
