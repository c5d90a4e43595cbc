use tracing::{debug, info};
use vaultfees_core::error::FeesError;
use vaultfees_core::types::{DepositEvent, EthAddress, TokenContract, VaultId};
use vaultfees_state::FeeStore;

use crate::expected::{AuctionHouse, Bank, BridgeTokenRegistry, VaultRegistry};
use crate::keeper::Keeper;

impl<V, T, B, A> Keeper<V, T, B, A>
where
    V: VaultRegistry,
    T: BridgeTokenRegistry,
    B: Bank,
    A: AuctionHouse,
{
    /// Called by the bridge for every finalized inbound deposit.
    ///
    /// Counts the deposit toward its denomination's auction cadence when it
    /// is a non-native fee payment from a registered vault into the fee
    /// account. Anything else is ignored. Returns the new count if the
    /// deposit was counted.
    ///
    /// # Errors
    /// Only storage failures. A deposit that fails a lookup is not an error.
    pub fn on_deposit<S: FeeStore>(
        &self,
        store: &mut S,
        event: &DepositEvent,
    ) -> Result<Option<u64>, FeesError> {
        let Ok(sender) = EthAddress::from_hex(&event.ethereum_sender) else {
            debug!(sender = %event.ethereum_sender, "deposit sender is not an address; ignoring");
            return Ok(None);
        };
        let vault_id = VaultId(sender);

        if event.receiver != self.config.fees_account {
            debug!(receiver = %event.receiver, "deposit not addressed to fee account; ignoring");
            return Ok(None);
        }

        if !self.vaults.has_vault(&vault_id) {
            debug!(vault = %vault_id, "deposit not from a registered vault; ignoring");
            return Ok(None);
        }

        let Ok(contract) = EthAddress::from_hex(&event.token_contract) else {
            debug!(token = %event.token_contract, "deposit token is not an address; ignoring");
            return Ok(None);
        };
        let Some((is_native, denom)) = self.tokens.resolve_denom(&TokenContract(contract)) else {
            debug!(token = %contract, "deposit token has no bridged denom; ignoring");
            return Ok(None);
        };
        if is_native {
            debug!(denom = %denom, "native deposit; left to emission");
            return Ok(None);
        }

        let mut counters = store.get_fee_accrual_counters()?;
        let count = counters.increment(&denom);
        store.set_fee_accrual_counters(&counters)?;

        info!(vault = %vault_id, denom = %denom, amount = event.amount, count, "fee deposit counted");
        Ok(Some(count))
    }
}
