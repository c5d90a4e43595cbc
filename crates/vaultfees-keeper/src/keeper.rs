use vaultfees_core::params::ModuleConfig;

use crate::expected::{AuctionHouse, Bank, BridgeTokenRegistry, VaultRegistry};

/// The fee module keeper.
///
/// Owns handles to its collaborators and the static module wiring. Module
/// state is not held here: every entry point takes the store explicitly.
pub struct Keeper<V, T, B, A> {
    pub(crate) config: ModuleConfig,
    pub(crate) vaults: V,
    pub(crate) tokens: T,
    pub(crate) bank: B,
    pub(crate) auctions: A,
}

impl<V, T, B, A> Keeper<V, T, B, A>
where
    V: VaultRegistry,
    T: BridgeTokenRegistry,
    B: Bank,
    A: AuctionHouse,
{
    pub fn new(config: ModuleConfig, vaults: V, tokens: T, bank: B, auctions: A) -> Self {
        Self {
            config,
            vaults,
            tokens,
            bank,
            auctions,
        }
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    pub fn auctions(&self) -> &A {
        &self.auctions
    }

    pub fn auctions_mut(&mut self) -> &mut A {
        &mut self.auctions
    }
}
