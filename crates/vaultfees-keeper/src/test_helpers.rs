use vaultfees_core::params::ModuleConfig;
use vaultfees_core::types::{DepositEvent, EthAddress, TokenContract, VaultId};

use crate::memory::{
    InMemoryAuctionHouse, InMemoryBank, MemoryKeeper, StaticTokenRegistry, StaticVaultRegistry,
};

pub const VAULT: &str = "0x0000000000000000000000000000000000000000";
pub const FEE_TOKEN: &str = "0x1111111111111111111111111111111111111111";
pub const NATIVE_TOKEN: &str = "0x2222222222222222222222222222222222222222";
pub const FEE_DENOM: &str = "gravity0x1111111111111111111111111111111111111111";

pub fn addr(s: &str) -> EthAddress {
    EthAddress::from_hex(s).unwrap()
}

/// Keeper with one registered vault, one bridged fee token and the bridged
/// form of the native token.
pub fn keeper() -> MemoryKeeper {
    let config = ModuleConfig::default();
    let vaults = StaticVaultRegistry::new().with_vault(VaultId(addr(VAULT)));
    let tokens = StaticTokenRegistry::new()
        .with_token(TokenContract(addr(FEE_TOKEN)), false, FEE_DENOM)
        .with_token(TokenContract(addr(NATIVE_TOKEN)), true, &config.native_denom);
    MemoryKeeper::new(
        config,
        vaults,
        tokens,
        InMemoryBank::new(),
        InMemoryAuctionHouse::new(),
    )
}

pub fn deposit(sender: &str, token: &str, amount: u128) -> DepositEvent {
    DepositEvent {
        ethereum_sender: sender.to_string(),
        receiver: ModuleConfig::default().fees_account,
        token_contract: token.to_string(),
        amount,
    }
}
