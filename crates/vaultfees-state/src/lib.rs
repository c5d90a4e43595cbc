//! vaultfees-state
//!
//! Storage for the module's three records. `FeeStore` is the narrow contract
//! the keeper works against; `StateDb` is the sled backend, `MemoryStore` the
//! in-memory one, and `CachedStore` stages a block's writes so they land
//! together or not at all.

pub mod db;
pub mod store;

pub use db::StateDb;
pub use store::{CachedStore, FeeStore, MemoryStore, StoreBatch};
