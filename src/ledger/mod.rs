//! Ledger module containing the account aggregate and its transaction log

pub mod account;
pub mod audit;
pub mod shared;
pub mod transaction;

pub use account::*;
pub use audit::*;
pub use shared::*;
pub use transaction::*;
