//! # Account Ledger
//!
//! A single-account ledger that owns an exact decimal balance, applies
//! guarded mutations and keeps an append-only transaction log.
//!
//! ## Features
//!
//! - **Guarded mutations**: deposit, withdrawal, transfer, bill payment and phone top-up,
//!   each validated before any state change
//! - **Exact money**: balances and amounts are `BigDecimal`, never binary floating point
//! - **Audit log**: every successful mutation appends exactly one immutable transaction
//!   carrying the resulting balance
//! - **Integrity checks**: the log can be replayed from the opening balance
//! - **Shared access**: [`SharedAccount`] serializes mutations behind a single lock
//!
//! ## Quick Start
//!
//! ```rust
//! use account_ledger::{Account, LedgerError};
//! use bigdecimal::BigDecimal;
//!
//! let mut account = Account::new(
//!     "Somsri".to_string(),
//!     "123-4-56789-0".to_string(),
//!     BigDecimal::from(1000),
//! )
//! .unwrap();
//!
//! account.deposit(BigDecimal::from(500)).unwrap();
//! assert_eq!(account.balance(), &BigDecimal::from(1500));
//!
//! let err = account.withdraw(BigDecimal::from(2000)).unwrap_err();
//! assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
//! ```

pub mod config;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;
