//! Core types and data structures for the ledger

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Kinds of balance-affecting events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money paid into the account
    Deposit,
    /// Cash taken out of the account
    Withdrawal,
    /// Money sent to an external recipient
    Transfer,
    /// Payment of a utility or service bill
    BillPayment,
    /// Prepaid mobile phone top-up
    PhoneTopUp,
}

impl TransactionKind {
    /// Returns the direction this kind moves the balance in
    pub fn direction(&self) -> Direction {
        match self {
            TransactionKind::Deposit => Direction::Credit,
            TransactionKind::Withdrawal
            | TransactionKind::Transfer
            | TransactionKind::BillPayment
            | TransactionKind::PhoneTopUp => Direction::Debit,
        }
    }

    /// Whether this kind reduces the balance
    pub fn is_debit(&self) -> bool {
        self.direction() == Direction::Debit
    }
}

/// Direction of a balance movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increases the balance
    Credit,
    /// Decreases the balance
    Debit,
}

impl Direction {
    /// Apply an amount to a balance in this direction
    pub fn apply(&self, balance: &BigDecimal, amount: &BigDecimal) -> BigDecimal {
        match self {
            Direction::Credit => balance + amount,
            Direction::Debit => balance - amount,
        }
    }
}

/// The other side of a transaction, where there is one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Counterparty {
    /// Transfer recipient
    Recipient {
        account_number: String,
        name: String,
    },
    /// Biller for a bill payment; the reference is opaque
    Biller {
        bill_type: String,
        reference: String,
    },
    /// Phone number receiving a top-up
    Phone { number: String },
}

/// Read-only view of an account's identity and balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub holder_name: String,
    pub account_number: String,
    pub balance: BigDecimal,
    pub transaction_count: usize,
}

/// Errors that can occur in the ledger system
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(BigDecimal),
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: BigDecimal,
        available: BigDecimal,
    },
    #[error("Invalid top-up denomination: {0}")]
    InvalidTopUpDenomination(BigDecimal),
    #[error("Invalid initial balance: {0} (must not be negative)")]
    InvalidInitialBalance(BigDecimal),
    #[error("Counterparty does not match transaction kind {0:?}")]
    CounterpartyMismatch(TransactionKind),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
