//! Traits for pluggable validation rules

use bigdecimal::BigDecimal;

use crate::config::LedgerConfig;
use crate::ledger::PendingTransaction;
use crate::types::*;
use crate::utils::validation::*;

/// Trait for implementing custom transaction validation rules
///
/// Validators judge the shape of a pending transaction (amount rules). The
/// funds check is always done by the account itself, so a validator cannot
/// let the balance go negative.
pub trait TransactionValidator: Send + Sync {
    /// Validate a transaction before it is applied
    fn validate_transaction(&self, pending: &PendingTransaction) -> LedgerResult<()>;
}

/// Default validator: positive amounts, fixed top-up denominations
#[derive(Debug, Clone)]
pub struct DefaultTransactionValidator {
    denominations: Vec<BigDecimal>,
}

impl DefaultTransactionValidator {
    /// Create a validator from a ledger configuration
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self {
            denominations: config.denominations(),
        }
    }
}

impl Default for DefaultTransactionValidator {
    fn default() -> Self {
        Self::from_config(&LedgerConfig::default())
    }
}

impl TransactionValidator for DefaultTransactionValidator {
    fn validate_transaction(&self, pending: &PendingTransaction) -> LedgerResult<()> {
        match pending.kind {
            // Top-ups are checked against the denomination set only; a
            // non-positive amount is never a denomination.
            TransactionKind::PhoneTopUp => {
                validate_denomination(&pending.amount, &self.denominations)
            }
            _ => validate_positive_amount(&pending.amount),
        }
    }
}
