//! Validation utilities

use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(LedgerError::InvalidAmount(amount.clone()))
    } else {
        Ok(())
    }
}

/// Validate that an opening balance is not negative
pub fn validate_initial_balance(balance: &BigDecimal) -> LedgerResult<()> {
    if *balance < BigDecimal::from(0) {
        Err(LedgerError::InvalidInitialBalance(balance.clone()))
    } else {
        Ok(())
    }
}

/// Validate that an amount is one of the allowed denominations
///
/// Comparison is by value, so `100.00` matches `100`.
pub fn validate_denomination(amount: &BigDecimal, allowed: &[BigDecimal]) -> LedgerResult<()> {
    if allowed.iter().any(|d| d == amount) {
        Ok(())
    } else {
        Err(LedgerError::InvalidTopUpDenomination(amount.clone()))
    }
}

/// Validate that the balance covers a debit
pub fn validate_sufficient_funds(amount: &BigDecimal, available: &BigDecimal) -> LedgerResult<()> {
    if amount > available {
        Err(LedgerError::InsufficientFunds {
            requested: amount.clone(),
            available: available.clone(),
        })
    } else {
        Ok(())
    }
}
