//! Thread-safe handle over a single account

use bigdecimal::BigDecimal;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ledger::account::Account;
use crate::ledger::audit::IntegrityReport;
use crate::ledger::transaction::{PendingTransaction, Transaction};
use crate::types::*;

/// Cloneable handle that serializes all mutations on one account
///
/// Each mutation holds the write lock for its whole check-then-act sequence;
/// reads take the read lock, so no caller sees a balance without its matching
/// history entry.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    inner: Arc<RwLock<Account>>,
}

impl SharedAccount {
    /// Wrap an account for shared use
    pub fn new(account: Account) -> Self {
        Self {
            inner: Arc::new(RwLock::new(account)),
        }
    }

    // Mutations never leave the account half-applied, so a poisoned lock
    // still guards a consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Account> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Account> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn deposit(&self, amount: BigDecimal) -> LedgerResult<BigDecimal> {
        self.write().deposit(amount)
    }

    pub fn withdraw(&self, amount: BigDecimal) -> LedgerResult<BigDecimal> {
        self.write().withdraw(amount)
    }

    pub fn transfer(
        &self,
        amount: BigDecimal,
        recipient_account: String,
        recipient_name: String,
    ) -> LedgerResult<BigDecimal> {
        self.write().transfer(amount, recipient_account, recipient_name)
    }

    pub fn pay_bill(
        &self,
        bill_type: String,
        amount: BigDecimal,
        ref_number: String,
    ) -> LedgerResult<BigDecimal> {
        self.write().pay_bill(bill_type, amount, ref_number)
    }

    pub fn topup_phone(
        &self,
        phone_number: String,
        amount: BigDecimal,
    ) -> LedgerResult<BigDecimal> {
        self.write().topup_phone(phone_number, amount)
    }

    pub fn apply(&self, pending: PendingTransaction) -> LedgerResult<BigDecimal> {
        self.write().apply(pending)
    }

    pub fn balance(&self) -> BigDecimal {
        self.read().balance().clone()
    }

    pub fn recent_history(&self, limit: usize) -> Vec<Transaction> {
        self.read().recent_history(limit)
    }

    pub fn summary(&self) -> AccountSummary {
        self.read().summary()
    }

    pub fn verify_integrity(&self) -> IntegrityReport {
        self.read().verify_integrity()
    }

    /// Consistent copy of the whole account
    pub fn snapshot(&self) -> Account {
        self.read().clone()
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
