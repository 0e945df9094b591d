//! Replaying the transaction log against the opening balance

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::ledger::account::Account;
use crate::ledger::transaction::Transaction;

/// Report on ledger integrity and validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub opening_balance: BigDecimal,
    pub replayed_balance: BigDecimal,
    pub current_balance: BigDecimal,
    pub transaction_count: usize,
}

/// Fold a history over an opening balance
pub fn replay(opening_balance: &BigDecimal, history: &[Transaction]) -> BigDecimal {
    history
        .iter()
        .fold(opening_balance.clone(), |balance, txn| {
            txn.kind.direction().apply(&balance, &txn.amount)
        })
}

impl Account {
    /// Replay the history and check it reproduces the current balance
    pub fn verify_integrity(&self) -> IntegrityReport {
        let zero = BigDecimal::from(0);
        let mut issues = Vec::new();
        let mut running = self.opening_balance().clone();

        for (index, txn) in self.history().iter().enumerate() {
            if txn.amount <= zero {
                issues.push(format!(
                    "Transaction {} ({}) has non-positive amount {}",
                    index, txn.id, txn.amount
                ));
            }

            running = txn.kind.direction().apply(&running, &txn.amount);

            if running != txn.resulting_balance {
                issues.push(format!(
                    "Transaction {} ({}) records balance {} but replay gives {}",
                    index, txn.id, txn.resulting_balance, running
                ));
                // Continue from the recorded value so one break is reported once
                running = txn.resulting_balance.clone();
            }

            if running < zero {
                issues.push(format!(
                    "Transaction {} ({}) leaves a negative balance {}",
                    index, txn.id, running
                ));
            }
        }

        let replayed_balance = replay(self.opening_balance(), self.history());
        if &replayed_balance != self.balance() {
            issues.push(format!(
                "Replayed balance {} does not match current balance {}",
                replayed_balance,
                self.balance()
            ));
        }

        IntegrityReport {
            is_valid: issues.is_empty(),
            issues,
            opening_balance: self.opening_balance().clone(),
            replayed_balance,
            current_balance: self.balance().clone(),
            transaction_count: self.history().len(),
        }
    }
}
