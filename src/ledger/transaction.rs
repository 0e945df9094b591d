//! Transaction records and pending-transaction construction

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::*;

/// Immutable record of one applied balance-affecting event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: Uuid,
    /// What kind of event this was
    pub kind: TransactionKind,
    /// Amount moved, always positive
    pub amount: BigDecimal,
    /// Recipient, biller or phone number, where applicable
    pub counterparty: Option<Counterparty>,
    /// Account balance immediately after this transaction
    pub resulting_balance: BigDecimal,
    /// When the transaction was recorded
    pub recorded_at: NaiveDateTime,
}

impl Transaction {
    /// Balance change of this transaction, negative for debits
    pub fn signed_amount(&self) -> BigDecimal {
        match self.kind.direction() {
            Direction::Credit => self.amount.clone(),
            Direction::Debit => -self.amount.clone(),
        }
    }

    /// Balance immediately before this transaction
    pub fn previous_balance(&self) -> BigDecimal {
        &self.resulting_balance - self.signed_amount()
    }
}

/// A transaction that has been requested but not yet applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub kind: TransactionKind,
    pub amount: BigDecimal,
    pub counterparty: Option<Counterparty>,
}

impl PendingTransaction {
    /// Create a new pending transaction
    pub fn new(
        kind: TransactionKind,
        amount: BigDecimal,
        counterparty: Option<Counterparty>,
    ) -> Self {
        Self {
            kind,
            amount,
            counterparty,
        }
    }

    /// Whether the counterparty is the one this kind carries
    pub fn counterparty_matches_kind(&self) -> bool {
        matches!(
            (self.kind, &self.counterparty),
            (TransactionKind::Deposit | TransactionKind::Withdrawal, None)
                | (TransactionKind::Transfer, Some(Counterparty::Recipient { .. }))
                | (TransactionKind::BillPayment, Some(Counterparty::Biller { .. }))
                | (TransactionKind::PhoneTopUp, Some(Counterparty::Phone { .. }))
        )
    }

    /// Balance this transaction would leave behind
    pub fn resulting_balance(&self, balance: &BigDecimal) -> BigDecimal {
        self.kind.direction().apply(balance, &self.amount)
    }

    /// Seal into a recorded transaction with its resulting balance
    pub(crate) fn record(self, resulting_balance: BigDecimal) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            kind: self.kind,
            amount: self.amount,
            counterparty: self.counterparty,
            resulting_balance,
            recorded_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Constructors for each kind of pending transaction
pub mod requests {
    use super::*;

    pub fn deposit(amount: BigDecimal) -> PendingTransaction {
        PendingTransaction::new(TransactionKind::Deposit, amount, None)
    }

    pub fn withdrawal(amount: BigDecimal) -> PendingTransaction {
        PendingTransaction::new(TransactionKind::Withdrawal, amount, None)
    }

    /// Single-sided: nothing is credited to the recipient's account
    pub fn transfer(
        amount: BigDecimal,
        recipient_account: String,
        recipient_name: String,
    ) -> PendingTransaction {
        PendingTransaction::new(
            TransactionKind::Transfer,
            amount,
            Some(Counterparty::Recipient {
                account_number: recipient_account,
                name: recipient_name,
            }),
        )
    }

    pub fn bill_payment(
        bill_type: String,
        amount: BigDecimal,
        reference: String,
    ) -> PendingTransaction {
        PendingTransaction::new(
            TransactionKind::BillPayment,
            amount,
            Some(Counterparty::Biller {
                bill_type,
                reference,
            }),
        )
    }

    pub fn phone_top_up(phone_number: String, amount: BigDecimal) -> PendingTransaction {
        PendingTransaction::new(
            TransactionKind::PhoneTopUp,
            amount,
            Some(Counterparty::Phone {
                number: phone_number,
            }),
        )
    }
}
