//! The account aggregate and its guarded mutations

use bigdecimal::BigDecimal;
use std::fmt;
use std::sync::Arc;

use crate::config::LedgerConfig;
use crate::ledger::transaction::{requests, PendingTransaction, Transaction};
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::*;

/// A single account: identity, balance and its append-only history
///
/// Every mutating operation validates first and then performs exactly one
/// balance update and one history append. A rejected operation leaves the
/// account untouched.
#[derive(Clone)]
pub struct Account {
    holder_name: String,
    account_number: String,
    opening_balance: BigDecimal,
    balance: BigDecimal,
    history: Vec<Transaction>,
    config: LedgerConfig,
    validator: Arc<dyn TransactionValidator>,
}

impl Account {
    /// Open an account with the default configuration
    pub fn new(
        holder_name: String,
        account_number: String,
        initial_balance: BigDecimal,
    ) -> LedgerResult<Self> {
        Self::with_config(
            holder_name,
            account_number,
            initial_balance,
            LedgerConfig::default(),
        )
    }

    /// Open an account with a custom configuration
    pub fn with_config(
        holder_name: String,
        account_number: String,
        initial_balance: BigDecimal,
        config: LedgerConfig,
    ) -> LedgerResult<Self> {
        config.validate()?;
        let validator = Arc::new(DefaultTransactionValidator::from_config(&config));
        Self::open(holder_name, account_number, initial_balance, config, validator)
    }

    /// Open an account with a custom transaction validator
    ///
    /// The validator replaces the config's top-up rules; `config` still
    /// drives `recent_history_default`.
    pub fn with_validator(
        holder_name: String,
        account_number: String,
        initial_balance: BigDecimal,
        config: LedgerConfig,
        validator: Arc<dyn TransactionValidator>,
    ) -> LedgerResult<Self> {
        config.validate()?;
        Self::open(holder_name, account_number, initial_balance, config, validator)
    }

    fn open(
        holder_name: String,
        account_number: String,
        initial_balance: BigDecimal,
        config: LedgerConfig,
        validator: Arc<dyn TransactionValidator>,
    ) -> LedgerResult<Self> {
        validate_initial_balance(&initial_balance)?;

        tracing::info!(
            account_number = %account_number,
            opening_balance = %initial_balance,
            "account opened"
        );

        Ok(Self {
            holder_name,
            account_number,
            opening_balance: initial_balance.clone(),
            balance: initial_balance,
            history: Vec::new(),
            config,
            validator,
        })
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Current balance
    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// Balance the account was opened with
    pub fn opening_balance(&self) -> &BigDecimal {
        &self.opening_balance
    }

    /// Full history in chronological order
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Pay money into the account
    pub fn deposit(&mut self, amount: BigDecimal) -> LedgerResult<BigDecimal> {
        self.apply(requests::deposit(amount))
    }

    /// Take money out of the account
    pub fn withdraw(&mut self, amount: BigDecimal) -> LedgerResult<BigDecimal> {
        self.apply(requests::withdrawal(amount))
    }

    /// Send money to an external recipient
    ///
    /// Only this account is debited; the recipient's account is not modeled.
    pub fn transfer(
        &mut self,
        amount: BigDecimal,
        recipient_account: String,
        recipient_name: String,
    ) -> LedgerResult<BigDecimal> {
        self.apply(requests::transfer(amount, recipient_account, recipient_name))
    }

    /// Pay a bill; the reference number is recorded as given
    pub fn pay_bill(
        &mut self,
        bill_type: String,
        amount: BigDecimal,
        ref_number: String,
    ) -> LedgerResult<BigDecimal> {
        self.apply(requests::bill_payment(bill_type, amount, ref_number))
    }

    /// Top up a phone with one of the configured denominations
    pub fn topup_phone(
        &mut self,
        phone_number: String,
        amount: BigDecimal,
    ) -> LedgerResult<BigDecimal> {
        self.apply(requests::phone_top_up(phone_number, amount))
    }

    /// Apply a pending transaction, returning the new balance
    pub fn apply(&mut self, pending: PendingTransaction) -> LedgerResult<BigDecimal> {
        if let Err(err) = self.check(&pending) {
            tracing::warn!(
                account_number = %self.account_number,
                kind = ?pending.kind,
                amount = %pending.amount,
                error = %err,
                "transaction rejected"
            );
            return Err(err);
        }

        let new_balance = pending.resulting_balance(&self.balance);
        let kind = pending.kind;
        let transaction = pending.record(new_balance.clone());

        self.history.push(transaction);
        self.balance = new_balance.clone();

        tracing::debug!(
            account_number = %self.account_number,
            kind = ?kind,
            balance = %self.balance,
            history_len = self.history.len(),
            "transaction applied"
        );

        Ok(new_balance)
    }

    fn check(&self, pending: &PendingTransaction) -> LedgerResult<()> {
        if !pending.counterparty_matches_kind() {
            return Err(LedgerError::CounterpartyMismatch(pending.kind));
        }

        self.validator.validate_transaction(pending)?;

        // Enforced here regardless of the validator so the balance stays non-negative
        validate_positive_amount(&pending.amount)?;
        if pending.kind.is_debit() {
            validate_sufficient_funds(&pending.amount, &self.balance)?;
        }

        Ok(())
    }

    /// Up to `limit` most recent transactions, newest first
    pub fn recent_history(&self, limit: usize) -> Vec<Transaction> {
        self.history.iter().rev().take(limit).cloned().collect()
    }

    /// Recent transactions using the configured default limit
    pub fn recent_history_default(&self) -> Vec<Transaction> {
        self.recent_history(self.config.default_history_limit)
    }

    /// Identity, balance and transaction count
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            holder_name: self.holder_name.clone(),
            account_number: self.account_number.clone(),
            balance: self.balance.clone(),
            transaction_count: self.history.len(),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("holder_name", &self.holder_name)
            .field("account_number", &self.account_number)
            .field("opening_balance", &self.opening_balance)
            .field("balance", &self.balance)
            .field("history", &self.history)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
