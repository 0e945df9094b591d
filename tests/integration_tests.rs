//! Integration tests for account-ledger

use account_ledger::{
    utils::format_amount, Account, Counterparty, LedgerConfig, LedgerError, SharedAccount,
    TransactionKind,
};
use bigdecimal::BigDecimal;
use proptest::prelude::*;

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

fn open(balance: &str) -> Account {
    Account::new(
        "Somsri Jaidee".to_string(),
        "123-4-56789-0".to_string(),
        dec(balance),
    )
    .unwrap()
}

#[test]
fn test_banking_session_scenario() {
    let mut account = open("1000.00");

    assert_eq!(account.deposit(dec("500")).unwrap(), dec("1500.00"));
    assert_eq!(account.history().len(), 1);
    assert_eq!(account.history()[0].kind, TransactionKind::Deposit);

    assert_eq!(
        account.withdraw(dec("2000")),
        Err(LedgerError::InsufficientFunds {
            requested: dec("2000"),
            available: dec("1500"),
        })
    );
    assert_eq!(account.balance(), &dec("1500.00"));

    let balance = account
        .transfer(
            dec("300"),
            "111-1-11111-1".to_string(),
            "Somchai".to_string(),
        )
        .unwrap();
    assert_eq!(balance, dec("1200.00"));
    assert_eq!(account.history().len(), 2);

    assert_eq!(
        account.topup_phone("0812345678".to_string(), dec("15")),
        Err(LedgerError::InvalidTopUpDenomination(dec("15")))
    );
    assert_eq!(account.balance(), &dec("1200.00"));

    let recent = account.recent_history(1);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].kind, TransactionKind::Transfer);
    assert_eq!(recent[0].amount, dec("300"));
    assert_eq!(
        recent[0].counterparty,
        Some(Counterparty::Recipient {
            account_number: "111-1-11111-1".to_string(),
            name: "Somchai".to_string(),
        })
    );

    assert!(account.verify_integrity().is_valid);
    assert_eq!(format_amount(account.balance()), "1,200.00");
}

#[test]
fn test_rejections_are_idempotent() {
    let mut once = open("100");
    let mut many = open("100");
    once.deposit(dec("5")).unwrap();
    many.deposit(dec("5")).unwrap();

    assert!(matches!(
        once.withdraw(dec("1000")),
        Err(LedgerError::InsufficientFunds { .. })
    ));
    for _ in 0..25 {
        assert_eq!(
            many.withdraw(dec("1000")),
            Err(LedgerError::InsufficientFunds {
                requested: dec("1000"),
                available: dec("105"),
            })
        );
        assert_eq!(
            many.pay_bill("Internet".to_string(), dec("0"), "NET-1".to_string()),
            Err(LedgerError::InvalidAmount(dec("0")))
        );
        assert_eq!(
            many.topup_phone("0811111111".to_string(), dec("99")),
            Err(LedgerError::InvalidTopUpDenomination(dec("99")))
        );
    }

    assert_eq!(once.balance(), many.balance());
    assert_eq!(once.history().len(), many.history().len());
    assert_eq!(
        once.history()[0].resulting_balance,
        many.history()[0].resulting_balance
    );
}

#[test]
fn test_account_from_toml_config() {
    let config = LedgerConfig::from_toml_str(
        r#"
        topup_denominations = [100, 200]
        default_history_limit = 2
        "#,
    )
    .unwrap();

    let mut account = Account::with_config(
        "Malee".to_string(),
        "222-2-22222-2".to_string(),
        dec("1000"),
        config,
    )
    .unwrap();

    account
        .topup_phone("0823456789".to_string(), dec("200"))
        .unwrap();
    assert!(account
        .topup_phone("0823456789".to_string(), dec("500"))
        .is_err());

    account.deposit(dec("1")).unwrap();
    account.deposit(dec("2")).unwrap();

    let recent = account.recent_history_default();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].amount, dec("2"));
    assert_eq!(recent[1].amount, dec("1"));
}

#[test]
fn test_summary_serializes() {
    let mut account = open("10");
    account.deposit(dec("0.25")).unwrap();

    let json = serde_json::to_value(account.summary()).unwrap();
    assert_eq!(json["holder_name"], "Somsri Jaidee");
    assert_eq!(json["transaction_count"], 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_account_across_tasks() {
    let account = SharedAccount::new(open("500"));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let account = account.clone();
        tasks.push(tokio::spawn(async move {
            if i % 2 == 0 {
                account.deposit(dec("10")).map(|_| ())
            } else {
                account
                    .pay_bill("Water".to_string(), dec("40"), format!("W-{i}"))
                    .map(|_| ())
            }
        }));
    }

    for task in tasks {
        let _ = task.await.unwrap();
    }

    let snapshot = account.snapshot();
    let report = snapshot.verify_integrity();
    assert!(report.is_valid, "{:?}", report.issues);
    assert!(snapshot.balance() >= &dec("0"));
    // 10 deposits of 10 and 10 bills of 40 against 500 all fit
    assert_eq!(snapshot.balance(), &dec("200"));
    assert_eq!(snapshot.history().len(), 20);
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(i64),
    Withdraw(i64),
    Transfer(i64),
    PayBill(i64),
    TopUp(i64),
}

fn cents(minor: i64) -> BigDecimal {
    BigDecimal::new(minor.into(), 2)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-500i64..100_000).prop_map(Op::Deposit),
        (-500i64..100_000).prop_map(Op::Withdraw),
        (-500i64..100_000).prop_map(Op::Transfer),
        (-500i64..100_000).prop_map(Op::PayBill),
        prop::sample::select(vec![1000i64, 1500, 2000, 5000, 10_000, 30_000, 50_000, 7])
            .prop_map(Op::TopUp),
    ]
}

fn run(account: &mut Account, op: &Op) -> Result<BigDecimal, LedgerError> {
    match op {
        Op::Deposit(m) => account.deposit(cents(*m)),
        Op::Withdraw(m) => account.withdraw(cents(*m)),
        Op::Transfer(m) => account.transfer(cents(*m), "9".to_string(), "Z".to_string()),
        Op::PayBill(m) => account.pay_bill("Gas".to_string(), cents(*m), "G".to_string()),
        Op::TopUp(m) => account.topup_phone("0800000000".to_string(), cents(*m)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: balance stays non-negative, history grows by one per success,
    /// and every record matches the balance it left behind.
    #[test]
    fn invariants_hold_for_any_operation_sequence(
        opening in 0i64..200_000,
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let mut account = Account::new("P".to_string(), "0".to_string(), cents(opening)).unwrap();
        let zero = BigDecimal::from(0);

        for op in &ops {
            let before_balance = account.balance().clone();
            let before_len = account.history().len();

            match run(&mut account, op) {
                Ok(new_balance) => {
                    prop_assert_eq!(account.history().len(), before_len + 1);
                    prop_assert_eq!(&new_balance, account.balance());
                    let last = account.history().last().unwrap();
                    prop_assert_eq!(&last.resulting_balance, account.balance());
                }
                Err(_) => {
                    prop_assert_eq!(account.history().len(), before_len);
                    prop_assert_eq!(account.balance(), &before_balance);
                }
            }
            prop_assert!(account.balance() >= &zero);
        }

        let report = account.verify_integrity();
        prop_assert!(report.is_valid, "{:?}", report.issues);
    }

    /// Property: depositing a positive amount raises the balance by exactly that amount.
    #[test]
    fn deposit_adds_exact_amount(opening in 0i64..1_000_000, minor in 1i64..1_000_000) {
        let mut account = Account::new("P".to_string(), "0".to_string(), cents(opening)).unwrap();
        let balance = account.deposit(cents(minor)).unwrap();
        prop_assert_eq!(balance, cents(opening + minor));
        prop_assert_eq!(account.history().len(), 1);
    }

    /// Property: debits larger than the balance are rejected without a trace.
    #[test]
    fn overdrafts_are_rejected(opening in 0i64..100_000, excess in 1i64..100_000) {
        let mut account = Account::new("P".to_string(), "0".to_string(), cents(opening)).unwrap();
        let amount = cents(opening + excess);

        let is_insufficient = |r: Result<BigDecimal, LedgerError>| {
            matches!(r, Err(LedgerError::InsufficientFunds { .. }))
        };
        prop_assert!(is_insufficient(account.withdraw(amount.clone())));
        let transfer = account.transfer(amount.clone(), "1".to_string(), "B".to_string());
        prop_assert!(is_insufficient(transfer));
        let bill = account.pay_bill("Water".to_string(), amount, "R".to_string());
        prop_assert!(is_insufficient(bill));
        prop_assert_eq!(account.balance(), &cents(opening));
        prop_assert!(account.history().is_empty());
    }

    /// Property: recent_history(k) is the last k records, newest first.
    #[test]
    fn recent_history_is_reverse_tail(count in 0usize..30, k in 0usize..40) {
        let mut account =
            Account::new("P".to_string(), "0".to_string(), BigDecimal::from(0)).unwrap();
        for i in 1..=count {
            account.deposit(BigDecimal::from(i as u64)).unwrap();
        }

        let recent = account.recent_history(k);
        prop_assert_eq!(recent.len(), k.min(count));
        for (offset, txn) in recent.iter().enumerate() {
            prop_assert_eq!(&txn.amount, &BigDecimal::from((count - offset) as u64));
        }
    }
}
