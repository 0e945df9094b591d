//! Basic account usage example

use account_ledger::utils::format_amount;
use account_ledger::{Account, Counterparty, TransactionKind};
use bigdecimal::BigDecimal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    println!("🏦 Account Ledger - Basic Account Example\n");

    let mut account = Account::new(
        "Somsri Jaidee".to_string(),
        "123-4-56789-0".to_string(),
        "1000.00".parse()?,
    )?;
    println!(
        "  ✓ Opened account {} ({}) with ฿{}\n",
        account.holder_name(),
        account.account_number(),
        format_amount(account.balance())
    );

    println!("💰 Recording Transactions...\n");

    let balance = account.deposit(BigDecimal::from(500))?;
    println!("  ✓ Deposit ฿500.00, balance ฿{}", format_amount(&balance));

    match account.withdraw(BigDecimal::from(2000)) {
        Ok(balance) => println!("  ✓ Withdrawal, balance ฿{}", format_amount(&balance)),
        Err(e) => println!("  ✗ Withdrawal of ฿2,000.00 rejected: {e}"),
    }

    let balance = account.transfer(
        BigDecimal::from(300),
        "111-1-11111-1".to_string(),
        "Somchai".to_string(),
    )?;
    println!("  ✓ Transfer ฿300.00 to Somchai, balance ฿{}", format_amount(&balance));

    let balance = account.pay_bill(
        "Electricity".to_string(),
        "812.34".parse()?,
        "EL-2024-01".to_string(),
    )?;
    println!("  ✓ Electricity bill ฿812.34, balance ฿{}", format_amount(&balance));

    match account.topup_phone("0812345678".to_string(), BigDecimal::from(15)) {
        Ok(balance) => println!("  ✓ Top-up, balance ฿{}", format_amount(&balance)),
        Err(e) => println!("  ✗ Top-up of ฿15.00 rejected: {e}"),
    }

    let balance = account.topup_phone("0812345678".to_string(), BigDecimal::from(100))?;
    println!("  ✓ Top-up ฿100.00, balance ฿{}", format_amount(&balance));

    println!("\n📜 Recent Transactions (newest first)...\n");
    for (i, txn) in account.recent_history_default().iter().enumerate() {
        let sign = if txn.kind.is_debit() { "-" } else { "+" };
        let detail = match (&txn.kind, &txn.counterparty) {
            (TransactionKind::Transfer, Some(Counterparty::Recipient { name, .. })) => {
                format!(" to {name}")
            }
            (TransactionKind::BillPayment, Some(Counterparty::Biller { bill_type, reference })) => {
                format!(" {bill_type} (ref {reference})")
            }
            (TransactionKind::PhoneTopUp, Some(Counterparty::Phone { number })) => {
                format!(" {number}")
            }
            _ => String::new(),
        };
        println!(
            "  {}. {:?}{} {}฿{} → ฿{}",
            i + 1,
            txn.kind,
            detail,
            sign,
            format_amount(&txn.amount),
            format_amount(&txn.resulting_balance)
        );
    }

    println!("\n🔍 Validating Ledger Integrity...\n");
    let report = account.verify_integrity();
    if report.is_valid {
        println!("  ✓ History replays to ฿{}", format_amount(&report.replayed_balance));
    } else {
        for issue in &report.issues {
            println!("  ✗ {issue}");
        }
    }

    let summary = account.summary();
    println!(
        "\n✅ {} ({}): ฿{} after {} transactions",
        summary.holder_name,
        summary.account_number,
        format_amount(&summary.balance),
        summary.transaction_count
    );

    Ok(())
}
