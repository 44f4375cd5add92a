//! Transaction display formatting
//!
//! Renders transactions as markdown-style tables for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

/// Placeholder printed instead of an empty table
pub const EMPTY_TABLE: &str = "(none)";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.value(),
            timestamp: txn.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            amount: txn.amount.to_string(),
            category: txn.category.clone(),
            kind: txn.kind.to_string(),
            note: txn.note.clone(),
        }
    }
}

/// Format transactions as a table, or `(none)` when there are none
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let mut table = Table::new(transactions.iter().map(TransactionRow::from));
    table.with(Style::markdown());
    table.to_string()
}

/// Confirmation line printed after a transaction is recorded
pub fn format_transaction_created(txn: &Transaction) -> String {
    format!(
        "Added {} #{} {} in {}",
        txn.kind, txn.id, txn.amount, txn.category
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn sample(note: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(1),
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            amount: Money::from_cents(5000),
            category: "Test Store".into(),
            kind: TransactionKind::Expense,
            note: note.into(),
        }
    }

    #[test]
    fn test_format_table() {
        let formatted = format_transaction_table(&[sample("Lunch")]);
        let header = formatted.lines().next().unwrap();
        for column in ["ID", "Timestamp", "Amount", "Category", "Type", "Note"] {
            assert!(header.contains(column), "missing {} in {}", column, header);
        }
        assert!(formatted.contains("2025-01-15T09:30:00"));
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("Test Store"));
        assert!(formatted.contains("expense"));
        assert!(formatted.contains("Lunch"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_transaction_table(&[]), "(none)");
    }

    #[test]
    fn test_format_created() {
        assert_eq!(
            format_transaction_created(&sample("")),
            "Added expense #1 $50.00 in Test Store"
        );
    }
}
