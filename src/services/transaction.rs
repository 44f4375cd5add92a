//! Transaction service
//!
//! Provides business logic for recording and listing transactions. Every
//! call reloads the data file, so the service holds no state of its own.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MoneyParseError, Transaction, TransactionId, TransactionKind};
use crate::storage::TransactionRepository;

/// Service for transaction management
pub struct TransactionService<'a> {
    repo: &'a TransactionRepository,
}

/// Input for creating a new transaction
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub category: String,
    pub kind: TransactionKind,
    pub note: String,
}

impl CreateTransactionInput {
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        kind: TransactionKind,
        note: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            kind,
            note: note.into(),
        }
    }

    /// Build an input from raw text, as typed at a prompt or on the command line
    pub fn parse(amount: &str, category: &str, kind: &str, note: &str) -> LedgerResult<Self> {
        let parsed_amount = Money::parse(amount).map_err(|e| match e {
            MoneyParseError::InvalidFormat(raw) => LedgerError::Validation(format!(
                "amount must be numeric (got '{}'). Use a format like '12.50'",
                raw
            )),
            MoneyParseError::TooPrecise(_) => LedgerError::Validation(e.to_string()),
        })?;

        if category.trim().is_empty() {
            return Err(LedgerError::validation("category must be a non-empty string"));
        }

        let kind = kind
            .parse::<TransactionKind>()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        Ok(Self::new(parsed_amount, category, kind, note))
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(repo: &'a TransactionRepository) -> Self {
        Self { repo }
    }

    /// Validate and append a transaction, returning the stored record
    ///
    /// The id is one more than the largest id already in the file. Nothing is
    /// written when validation fails.
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let mut txn = Transaction::new(
            TransactionId::FIRST,
            input.amount,
            input.category,
            input.kind,
            input.note,
        );
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut transactions = self.repo.load();
        txn.id = TransactionId::next_after(transactions.iter().map(|t| t.id)).ok_or_else(|| {
            LedgerError::Storage("no transaction ids left in this data file".into())
        })?;

        transactions.push(txn.clone());
        self.repo.save(&transactions)?;

        tracing::info!(
            id = %txn.id,
            kind = %txn.kind,
            amount = %txn.amount,
            category = %txn.category,
            "recorded transaction"
        );

        Ok(txn)
    }

    /// List transactions in insertion order
    ///
    /// With `Some(n)` only the last `n` entries are returned, still oldest
    /// first. `Some(0)` returns nothing.
    pub fn list(&self, limit: Option<usize>) -> Vec<Transaction> {
        let mut transactions = self.repo.load();

        if let Some(limit) = limit {
            let skip = transactions.len().saturating_sub(limit);
            transactions.drain(..skip);
        }

        transactions
    }

    /// All transactions of one kind, in insertion order
    pub fn list_by_kind(&self, kind: TransactionKind) -> Vec<Transaction> {
        filter_by_kind(&self.repo.load(), kind)
    }
}

/// Transactions of one kind, keeping their order
pub(crate) fn filter_by_kind(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("data.json"));
        (temp_dir, repo)
    }

    fn add(service: &TransactionService, amount: &str, category: &str, kind: &str) -> Transaction {
        let input = CreateTransactionInput::parse(amount, category, kind, "").unwrap();
        service.create(input).unwrap()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let (_temp_dir, repo) = setup();
        let service = TransactionService::new(&repo);

        for expected in 1..=5u64 {
            let txn = add(&service, "10", "Food", "expense");
            assert_eq!(txn.id, TransactionId::new(expected));
        }
        assert_eq!(repo.load().len(), 5);
    }

    #[test]
    fn test_create_continues_after_max_id() {
        let (_temp_dir, repo) = setup();
        fs::write(
            repo.path(),
            r#"{"transactions": [
                {"id": 7, "timestamp": "2025-01-01T00:00:00", "amount": 1,
                 "category": "Old", "type": "income", "note": ""},
                {"id": 2, "timestamp": "2025-01-02T00:00:00", "amount": 1,
                 "category": "Old", "type": "expense", "note": ""}
            ]}"#,
        )
        .unwrap();
        let service = TransactionService::new(&repo);

        let txn = add(&service, "5", "New", "income");
        assert_eq!(txn.id, TransactionId::new(8));
    }

    #[test]
    fn test_create_stores_fields() {
        let (_temp_dir, repo) = setup();
        let service = TransactionService::new(&repo);

        let input = CreateTransactionInput::parse("50", " Food ", "expense", "Lunch").unwrap();
        let txn = service.create(input).unwrap();

        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.note, "Lunch");
        assert_eq!(repo.load(), vec![txn]);
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        let cases = [
            ("abc", "Food", "expense"),
            ("", "Food", "expense"),
            ("-5", "Food", "expense"),
            ("10", "", "expense"),
            ("10", "   ", "expense"),
            ("10", "Food", "invalid"),
        ];

        for (amount, category, kind) in cases {
            let result = CreateTransactionInput::parse(amount, category, kind, "")
                .and_then(|input| {
                    let (_temp_dir, repo) = setup();
                    TransactionService::new(&repo).create(input)
                });
            let err = result.unwrap_err();
            assert!(err.is_validation(), "{:?} gave {:?}", (amount, category, kind), err);
        }
    }

    #[test]
    fn test_create_keeps_extra_decimals() {
        let (_temp_dir, repo) = setup();
        let service = TransactionService::new(&repo);

        let txn = add(&service, "12.345", "Books", "expense");
        assert_eq!(txn.amount, Money::parse("12.345").unwrap());
        let tiny = add(&service, "0.009", "Fees", "expense");
        assert!(!tiny.amount.is_zero());

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(raw["transactions"][0]["amount"], 12.345);
        assert_eq!(raw["transactions"][1]["amount"], 0.009);
    }

    #[test]
    fn test_create_leaves_earlier_records_untouched() {
        let (_temp_dir, repo) = setup();
        fs::write(
            repo.path(),
            r#"{"transactions": [
                {"id": 1, "timestamp": "2025-01-01T08:00:00", "amount": 0.125,
                 "category": "Odd", "type": "expense", "note": "third of a cent"},
                {"id": 2, "timestamp": "2025-01-02T08:00:00", "amount": 1000,
                 "category": "Salary", "type": "income", "note": ""},
                {"id": 3, "timestamp": "2025-01-03T08:00:00", "amount": 1000.0,
                 "category": "Bonus", "type": "income", "note": ""}
            ]}"#,
        )
        .unwrap();
        let before: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();

        add(&TransactionService::new(&repo), "1", "New", "income");

        let after: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        let after = after["transactions"].as_array().unwrap();
        assert_eq!(after.len(), 4);
        assert_eq!(after[..3], before["transactions"].as_array().unwrap()[..]);
        assert_eq!(after[0]["amount"].to_string(), "0.125");
        assert_eq!(after[1]["amount"].to_string(), "1000");
        assert_eq!(after[2]["amount"].to_string(), "1000.0");
    }

    #[test]
    fn test_create_fails_when_ids_are_exhausted() {
        let (_temp_dir, repo) = setup();
        let seeded = r#"{"transactions": [
                {"id": 18446744073709551615, "timestamp": "2025-01-01T00:00:00",
                 "amount": 1, "category": "Old", "type": "income", "note": ""}
            ]}"#;
        fs::write(repo.path(), seeded).unwrap();

        let input = CreateTransactionInput::parse("1", "New", "income", "").unwrap();
        let err = TransactionService::new(&repo).create(input).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)), "{:?}", err);
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), seeded);
    }

    #[test]
    fn test_parse_rejects_unstorable_precision() {
        let err = CreateTransactionInput::parse("0.12345678901234567890", "Food", "expense", "")
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("more digits than can be stored"));
    }

    #[test]
    fn test_failed_validation_writes_nothing() {
        let (_temp_dir, repo) = setup();
        let service = TransactionService::new(&repo);

        let input = CreateTransactionInput::new(
            Money::from_cents(-100),
            "Food",
            TransactionKind::Expense,
            "",
        );
        assert!(service.create(input).unwrap_err().is_validation());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_zero_amount_is_allowed() {
        let (_temp_dir, repo) = setup();
        let service = TransactionService::new(&repo);

        let txn = add(&service, "0", "Adjustment", "income");
        assert!(txn.amount.is_zero());
    }

    #[test]
    fn test_list_with_limit() {
        let (_temp_dir, repo) = setup();
        let service = TransactionService::new(&repo);
        add(&service, "100", "Salary", "income");
        add(&service, "40", "Groceries", "expense");
        add(&service, "10", "Coffee", "expense");

        assert_eq!(service.list(None).len(), 3);

        let last_two = service.list(Some(2));
        let categories: Vec<_> = last_two.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, ["Groceries", "Coffee"]);

        assert_eq!(service.list(Some(10)).len(), 3);
        assert!(service.list(Some(0)).is_empty());
    }

    #[test]
    fn test_list_by_kind() {
        let (_temp_dir, repo) = setup();
        let service = TransactionService::new(&repo);
        add(&service, "100", "Salary", "income");
        add(&service, "40", "Groceries", "expense");
        add(&service, "5", "Refund", "income");

        let income: Vec<_> = service
            .list_by_kind(TransactionKind::Income)
            .into_iter()
            .map(|t| t.id.value())
            .collect();
        assert_eq!(income, [1, 3]);
        assert_eq!(service.list_by_kind(TransactionKind::Expense).len(), 1);
    }
}
