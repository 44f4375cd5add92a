//! Transaction model
//!
//! A transaction is a single income or expense entry. Entries are append-only:
//! once written they are never edited or removed.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// All kinds, in reporting order
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential identifier, unique within a data file
    pub id: TransactionId,

    /// Local creation time, whole seconds
    pub timestamp: NaiveDateTime,

    /// Non-negative amount; the direction comes from `kind`
    pub amount: Money,

    /// Free-form label such as "Food" or "Salary"
    pub category: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Create a transaction stamped with the current local time
    pub fn new(
        id: TransactionId,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionKind,
        note: impl Into<String>,
    ) -> Self {
        let category: String = category.into();
        Self {
            id,
            timestamp: now_to_the_second(),
            amount,
            category: category.trim().to_string(),
            kind,
            note: note.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Contribution to the balance: positive for income, negative for expenses
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

fn now_to_the_second() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    EmptyCategory,
    UnknownKind(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "amount must not be negative (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "category must be a non-empty string"),
            Self::UnknownKind(kind) => {
                write!(f, "type must be 'income' or 'expense' (got '{}')", kind)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
