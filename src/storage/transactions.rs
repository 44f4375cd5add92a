//! Transaction repository for JSON storage
//!
//! Loads and saves the whole transaction list as one document of the form
//! `{"transactions": [...]}`. Nothing is cached between calls: every load
//! reads the file again.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::Transaction;

use super::file_io::{read_json_lenient, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    /// Create a repository backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all transactions in insertion order
    ///
    /// A missing or malformed file loads as an empty list.
    pub fn load(&self) -> Vec<Transaction> {
        let data: TransactionData = read_json_lenient(&self.path);
        tracing::debug!(
            path = %self.path.display(),
            count = data.transactions.len(),
            "loaded transactions"
        );
        data.transactions
    }

    /// Overwrite the backing file with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), LedgerError> {
        #[derive(Serialize)]
        struct TransactionDataRef<'a> {
            transactions: &'a [Transaction],
        }

        write_json_atomic(&self.path, &TransactionDataRef { transactions })?;
        tracing::debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}
