//! Summary service
//!
//! Balance and per-category totals over the whole ledger.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::TransactionRepository;

use super::transaction::filter_by_kind;

/// Which transaction kinds a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SummaryScope {
    Income,
    #[default]
    Expense,
    Both,
}

impl SummaryScope {
    /// Kinds covered by this scope, income first
    pub fn kinds(&self) -> &'static [TransactionKind] {
        match self {
            Self::Income => &[TransactionKind::Income],
            Self::Expense => &[TransactionKind::Expense],
            Self::Both => &TransactionKind::ALL,
        }
    }
}

impl fmt::Display for SummaryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl FromStr for SummaryScope {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "both" => Ok(Self::Both),
            other => Err(LedgerError::Validation(format!(
                "scope must be 'income', 'expense', or 'both' (got '{}')",
                other
            ))),
        }
    }
}

/// Total for a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
}

/// Per-category totals for one transaction kind
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub kind: TransactionKind,
    /// Categories in order of first appearance; empty categories are absent
    pub totals: Vec<CategoryTotal>,
    /// The transactions behind the totals, in insertion order
    pub transactions: Vec<Transaction>,
}

impl CategorySummary {
    fn build(kind: TransactionKind, all: &[Transaction]) -> Self {
        let transactions = filter_by_kind(all, kind);
        let totals = totals_by_category(&transactions);
        Self {
            kind,
            totals,
            transactions,
        }
    }

    /// Total for `category`, if it has any transactions
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.total)
    }

    /// Sum over all categories
    pub fn grand_total(&self) -> Money {
        self.totals.iter().map(|t| t.total).sum()
    }
}

/// Summary for a scope: one section per covered kind
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub scope: SummaryScope,
    pub sections: Vec<CategorySummary>,
}

impl SummaryReport {
    /// Section for `kind`, if the scope covers it
    pub fn section(&self, kind: TransactionKind) -> Option<&CategorySummary> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Category totals merged across all sections
    ///
    /// A category used for both income and expenses gets the sum of both.
    pub fn combined_totals(&self) -> Vec<CategoryTotal> {
        let mut merged: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for total in self.sections.iter().flat_map(|s| &s.totals) {
            match index.get(&total.category) {
                Some(&i) => {
                    merged[i].total += total.total;
                    merged[i].count += total.count;
                }
                None => {
                    index.insert(total.category.clone(), merged.len());
                    merged.push(total.clone());
                }
            }
        }

        merged
    }
}

/// Group transactions by category, keeping first-appearance order
fn totals_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions {
        match index.get(txn.category.as_str()) {
            Some(&i) => {
                totals[i].total += txn.amount;
                totals[i].count += 1;
            }
            None => {
                index.insert(txn.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                    count: 1,
                });
            }
        }
    }

    totals
}

/// Service for balance and category summaries
pub struct SummaryService<'a> {
    repo: &'a TransactionRepository,
}

impl<'a> SummaryService<'a> {
    pub fn new(repo: &'a TransactionRepository) -> Self {
        Self { repo }
    }

    /// Total income minus total expenses
    pub fn balance(&self) -> Money {
        self.repo.load().iter().map(Transaction::signed_amount).sum()
    }

    /// Per-category totals for the kinds selected by `scope`
    pub fn summary(&self, scope: SummaryScope) -> SummaryReport {
        let transactions = self.repo.load();
        let sections = scope
            .kinds()
            .iter()
            .map(|&kind| CategorySummary::build(kind, &transactions))
            .collect();

        SummaryReport { scope, sections }
    }
}
