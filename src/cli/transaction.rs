//! Transaction CLI commands
//!
//! Implements the commands that record and list transactions.

use std::io::Write;

use clap::Args;

use crate::display::{format_transaction_created, format_transaction_table};
use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::TransactionRepository;

/// Arguments shared by `income` and `expense`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Amount, e.g. "12.50" or "$12.50"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category label, e.g. "Food" or "Salary"
    pub category: String,
    /// Optional note
    #[arg(short, long, default_value = "")]
    pub note: String,
}

/// Record a transaction and print a confirmation line
pub fn handle_add<W: Write>(
    repo: &TransactionRepository,
    kind: TransactionKind,
    args: &AddArgs,
    out: &mut W,
) -> LedgerResult<()> {
    let input = CreateTransactionInput::parse(
        &args.amount,
        &args.category,
        kind.as_str(),
        &args.note,
    )?;
    let txn = TransactionService::new(repo).create(input)?;

    writeln!(out, "{}", format_transaction_created(&txn))?;
    Ok(())
}

/// Print stored transactions, optionally only the last `limit`
pub fn handle_list<W: Write>(
    repo: &TransactionRepository,
    limit: Option<usize>,
    out: &mut W,
) -> LedgerResult<()> {
    let transactions = TransactionService::new(repo).list(limit);
    writeln!(out, "{}", format_transaction_table(&transactions))?;
    Ok(())
}
