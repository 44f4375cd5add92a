//! CLI commands for reports
//!
//! Balance and per-category summaries.

use std::io::Write;

use crate::display::{format_balance, format_summary};
use crate::error::LedgerResult;
use crate::services::{SummaryScope, SummaryService};
use crate::storage::TransactionRepository;

/// Print the current balance
pub fn handle_balance<W: Write>(repo: &TransactionRepository, out: &mut W) -> LedgerResult<()> {
    let balance = SummaryService::new(repo).balance();
    writeln!(out, "{}", format_balance(balance))?;
    Ok(())
}

/// Print category totals and the matching transactions for `scope`
pub fn handle_summary<W: Write>(
    repo: &TransactionRepository,
    scope: SummaryScope,
    out: &mut W,
) -> LedgerResult<()> {
    let report = SummaryService::new(repo).summary(scope);
    write!(out, "{}", format_summary(&report))?;
    Ok(())
}
