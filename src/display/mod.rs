//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, balances and summaries
//! as tables and short status lines.

pub mod report;
pub mod transaction;

pub use report::{format_balance, format_category_totals, format_summary};
pub use transaction::{format_transaction_created, format_transaction_table};
