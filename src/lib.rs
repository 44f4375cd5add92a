//! spendlog - personal income and expense tracker
//!
//! Records income and expense entries in a local JSON file and reports the
//! balance and per-category totals. Each operation reads the file afresh;
//! there is no long-lived in-memory state.
//!
//! # Architecture
//!
//! - `config`: Data file resolution
//! - `error`: Custom error types
//! - `models`: Transaction, ids and money
//! - `storage`: JSON file storage layer
//! - `services`: Recording, listing and aggregation
//! - `display`: Table formatting
//! - `cli`: Command handlers and the interactive menu
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```rust,no_run
//! use spendlog::services::{CreateTransactionInput, SummaryService, TransactionService};
//! use spendlog::storage::TransactionRepository;
//!
//! # fn main() -> spendlog::LedgerResult<()> {
//! let repo = TransactionRepository::new("data.json");
//! let input = CreateTransactionInput::parse("12.50", "Lunch", "expense", "")?;
//! TransactionService::new(&repo).create(input)?;
//! println!("{}", SummaryService::new(&repo).balance());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
