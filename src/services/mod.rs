//! Service layer for spendlog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id assignment and aggregation.

pub mod summary;
pub mod transaction;

pub use summary::{CategorySummary, CategoryTotal, SummaryReport, SummaryScope, SummaryService};
pub use transaction::{CreateTransactionInput, TransactionService};
