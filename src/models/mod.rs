//! Core data models for spendlog
//!
//! This module contains the data structures for the ledger domain: the
//! transaction record, its identifier and the money type amounts are kept in.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
