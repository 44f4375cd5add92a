//! Storage layer for spendlog
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Reads are forgiving: a file that is missing or cannot be parsed
//! is treated as an empty ledger.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, read_json_lenient, write_json_atomic};
pub use transactions::TransactionRepository;
