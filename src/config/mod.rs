//! Configuration module for spendlog
//!
//! spendlog needs no settings file; the only configurable input is where the
//! ledger data lives.

pub mod paths;

pub use paths::{DataPaths, DATA_FILE_ENV, DEFAULT_DATA_FILE};
