//! Path management for spendlog
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (the `--file` flag)
//! 2. `SPENDLOG_FILE` environment variable (if set and non-empty)
//! 3. `data.json` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "SPENDLOG_FILE";

/// File name used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Resolved location of the ledger data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    data_file: PathBuf,
}

impl DataPaths {
    /// Resolve the data file from an optional explicit path, falling back to
    /// the environment and then to `data.json`
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, LedgerError> {
        let from_env = std::env::var_os(DATA_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self::resolve_with(explicit, from_env)
    }

    fn resolve_with(
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
    ) -> Result<Self, LedgerError> {
        let data_file = explicit
            .or(from_env)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        if data_file.as_os_str().is_empty() {
            return Err(LedgerError::Config("data file path is empty".into()));
        }
        if data_file.is_dir() {
            return Err(LedgerError::Config(format!(
                "data file path {} is a directory",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    /// Use a specific data file (useful for testing)
    pub fn with_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::with_file(DEFAULT_DATA_FILE)
    }
}
