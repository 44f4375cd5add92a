//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod menu;
pub mod report;
pub mod transaction;

pub use menu::Menu;
pub use report::{handle_balance, handle_summary};
pub use transaction::{handle_add, handle_list, AddArgs};
