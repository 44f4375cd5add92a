//! Report formatting utilities for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::transaction::{format_transaction_table, EMPTY_TABLE};
use crate::models::{Money, TransactionKind};
use crate::services::{CategoryTotal, SummaryReport, SummaryScope};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the balance line
pub fn format_balance(balance: Money) -> String {
    format!("Balance: {}", balance)
}

/// Format category totals as a table, or `(none)` when there are none
pub fn format_category_totals(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let mut table = Table::new(totals.iter().map(|t| CategoryRow {
        category: t.category.clone(),
        total: t.total.to_string(),
    }));
    table.with(Style::markdown());
    table.to_string()
}

fn kind_title(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Income",
        TransactionKind::Expense => "Expense",
    }
}

/// Format a summary: category totals first, then the transactions behind them
pub fn format_summary(report: &SummaryReport) -> String {
    let mut output = String::new();

    if report.scope == SummaryScope::Both {
        for (i, section) in report.sections.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("{} by category:\n", kind_title(section.kind)));
            output.push_str(&format_category_totals(&section.totals));
            output.push('\n');
        }
        for section in &report.sections {
            output.push_str(&format!("\n{} transactions:\n", kind_title(section.kind)));
            output.push_str(&format_transaction_table(&section.transactions));
            output.push('\n');
        }
    } else {
        for section in &report.sections {
            output.push_str(&format_category_totals(&section.totals));
            output.push_str("\n\nDetailed transactions:\n");
            output.push_str(&format_transaction_table(&section.transactions));
            output.push('\n');
        }
    }

    output
}
