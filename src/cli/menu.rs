//! Interactive menu
//!
//! A numbered menu over stdin/stdout. Input and output are generic so the
//! whole loop can be driven from memory in tests.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionKind;
use crate::services::SummaryScope;
use crate::storage::TransactionRepository;

use super::report::{handle_balance, handle_summary};
use super::transaction::{handle_add, handle_list, AddArgs};

const MENU: &str = "\
Personal Expense Tracker
1) Add income
2) Add expense
3) List transactions
4) Balance
5) Summary by category
6) Quit";

enum Flow {
    Continue,
    Quit,
}

/// Interactive menu session
pub struct Menu<'a, R, W> {
    repo: &'a TransactionRepository,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(repo: &'a TransactionRepository, input: R, output: W) -> Self {
        Self {
            repo,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    ///
    /// Errors from a single choice are printed and the menu continues; only
    /// failures to talk to the terminal end the session.
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };

            match self.dispatch(&choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(LedgerError::Io(e)) => return Err(LedgerError::Io(e)),
                Err(e) => {
                    tracing::debug!(error = %e, "menu action failed");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> LedgerResult<Flow> {
        match choice {
            "1" => self.add(TransactionKind::Income),
            "2" => self.add(TransactionKind::Expense),
            "3" => {
                let Some(raw) = self.prompt("Limit (blank for all): ")? else {
                    return Ok(Flow::Quit);
                };
                let limit = parse_limit(&raw)?;
                handle_list(self.repo, limit, &mut self.output)?;
                Ok(Flow::Continue)
            }
            "4" => {
                handle_balance(self.repo, &mut self.output)?;
                Ok(Flow::Continue)
            }
            "5" => {
                let Some(raw) = self.prompt("Type (income/expense/both): ")? else {
                    return Ok(Flow::Quit);
                };
                let scope = if raw.is_empty() {
                    SummaryScope::default()
                } else {
                    raw.parse()?
                };
                handle_summary(self.repo, scope, &mut self.output)?;
                Ok(Flow::Continue)
            }
            "6" => Ok(Flow::Quit),
            _ => {
                writeln!(self.output, "Invalid choice. Try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self, kind: TransactionKind) -> LedgerResult<Flow> {
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(note) = self.prompt("Note (optional): ")? else {
            return Ok(Flow::Quit);
        };

        let args = AddArgs {
            amount,
            category,
            note,
        };
        handle_add(self.repo, kind, &args, &mut self.output)?;
        Ok(Flow::Continue)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

/// Blank means "all"; otherwise a non-negative integer
fn parse_limit(raw: &str) -> LedgerResult<Option<usize>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let n: i64 = raw
        .parse()
        .map_err(|_| LedgerError::validation("limit must be an integer or blank"))?;
    if n < 0 {
        return Err(LedgerError::validation("limit must be >= 0"));
    }

    usize::try_from(n)
        .map(Some)
        .map_err(|_| LedgerError::validation("limit is too large"))
}
