use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{handle_add, handle_balance, handle_list, handle_summary, AddArgs, Menu};
use spendlog::config::{DataPaths, DATA_FILE_ENV};
use spendlog::models::TransactionKind;
use spendlog::services::SummaryScope;
use spendlog::storage::TransactionRepository;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Track personal income and expenses in a local JSON file",
    long_about = "spendlog records income and expense entries in a JSON file and \
                  reports the balance and per-category totals. Run without a \
                  command for the interactive menu."
)]
struct Cli {
    /// Data file to read and write
    #[arg(short, long, global = true, env = DATA_FILE_ENV)]
    file: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record income
    Income(AddArgs),

    /// Record an expense
    Expense(AddArgs),

    /// List transactions, oldest first
    #[command(alias = "ls")]
    List {
        /// Show only the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show total income minus total expenses
    Balance,

    /// Show totals per category
    Summary {
        /// Which transactions to summarize
        #[arg(short, long, value_enum, default_value_t = SummaryScope::Expense)]
        scope: SummaryScope,
    },

    /// Start the interactive menu
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    spendlog::logging::init_tracing(cli.verbose);

    let paths = DataPaths::resolve(cli.file)?;
    tracing::debug!(file = %paths.data_file().display(), "using data file");
    let repo = TransactionRepository::new(paths.data_file());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Income(args)) => handle_add(&repo, TransactionKind::Income, &args, &mut out)?,
        Some(Commands::Expense(args)) => {
            handle_add(&repo, TransactionKind::Expense, &args, &mut out)?
        }
        Some(Commands::List { limit }) => handle_list(&repo, limit, &mut out)?,
        Some(Commands::Balance) => handle_balance(&repo, &mut out)?,
        Some(Commands::Summary { scope }) => handle_summary(&repo, scope, &mut out)?,
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            Menu::new(&repo, stdin.lock(), out).run()?;
        }
    }

    Ok(())
}
