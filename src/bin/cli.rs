use expense_ledger::{AppConfig, Amount, EntryId, Kind, Ledger, Totals,
    backend::{EntryStore, FileKvStore, JsonStore}};

use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Context;
use colored::Colorize;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Storage file to operate on, overriding the configuration
    #[clap(short, long, value_parser)]
    store: Option<PathBuf>,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Record a new income or expense
    Add(AddEntry),
    /// Delete an entry by id
    Remove(RemoveEntry),
    /// List all entries in the order they were added
    List,
    /// Show total income, expense and balance
    Totals,
    /// Show income and expense per month
    Summary,
    /// Show totals, history and monthly summary together
    Report
}

#[derive(Args, Debug)]
struct AddEntry {
    /// Label of the entry
    #[clap(value_parser)]
    title: String,

    /// Amount, as entered
    #[clap(value_parser, allow_hyphen_values = true)]
    amount: String,

    /// income or expense
    #[clap(short, long, value_parser, default_value_t = Kind::Expense)]
    kind: Kind,

    /// Date as YYYY-MM-DD, defaults to today
    #[clap(short, long, value_parser)]
    date: Option<String>
}

impl AddEntry {
    fn add_entry<S: EntryStore>(&self, ledger: &mut Ledger<S>) -> anyhow::Result<EntryId> {
        let date = match &self.date {
            Some(date) => date.clone(),
            None => chrono::Local::now().format("%Y-%m-%d").to_string()
        };
        let id = ledger.add(&self.title, &self.amount, self.kind, &date)
            .with_context(|| format!("entry {:?} not added", self.title))?;
        return Ok(id);
    }
}

#[derive(Args, Debug)]
struct RemoveEntry {
    /// Id of the entry to delete
    #[clap(value_parser)]
    id: EntryId
}

struct Printer {
    currency: String
}

impl Printer {
    fn money(&self, amount: Amount) -> String {
        format!("{}{}", self.currency, amount)
    }

    fn print_totals(&self, totals: &Totals) {
        let balance = self.money(totals.balance);
        let balance = if totals.balance >= 0.0 { balance.green() } else { balance.red() };
        println!("{}: {}", "Income".bold(), self.money(totals.income).green());
        println!("{}: {}", "Expense".bold(), self.money(totals.expense).red());
        println!("{}: {}", "Balance".bold(), balance);
    }

    fn print_history<S: EntryStore>(&self, ledger: &Ledger<S>) {
        if ledger.is_empty() {
            println!("No records yet.");
            return;
        }
        for entry in ledger.entries() {
            let amount = self.money(entry.amount);
            let amount = match entry.kind {
                Kind::Income => amount.green(),
                Kind::Expense => amount.red()
            };
            println!("#{} {} ({}): {}", entry.id, entry.title.bold(), entry.date, amount);
        }
    }

    fn print_summary<S: EntryStore>(&self, ledger: &Ledger<S>) {
        let summary = ledger.monthly_summary();
        if summary.is_empty() {
            println!("No data yet.");
            return;
        }
        for bucket in summary {
            println!("{}  {}  {}",
                bucket.month,
                format!("+{}", self.money(bucket.income)).green(),
                format!("-{}", self.money(bucket.expense)).red());
        }
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let path = args.store.unwrap_or(config.storage.path);

    let store = JsonStore::with_key(FileKvStore::new(&path), &config.storage.key);
    let mut ledger = Ledger::open(store);
    let printer = Printer { currency: config.display.currency };

    match args.action {
        Subcommands::Add(add_entry) => {
            let id = add_entry.add_entry(&mut ledger)?;
            println!("Added entry #{}", id);
        },
        Subcommands::Remove(remove_entry) => {
            if ledger.remove(remove_entry.id) {
                println!("Removed entry #{}", remove_entry.id);
            } else {
                println!("No entry #{}", remove_entry.id);
            }
        },
        Subcommands::List => {
            printer.print_history(&ledger);
        },
        Subcommands::Totals => {
            printer.print_totals(&ledger.totals());
        },
        Subcommands::Summary => {
            printer.print_summary(&ledger);
        },
        Subcommands::Report => {
            printer.print_totals(&ledger.totals());
            println!("\n{}", "History".bold());
            printer.print_history(&ledger);
            println!("\n{}", "Monthly Summary".bold());
            printer.print_summary(&ledger);
        }
    }
    return Ok(());
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", "error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
