//! Goal Sheets CLI - revenue goals from spreadsheet data

mod render;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use goal_sheets::prelude::*;
use goal_sheets::{FilterEvaluator, DEFAULT_AMOUNT_COLUMN};
use log::LevelFilter;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "goal-sheets";

#[derive(Parser)]
#[command(name = "goal")]
#[command(
    author,
    version,
    about = "Filter spreadsheet revenue and compute a goal with a percentage increase"
)]
struct Cli {
    /// JSON file holding settings and the filter history
    #[arg(long, global = true, env = "GOAL_SHEETS_STATE")]
    state_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// No log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the columns of a spreadsheet
    Columns {
        /// Input spreadsheet file (xlsx, xls, ods, csv, tsv)
        input: PathBuf,
    },

    /// List the distinct values of a column
    Values {
        /// Input spreadsheet file
        input: PathBuf,

        /// Column to list (default: the stored column)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Calculate a goal and record it in the history
    ///
    /// Options left out are taken from the previous calculation.
    #[command(alias = "calculate")]
    Calc {
        /// Input spreadsheet file
        input: PathBuf,

        /// Column to filter by (empty for the grand total)
        #[arg(short, long)]
        column: Option<String>,

        /// Only rows whose cell shows this value
        #[arg(long, conflicts_with_all = ["all", "manual"])]
        value: Option<String>,

        /// Every row of the column
        #[arg(long, conflicts_with = "manual")]
        all: bool,

        /// Use a manually entered total instead of the sheet
        #[arg(short, long)]
        manual: bool,

        /// Label of the manual entry (implies --manual)
        #[arg(short, long)]
        label: Option<String>,

        /// Manual total, e.g. 500 or 500,00 (implies --manual)
        #[arg(short, long, value_parser = parse_decimal)]
        amount: Option<f64>,

        /// Percentage increase, e.g. 10 or 12,5
        #[arg(short, long, value_parser = parse_decimal)]
        percent: Option<f64>,

        /// Column holding the amounts to sum
        #[arg(long, default_value = DEFAULT_AMOUNT_COLUMN)]
        amount_column: String,
    },

    /// Show or edit the filter history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Show or reset the stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List every recorded filter
    #[command(alias = "ls")]
    List,

    /// Remove one entry (0-based index as listed)
    #[command(alias = "rm")]
    Remove { index: usize },

    /// Remove every entry
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the stored settings
    Show,

    /// Forget the stored settings (the history is kept)
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let state_file = match cli.state_file {
        Some(path) => path,
        None => default_state_file()?,
    };
    log::debug!("state file: {}", state_file.display());
    let store = JsonFileStore::new(state_file);

    match cli.command {
        Commands::Columns { input } => list_columns(store, &input),
        Commands::Values { input, column } => list_values(store, &input, column),
        Commands::Calc {
            input,
            column,
            value,
            all,
            manual,
            label,
            amount,
            percent,
            amount_column,
        } => {
            let selection = if let Some(value) = value {
                Some(Selection::SpecificValue(value))
            } else if all {
                Some(Selection::AllValues)
            } else if manual || label.is_some() || amount.is_some() {
                Some(Selection::ManualEntry)
            } else {
                None
            };
            let request = CalculationRequest {
                column,
                selection,
                manual_label: label,
                manual_amount: amount,
                percent,
            };
            calculate(store, &input, &request, &amount_column)
        }
        Commands::History { action } => history(store, action),
        Commands::Settings { action } => settings(store, action),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Off
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// `<config dir>/goal-sheets/state.json`
fn default_state_file() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|path| path.join(APP_NAME).join("state.json"))
        .context("Could not determine the config directory; pass --state-file")
}

/// Accepts both `.` and `,` as the decimal separator
fn parse_decimal(text: &str) -> std::result::Result<f64, String> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("'{}' is not a number", text)),
    }
}

fn open_session(
    store: JsonFileStore,
    input: &Path,
    amount_column: &str,
) -> Result<Session<JsonFileStore>> {
    let mut session =
        Session::new(store).with_evaluator(FilterEvaluator::with_amount_column(amount_column));
    session
        .load_file_with(input, |busy| {
            if busy {
                log::info!("reading '{}'", input.display());
            }
        })
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    Ok(session)
}

fn list_columns(store: JsonFileStore, input: &Path) -> Result<()> {
    let session = open_session(store, input, DEFAULT_AMOUNT_COLUMN)?;
    for column in session.columns()? {
        println!("{}", column);
    }
    Ok(())
}

fn list_values(store: JsonFileStore, input: &Path, column: Option<String>) -> Result<()> {
    let session = open_session(store, input, DEFAULT_AMOUNT_COLUMN)?;
    let stored = session.restored_settings()?.column;

    let column = match column.or_else(|| stored.clone()) {
        Some(column) if !column.is_empty() => column,
        _ => bail!("No column given; pass --column"),
    };

    // Choosing a different column resets the stored selection
    let listed = if stored.as_deref() == Some(column.as_str()) {
        session.distinct_values(&column)
    } else {
        session.select_column(&column)
    };
    let values = listed.with_context(|| format!("Failed to list values of '{}'", column))?;

    print!("{}", render::values(&column, &values));
    Ok(())
}

fn calculate(
    store: JsonFileStore,
    input: &Path,
    request: &CalculationRequest,
    amount_column: &str,
) -> Result<()> {
    let session = open_session(store, input, amount_column)?;
    let calc = session
        .calculate(request)
        .context("Failed to calculate the goal")?;

    print!("{}", render::calculation(&calc));
    if !calc.added_to_history {
        eprintln!("Already in the history");
    }

    println!();
    println!("History:");
    print!("{}", render::history(&session.history().list()?));
    Ok(())
}

fn history(store: JsonFileStore, action: HistoryAction) -> Result<()> {
    let session = Session::new(store);

    match action {
        HistoryAction::List => {
            print!("{}", render::history(&session.history().list()?));
        }
        HistoryAction::Remove { index } => {
            let removed = session
                .remove_history(index)
                .with_context(|| format!("Failed to remove history entry {}", index))?;
            eprintln!("Removed: {}", removed);
            print!("{}", render::history(&session.history().list()?));
        }
        HistoryAction::Clear { yes } => {
            if !yes && !confirm_clear()? {
                eprintln!("History kept");
                return Ok(());
            }
            session.clear_history()?;
            eprintln!("History cleared");
        }
    }
    Ok(())
}

fn confirm_clear() -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        bail!("Refusing to clear the history without a terminal; pass --yes");
    }
    dialoguer::Confirm::new()
        .with_prompt("Clear the whole filter history?")
        .default(false)
        .interact()
        .context("Failed to read the confirmation")
}

fn settings(store: JsonFileStore, action: SettingsAction) -> Result<()> {
    let session = Session::new(store);

    match action {
        SettingsAction::Show => {
            print!("{}", render::settings(&session.settings().load()?));
        }
        SettingsAction::Reset => {
            session.settings().reset()?;
            eprintln!("Settings cleared; the history is kept");
        }
    }
    Ok(())
}
