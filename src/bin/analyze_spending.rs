use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use spending_summary::{Config, DEFAULT_DB_PATH, run};

/// Summarise spending by category and save the totals to the `category_summary` table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database that holds the transactions.
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,

    /// Also report how far the total spent is over or under this amount.
    #[arg(long)]
    budget: Option<f64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(args.db_path).budget(args.budget)
    }
}

fn main() -> ExitCode {
    setup_logging();

    let config = Config::from(Args::parse());

    match run(&config, io::stdout().lock()) {
        Ok(summary) => {
            tracing::info!(
                "Saved {} categories to {:?}",
                summary.categories.len(),
                config.db_path
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            print_error(error);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the report on stdout.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spending_summary=warn,analyze_spending=warn"));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_log).init();
}

fn print_error(error: impl ToString) {
    eprintln!("\x1b[31;1mError: {}\x1b[0m", error.to_string())
}
