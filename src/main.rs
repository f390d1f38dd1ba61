use chrono::NaiveDate;
use clap::Parser;

use address_book::logging;

/// Address book assistant with upcoming-birthday reminders.
#[derive(Debug, Parser)]
#[command(name = "address-book", version, about)]
struct CliConfig {
    /// Reference date for `birthdays` (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let config = CliConfig::parse();
    logging::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    address_book::cli::run(config.today);
}
