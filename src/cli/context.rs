use chrono::{Local, NaiveDate};
use std::io::{self, Write};

use crate::error::{BookError, BookResult};
use crate::model::AddressBook;

pub struct CLIContext {
    pub book: AddressBook,
    today_override: Option<NaiveDate>,
}

impl CLIContext {
    pub fn new(book: AddressBook, today_override: Option<NaiveDate>) -> Self {
        Self {
            book,
            today_override,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Reference date for birthday lookups: `--today` if given, else the local date.
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Splits `args` on whitespace and checks there are at least `count` parts.
    pub fn require_args<'a>(args: &'a str, count: usize, usage: &str) -> BookResult<Vec<&'a str>> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        if parts.len() < count {
            return Err(BookError::MissingArgument {
                usage: usage.to_string(),
            });
        }
        Ok(parts)
    }

    /// `true` for `--json`, `false` for no arguments, an error for anything else.
    pub fn json_flag(args: &str, usage: &str) -> BookResult<bool> {
        match args.trim() {
            "" => Ok(false),
            "--json" => Ok(true),
            other => Err(BookError::UnknownArgument {
                argument: other.to_string(),
                usage: usage.to_string(),
            }),
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &BookError) {
        tracing::debug!(error = ?e, "command failed");
        println!("Error: {}", e);
    }
}
