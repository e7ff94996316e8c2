//! listpick CLI
//!
//! Ask the user to pick one entry from a list and print its value.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use listpick::config::{self, Overrides};
use listpick::{logging, select, PromptError};

/// Exit status for a prompt abandoned with Ctrl+C or Esc.
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "listpick")]
#[command(about = "Pick one entry from a list in the terminal")]
#[command(version)]
struct Cli {
    /// JSON config file (message, choices, page_size, default, hint)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Rows of the list visible at once
    #[arg(long)]
    page_size: Option<usize>,

    /// Value of the choice the cursor starts on
    #[arg(long)]
    default: Option<String>,

    /// Hint shown next to the question on the first frame
    #[arg(long)]
    hint: Option<String>,

    /// Write logs to this file (filter with LISTPICK_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Question shown above the list
    message: Option<String>,

    /// Choices: `value`, `value=Name`, `!value` (disabled), `---Label` (separator).
    /// A backslash makes the next character literal, e.g. `a\=b` or `\!x`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    choices: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match cli.log_file.as_deref().map(logging::init).transpose() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cmd_select(cli) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(PromptError::Interrupted) => ExitCode::from(EXIT_INTERRUPTED),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_select(cli: Cli) -> Result<String, PromptError> {
    let overrides = Overrides {
        message: cli.message,
        choices: cli.choices,
        page_size: cli.page_size,
        default: cli.default,
        hint: cli.hint,
    };
    let config = config::resolve(cli.config.as_deref(), overrides)?;
    select(config)
}
