//! Structured logging to a file.
//!
//! The prompt owns the terminal while it runs, so log output never goes to
//! stdout or stderr. Without a log file no subscriber is installed and
//! every `tracing` event is dropped.
//!
//! Filtering follows the `LISTPICK_LOG` env var (`EnvFilter` syntax),
//! defaulting to [`DEFAULT_FILTER`].

use std::fs::File;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Env var read for the log filter.
pub const FILTER_ENV: &str = "LISTPICK_LOG";

pub const DEFAULT_FILTER: &str = "info";

/// Keeps the background log writer alive; flushes on drop.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Build the filter from the environment, falling back to the default.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Start writing logs to `path` (truncated on startup).
///
/// # Errors
///
/// Returns an error if the file can't be created.
pub fn init(path: &Path) -> Result<LogGuard> {
    let file = File::create(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(LogGuard { _guard: guard })
}
