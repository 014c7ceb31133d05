use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system
///
/// - `RUST_LOG` controls filtering (defaults to "info")
/// - With a `logfile` whose directory exists, events are written there as
///   flattened JSON through a non-blocking appender. Keep the returned guard
///   alive until exit or buffered events are lost.
/// - Otherwise events go to stdout, human readable on a terminal and JSON
///   when piped.
pub fn init_logging(logfile: Option<&Path>) -> Option<WorkerGuard> {
    if let Some(path) = logfile {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        if let (true, Some(file_name)) = (dir.is_dir(), path.file_name()) {
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .json()
                .flatten_event(true)
                .init();

            return Some(guard);
        }

        init_stdout_logging();
        tracing::info!(logfile = %path.display(), "cannot create log file; logging to stdout");
        return None;
    }

    init_stdout_logging();
    None
}

fn init_stdout_logging() {
    if io::stdout().is_terminal() {
        fmt().with_env_filter(env_filter()).init();
    } else {
        fmt()
            .with_env_filter(env_filter())
            .json()
            .flatten_event(true)
            .init();
    }
}
