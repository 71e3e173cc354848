//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/serpdash/serpdash.log` (or platform equivalent)
//! with 10 MB size-based rotation. The terminal only receives warnings so the
//! prompt stays readable. Set `DEBUG_LOGGING=1` to enable debug output for
//! serpdash crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,serpdash_cli=debug,serpdash_core=debug";

/// Initialize logging with dual output (file + stderr).
///
/// Returns a `WorkerGuard` that MUST be held for the application lifetime
/// to ensure all buffered logs are flushed on shutdown.
///
/// # Fallback
/// If the log directory cannot be created, returns `None` and logs to
/// stderr only.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let log_dir = match dirs::config_dir() {
        Some(config) => config.join("serpdash"),
        None => {
            init_stderr_only(debug_logging);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Can't use tracing yet since subscriber not initialized
        eprintln!(
            "Failed to create log directory {:?}: {}, using stderr only",
            log_dir, e
        );
        init_stderr_only(debug_logging);
        return None;
    }

    let log_path = log_dir.join("serpdash.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(10 * 1024 * 1024), // 10 MB
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_stderr_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(file_filter(debug_logging));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer())
        .init();

    tracing::info!(
        log_file = ?log_path,
        debug_logging,
        "serpdash logging initialized"
    );

    Some(guard)
}

fn file_filter(debug_logging: bool) -> EnvFilter {
    if debug_logging {
        EnvFilter::new(DEBUG_DIRECTIVE)
    } else {
        EnvFilter::new("info")
    }
}

fn stderr_layer<S>() -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_filter(EnvFilter::new("warn"))
}

/// Fallback: stderr-only logging when file logging fails.
fn init_stderr_only(debug_logging: bool) {
    let filter = if debug_logging {
        EnvFilter::new(DEBUG_DIRECTIVE)
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_span_events(FmtSpan::NONE)
                .with_filter(filter),
        )
        .init();

    tracing::debug!(debug_logging, "serpdash logging initialized (stderr only)");
}
