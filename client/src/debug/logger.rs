//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::{LogConfig, LOG_FILE_NAME};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation under `BANK_LOG_DIR`
/// - Optional stderr mirror (`BANK_LOG_STDERR=1`)
/// - Non-blocking writes so a slow disk never stalls the driver loop
/// - Panic hook integration for crash logging
///
/// Returns the appender guard; dropping it flushes and stops the writer.
/// `None` means the log directory could not be created and only the stderr
/// layer (if any) is active.
pub fn init() -> Option<WorkerGuard> {
    let config = LogConfig::from_env();

    let env_filter = || {
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("bank_client=info,warn"))
    };

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = tracing_subscriber::registry()
            .with(env_filter())
            .with(stderr_layer(config.log_to_stderr))
            .try_init();
        setup_panic_hook();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    if tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stderr_layer(config.log_to_stderr))
        .try_init()
        .is_err()
    {
        eprintln!("Warning: a global tracing subscriber is already installed");
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        debug = config.is_debug_enabled(),
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

fn stderr_layer<S>(enabled: bool) -> Option<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    enabled.then(|| fmt::layer().with_writer(std::io::stderr).with_target(true))
}

/// Set up panic hook to log panics with their location
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
