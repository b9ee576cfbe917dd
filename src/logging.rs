use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

/// Keeps the file writer alive; logs stop flushing once this is dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Routes tracing output to a daily log file, since the TUI owns stdout.
///
/// Returns `None` when no log directory can be created or a subscriber is
/// already installed; the app then runs without a log file.
pub fn init(config: &Config) -> Option<LoggingGuard> {
    let log_dir = std::fs::create_dir_all(&config.log_dir)
        .map(|_| config.log_dir.clone())
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = crate::config::default_log_dir();
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "menucard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("menucard=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
