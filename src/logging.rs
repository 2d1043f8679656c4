use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // RUST_LOG wins; otherwise only warnings unless --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("siteaudit={}", default_level)));

    // Diagnostics on stderr; stdout carries command output
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Hide module paths
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    // Add JSON file logging if a path was given
    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        // One file per day, named after the requested path
        let file_appender = tracing_appender::rolling::daily(
            log_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("siteaudit.log")),
        );

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false) // No colors in file
            .json();

        // A subscriber may already be installed
        let _ = subscriber.with(file_layer).try_init();
    } else {
        let _ = subscriber.try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_is_idempotent() {
        init(false, None);
        init(true, None);
        tracing::debug!("still logging after repeated init");
    }

    #[test]
    fn test_init_creates_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("audit.log");

        init(true, Some(log_path.clone()));

        assert!(log_path.parent().unwrap().exists());
    }
}
