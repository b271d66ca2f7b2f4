//! Tracing subscriber setup.

use std::path::Path;
use storefront::{StoreError, StoreErrorKind, StorefrontResult};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "storefront.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over info. With
/// `log_dir` set, output is appended to a file there instead of stderr so it
/// cannot corrupt a full-screen terminal. The file is written by a background
/// worker; keep the returned guard alive until exit or buffered lines are lost.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> StorefrontResult<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(dir) = log_dir else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir).map_err(|e| {
        StoreError::new(StoreErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "{}: {}",
                dir.join(LOG_FILE).display(),
                e
            )))
        })?;
    let (writer, guard) = non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Installs the global subscriber; keep this the only test that does.
    #[test]
    fn test_file_logging_flushes_on_guard_drop() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init_logging(false, Some(&log_dir)).unwrap();
        assert!(guard.is_some());
        tracing::info!(products = 3, "Catalog loaded");
        drop(guard);

        let written = std::fs::read_to_string(log_dir.join(LOG_FILE)).unwrap();
        assert!(written.contains("Catalog loaded"));
        assert!(written.contains("products=3"));
        assert!(!written.contains('\u{1b}'));
    }
}
