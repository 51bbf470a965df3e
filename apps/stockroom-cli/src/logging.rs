//! Log setup. The menu owns stdout, so events go to a daily-rolling file.
//!
//! The level is settled in [`crate::config`] before it gets here: flags over
//! `STOCKROOM_LOG` over `RUST_LOG` over the file. The filter is built from
//! that value as-is.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{AppError, AppResult};

/// Builds the filter from the resolved level directive.
pub fn build_filter(level: &str) -> AppResult<EnvFilter> {
    EnvFilter::try_new(level.trim())
        .map_err(|e| AppError::InvalidConfig(format!("Invalid log level '{level}': {e}")))
}

/// Daily appender writing `<name>.<date>` next to `path`, keeping at most
/// `max_files` of them.
pub fn file_appender(path: &Path, max_files: usize) -> AppResult<RollingFileAppender> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("stockroom.log");

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .max_log_files(max_files)
        .build(directory)
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Installs the global subscriber.
///
/// ## Returns
/// The appender guard. Dropping it flushes and stops the writer thread, so
/// `main` holds it until exit. `None` when logging is disabled.
pub fn init_logging(config: &LoggingConfig) -> AppResult<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let Some(path) = config.resolved_file() else {
        return Err(AppError::InvalidConfig(
            "no log file configured and no data directory available".into(),
        ));
    };

    let filter = build_filter(&config.level)?;
    let appender = file_appender(&path, config.max_files)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("stockroom.log"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).unwrap().is_none());
    }

    // The only test in this binary that installs the global subscriber.
    #[test]
    fn test_enabled_logging_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("logs").join("stockroom.log")),
            ..LoggingConfig::default()
        };

        let guard = init_logging(&config).unwrap();
        assert!(guard.is_some());
        tracing::info!("written to the log file");
        drop(guard);

        let files = log_files(&dir.path().join("logs"));
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("stockroom.log."));
    }

    #[test]
    fn test_old_log_files_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=5 {
            let name = format!("stockroom.log.2020-01-0{day}");
            std::fs::write(dir.path().join(name), "old\n").unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), "keep\n").unwrap();

        let _appender = file_appender(&dir.path().join("stockroom.log"), 3).unwrap();

        assert_eq!(log_files(dir.path()).len(), 3);
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_filter_is_taken_verbatim() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(build_filter("info").unwrap().max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            build_filter("info,stockroom=debug").unwrap().max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert!(matches!(
            build_filter("stockroom=loud"),
            Err(AppError::InvalidConfig(_))
        ));
    }
}
