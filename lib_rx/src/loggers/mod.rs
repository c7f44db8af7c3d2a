//! # Logging Setup
//!
//! The engine only talks to the `log` facade. Applications that want output
//! call [`setup_logging`], which installs a `fern` dispatcher writing to stdout
//! and, optionally, to a timestamped file in `log_dir`. Older `.log` files in
//! that directory are removed so only the most recent one is kept.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while installing the global logger.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log directory or file could not be prepared.
    #[error("I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("Logger already initialized: {0}")]
    SetLoggerError(#[from] log::SetLoggerError),
}

/// Maps a textual level to a filter. Unknown names fall back to `Info`.
pub fn parse_level(log_level: &str) -> log::LevelFilter {
    match log_level.to_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" | "fatal" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

/// Installs the global logger.
///
/// Returns the path of the log file when `log_dir` is given.
pub fn setup_logging(app_name: &str, log_dir: Option<&Path>, log_level: &str) -> Result<Option<PathBuf>, LoggerError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(parse_level(log_level))
        .chain(std::io::stdout());

    let mut log_path = None;
    if let Some(dir) = log_dir {
        let path = prepare_log_file(app_name, dir)?;
        dispatch = dispatch.chain(fern::log_file(&path)?);
        log_path = Some(path);
    }

    dispatch.apply()?;
    Ok(log_path)
}

/// Creates `log_dir` if needed, deletes old `.log` files, and returns the path
/// for a new timestamped file.
pub fn prepare_log_file(app_name: &str, log_dir: &Path) -> Result<PathBuf, LoggerError> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)?;
    }
    cleanup_old_logs(log_dir)?;

    let log_file_name = format!("{}_{}.log", app_name, chrono::Local::now().format("%Y-%m-%d_%H-%M-%S"));
    Ok(log_dir.join(log_file_name))
}

fn cleanup_old_logs(log_dir: &Path) -> Result<(), LoggerError> {
    let mut entries: Vec<_> = fs::read_dir(log_dir)?
        .filter_map(|res| res.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "log"))
        .filter_map(|e| e.metadata().and_then(|m| m.modified()).ok().map(|t| (t, e.path())))
        .collect();

    // Newest first; the most recent file survives.
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    for (_, path) in entries.iter().skip(1) {
        if let Err(e) = fs::remove_file(path) {
            eprintln!("Failed to delete old log file {:?}: {}", path, e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), log::LevelFilter::Debug);
        assert_eq!(parse_level("fatal"), log::LevelFilter::Error);
        assert_eq!(parse_level("whatever"), log::LevelFilter::Info);
    }

    #[test]
    fn test_prepare_log_file_keeps_only_newest() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let dir = temp_dir.path();

        let older = dir.join("rx_old.log");
        let newer = dir.join("rx_new.log");
        fs::write(&older, "old").unwrap();
        fs::write(&newer, "new").unwrap();
        fs::write(dir.join("notes.txt"), "keep").unwrap();

        let past = SystemTime::now() - Duration::from_secs(3600);
        fs::File::options().write(true).open(&older).unwrap().set_modified(past).unwrap();

        let path = prepare_log_file("rx", dir).unwrap();

        assert!(!older.exists());
        assert!(newer.exists());
        assert!(dir.join("notes.txt").exists());
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("rx_"));
    }

    #[test]
    fn test_prepare_log_file_creates_directory() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let nested = temp_dir.path().join("a").join("b");
        prepare_log_file("rx", &nested).unwrap();
        assert!(nested.is_dir());
    }
}
