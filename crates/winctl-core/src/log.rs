//! Logging setup.
//!
//! Library code emits `tracing` events. [`init`] installs a subscriber that
//! writes them to `~/.config/winctl/logs/winctl.log`; when the file exceeds
//! the configured max size it is rotated to `winctl.log.1` (one backup kept).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "winctl.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Maps a configured level name to a filter directive.
///
/// Unknown names fall back to `info`.
fn level_directive(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// `RUST_LOG` wins over the configured level when set.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_directive(level)))
}

/// Initialises file logging. Call once at startup.
///
/// Does nothing if `config.enabled` is `false` or the log file cannot be
/// opened. Returns whether a subscriber was installed.
pub fn init(config: &LogConfig) -> bool {
    if !config.enabled {
        return false;
    }
    let Some(dir) = crate::config::config_dir() else {
        return false;
    };
    let log_dir = dir.join("logs");
    if fs::create_dir_all(&log_dir).is_err() {
        return false;
    }

    let Ok(file) = RotatingFile::open(log_dir.join(LOG_FILE_NAME), config.max_file_mb) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok()
}

/// Initialises logging to stderr at the given level.
pub fn init_stderr(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}

/// An append-only log file that rotates itself once it grows past a limit.
#[derive(Debug)]
pub struct RotatingFile {
    file: File,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
}

impl RotatingFile {
    /// Opens (or creates) `path` for appending. A `max_file_mb` of zero
    /// disables rotation.
    pub fn open(path: impl Into<PathBuf>, max_file_mb: u64) -> io::Result<Self> {
        Self::with_limit(path, max_file_mb.saturating_mul(1024 * 1024))
    }

    fn with_limit(path: impl Into<PathBuf>, max_bytes: u64) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            file,
            path,
            max_bytes,
            written,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        fs::rename(&self.path, self.backup_path())?;
        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        self.written += n as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            // A failed rotation keeps appending to the current file.
            let _ = self.rotate();
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_directive_falls_back_to_info() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("warn"), "warn");
        assert_eq!(level_directive("loud"), "info");
    }

    #[test]
    fn disabled_config_installs_nothing() {
        assert!(!init(&LogConfig::default()));
    }

    #[test]
    fn rotating_file_keeps_one_backup() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let mut file = RotatingFile::with_limit(&path, 16).unwrap();

        // Act
        file.write_all(b"first line that is long\n").unwrap();
        file.write_all(b"second\n").unwrap();
        file.flush().unwrap();

        // Assert
        let backup = fs::read_to_string(dir.path().join("winctl.log.1")).unwrap();
        let current = fs::read_to_string(&path).unwrap();
        assert_eq!(backup, "first line that is long\n");
        assert_eq!(current, "second\n");
    }

    #[test]
    fn zero_limit_never_rotates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let mut file = RotatingFile::open(&path, 0).unwrap();

        file.write_all(&[b'x'; 4096]).unwrap();

        assert!(!dir.path().join("winctl.log.1").exists());
        assert_eq!(file.path(), path.as_path());
    }

    #[test]
    fn reopening_counts_existing_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, b"0123456789").unwrap();

        let mut file = RotatingFile::with_limit(&path, 12).unwrap();
        file.write_all(b"ab").unwrap();

        assert!(dir.path().join("winctl.log.1").exists());
    }
}
