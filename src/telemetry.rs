//! Tracing setup.
//!
//! The TUI owns stdout, so events go to `~/.kizuna/kizuna.log`. `RUST_LOG`
//! overrides the default filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "kizuna=info";
pub const LOG_FILE_NAME: &str = "kizuna.log";

/// `~/.kizuna`, if a home directory exists.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kizuna"))
}

fn env_filter() -> EnvFilter {
    std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log(dir: &Path) -> std::io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to `dir/kizuna.log`. Returns the
/// log path, or `None` when the file could not be opened and logging is
/// off. Later calls are no-ops.
pub fn init_tracing(dir: Option<&Path>) -> Option<PathBuf> {
    let dir = dir.map(Path::to_path_buf).or_else(data_dir)?;
    let file = open_log(&dir).ok()?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Some(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested");
        open_log(&dir).unwrap();
        assert!(dir.join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn test_init_tracing_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = init_tracing(Some(tmp.path())).unwrap();
        assert_eq!(path, tmp.path().join(LOG_FILE_NAME));
        tracing::info!("logged");
    }
}
