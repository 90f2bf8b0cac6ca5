//! # Service Configuration
//!
//! Paths for the two durable stores: the staging buffer file and the
//! SQLite ledger.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FORNO_*`)
//! 2. Platform data directory (via `directories`)
//! 3. Current directory (last-resort fallback)
//!
//! ## Thread Safety
//! Configuration is read-only after construction, so no mutex needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Legacy name of the staging buffer file.
pub const DEFAULT_CART_FILE: &str = "pedidos.txt";

/// Default name of the SQLite ledger file.
pub const DEFAULT_DB_FILE: &str = "forno.db";

/// Where the service keeps its durable state.
///
/// ## Platform-Specific Defaults
/// - **macOS**: `~/Library/Application Support/com.forno.pos/`
/// - **Windows**: `%APPDATA%\forno\pos\`
/// - **Linux**: `~/.local/share/forno-pos/`
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding both files when no explicit paths are set.
    pub data_dir: PathBuf,

    /// Path of the pending-order buffer file.
    pub cart_path: PathBuf,

    /// Path of the SQLite database file.
    pub database_path: PathBuf,
}

impl Config {
    /// Builds a config rooted at an explicit data directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        Config {
            cart_path: data_dir.join(DEFAULT_CART_FILE),
            database_path: data_dir.join(DEFAULT_DB_FILE),
            data_dir,
        }
    }

    /// Builds a config from the environment and platform defaults.
    ///
    /// ## Environment Variables
    /// - `FORNO_DATA_DIR`: Override the data directory
    /// - `FORNO_CART_PATH`: Override the buffer file path alone
    /// - `FORNO_DB_PATH`: Override the database file path alone
    pub fn from_env() -> Self {
        let data_dir = std::env::var("FORNO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let mut config = Config::in_dir(data_dir);

        if let Ok(path) = std::env::var("FORNO_CART_PATH") {
            config.cart_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("FORNO_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }

        config
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)
    }

    /// Path of the pending-order buffer file.
    pub fn cart_path(&self) -> &Path {
        &self.cart_path
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::in_dir(default_data_dir())
    }
}

/// Platform data directory, falling back to the current directory when
/// the platform gives us nothing (e.g. stripped-down containers).
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "forno", "pos")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_derives_both_paths() {
        let config = Config::in_dir("/tmp/forno-test");
        assert_eq!(config.cart_path(), Path::new("/tmp/forno-test/pedidos.txt"));
        assert_eq!(
            config.database_path(),
            Path::new("/tmp/forno-test/forno.db")
        );
    }
}
