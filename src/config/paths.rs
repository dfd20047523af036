//! Filesystem paths for ledger data
//!
//! Resolves where the ledger file lives. The data directory can be overridden
//! with the `KITCHEN_LEDGER_DATA_DIR` environment variable, which is also how
//! the integration tests point the binary at a temp directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KitchenError, KitchenResult};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "KITCHEN_LEDGER_DATA_DIR";

/// Resolved filesystem layout for the application
#[derive(Debug, Clone)]
pub struct KitchenPaths {
    base_dir: PathBuf,
}

impl KitchenPaths {
    /// Resolve paths from the environment
    ///
    /// Order: `KITCHEN_LEDGER_DATA_DIR`, then `XDG_DATA_HOME/kitchen-ledger`,
    /// then `~/.local/share/kitchen-ledger`.
    pub fn resolve() -> KitchenResult<Self> {
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            return Ok(Self {
                base_dir: PathBuf::from(dir),
            });
        }

        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            if !xdg.is_empty() {
                return Ok(Self {
                    base_dir: Path::new(&xdg).join("kitchen-ledger"),
                });
            }
        }

        let home = env::var("HOME")
            .map_err(|_| KitchenError::Config("Cannot determine home directory".into()))?;
        Ok(Self {
            base_dir: Path::new(&home)
                .join(".local")
                .join("share")
                .join("kitchen-ledger"),
        })
    }

    /// Build paths rooted at an explicit directory (used by tests)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The data directory itself
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// Create the data directory if it does not exist
    pub fn ensure_dirs(&self) -> KitchenResult<()> {
        fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = KitchenPaths::with_base_dir("/tmp/kitchen-test");
        assert_eq!(
            paths.ledger_file(),
            PathBuf::from("/tmp/kitchen-test/ledger.json")
        );
    }

    #[test]
    fn test_ensure_dirs_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("nested").join("data");
        let paths = KitchenPaths::with_base_dir(&base);
        paths.ensure_dirs().unwrap();
        assert!(base.is_dir());
    }
}
