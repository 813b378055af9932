//! A throwaway directory tree for unit tests that touch `.rakex.toml` files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// Temporary directory tree, removed on drop.
pub struct ConfigTree {
    /// Owned temporary directory.
    root: TempDir,
}

impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` and any missing parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let dir = self.root.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes `.rakex.toml` into `rel` (`""` for the root) and returns its path.
    pub fn config(&self, rel: &str, content: &str) -> PathBuf {
        let config = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&config, content).unwrap();
        config
    }
}
