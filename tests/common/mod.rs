//! Shared helpers for goldmaster integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use goldmaster::{Config, Golden};
use tempfile::TempDir;

/// A comparator rooted in a fresh temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub golden: Golden,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let golden = Golden::new(Config::new(dir.path()));
        Self { dir, golden }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(format!("{name}.golden"))
    }

    /// Writes a baseline directly, bypassing the comparator.
    pub fn seed(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write baseline");
        path
    }
}
