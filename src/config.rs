//! Comparator settings.
//!
//! A [`Config`] is owned by one [`Golden`](crate::Golden) instance; there is no
//! global state. Reading the update flag from the environment only happens when
//! [`Config::from_env`] is called explicitly.

use std::path::{Path, PathBuf};

use crate::discovery;

/// Root used when nothing else is configured, relative to the working directory.
pub const DEFAULT_ROOT: &str = "testdata";

/// Environment variable that enables update mode when set to exactly `1`.
pub const UPDATE_ENV_VAR: &str = "GOLDEN_UPDATE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Overwrite baselines instead of comparing against them.
    pub update: bool,
    /// Directory holding the `.golden` files.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update: false,
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            update: false,
            root: root.into(),
        }
    }

    /// Default config with update mode taken from [`UPDATE_ENV_VAR`].
    pub fn from_env() -> Self {
        Self::default().with_update(update_requested(
            std::env::var(UPDATE_ENV_VAR).ok().as_deref(),
        ))
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Uses the nearest directory called `dir_name` in `start` or one of its
    /// ancestors as the root. Leaves the root alone if there is none.
    pub fn with_discovered_root(mut self, start: &Path, dir_name: &str) -> Self {
        if let Some(found) = discovery::find_ancestor_dir(start, dir_name) {
            tracing::debug!(root = %found.display(), "discovered golden root");
            self.root = found;
        }
        self
    }
}

/// Only the literal value `1` turns update mode on.
pub fn update_requested(value: Option<&str>) -> bool {
    value == Some("1")
}
