//! The comparator: records baselines in update mode, checks against them
//! otherwise.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::diff::unified_diff;
use crate::discovery;
use crate::errors::{GoldenError, Result};
use crate::escape::escape;
use crate::name;
use crate::normalize::normalize;
use crate::output::Output;

// ============================================================================
// CONSTANTS AND TYPES
// ============================================================================

/// Label of the stored side in rendered diffs.
pub const GOLDEN_LABEL: &str = "golden";
/// Label of the current run in rendered diffs.
pub const RUN_LABEL: &str = "run";

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// What a successful call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The output matched the stored baseline.
    Matched,
    /// Update mode was on and the baseline was (re)written.
    Updated,
}

/// A golden-file comparator with its own settings.
///
/// Settings are read on every call, so flipping update mode between calls
/// takes effect immediately.
#[derive(Debug, Clone, Default)]
pub struct Golden {
    config: Config,
}

impl Golden {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Comparator configured from the environment, see [`Config::from_env`].
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn update_mode(&self) -> bool {
        self.config.update
    }

    pub fn set_update(&mut self, update: bool) {
        self.config.update = update;
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.config.root = root.into();
    }

    /// Resolves the baseline path for `name`, using `root` for this call only
    /// when given.
    pub fn path_for(&self, name: &str, root: Option<&Path>) -> Result<PathBuf> {
        let root = root.unwrap_or(self.config.root.as_path());
        let path = name::baseline_path(root, name)?;
        tracing::debug!(test = name, path = %path.display(), "resolved golden path");
        Ok(path)
    }

    /// Compares `output` with the baseline for `name` under the configured
    /// root, or rewrites the baseline in update mode.
    pub fn check<'a>(&self, name: &str, output: impl Into<Output<'a>>) -> Result<Outcome> {
        self.check_in(name, output, None)
    }

    /// Like [`Golden::check`] with an optional root override for this call.
    pub fn check_in<'a>(
        &self,
        name: &str,
        output: impl Into<Output<'a>>,
        root: Option<&Path>,
    ) -> Result<Outcome> {
        let output = output.into();
        let path = self.path_for(name, root)?;

        if self.config.update {
            write_baseline(&path, output.as_bytes())?;
            return Ok(Outcome::Updated);
        }

        compare(&path, output)?;
        Ok(Outcome::Matched)
    }

    /// Writes the baseline for `name` whatever the update setting is.
    pub fn update<'a>(
        &self,
        name: &str,
        output: impl Into<Output<'a>>,
        root: Option<&Path>,
    ) -> Result<PathBuf> {
        let path = self.path_for(name, root)?;
        write_baseline(&path, output.into().as_bytes())?;
        Ok(path)
    }

    /// Panicking form of [`Golden::check`] for use directly in tests.
    #[track_caller]
    pub fn assert<'a>(&self, name: &str, output: impl Into<Output<'a>>) {
        self.assert_in(name, output, None)
    }

    /// Panicking form of [`Golden::check_in`].
    #[track_caller]
    pub fn assert_in<'a>(&self, name: &str, output: impl Into<Output<'a>>, root: Option<&Path>) {
        if let Err(err) = self.check_in(name, output, root) {
            panic!("{err}");
        }
    }

    /// Every baseline stored under the root, as sorted test identifiers.
    pub fn baselines(&self, root: Option<&Path>) -> Result<Vec<String>> {
        discovery::list_baselines(root.unwrap_or(self.config.root.as_path()))
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

/// Loads the baseline at `path` and compares it with `output`.
fn compare(path: &Path, output: Output<'_>) -> Result<()> {
    let stored = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "golden file missing");
            return Err(GoldenError::MissingBaseline {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let stored = String::from_utf8_lossy(&stored);
    let expected = escape(&normalize(&stored));
    let actual = escape(&output.to_text());

    if expected == actual {
        tracing::debug!(path = %path.display(), "golden file matched");
        return Ok(());
    }

    tracing::warn!(path = %path.display(), "golden file mismatch");
    let diff = unified_diff(GOLDEN_LABEL, RUN_LABEL, &expected, &actual);
    Err(GoldenError::Mismatch {
        path: path.to_path_buf(),
        expected,
        actual,
        diff,
    })
}

// ============================================================================
// BASELINE WRITING
// ============================================================================

/// Replaces the baseline at `path` with `bytes`, creating parent directories.
fn write_baseline(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dirs(parent)?;
    }
    write_file(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "golden file updated");
    Ok(())
}

#[cfg(unix)]
fn create_dirs(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dirs(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)?;
    // The mode above only applies to newly created files.
    file.set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}
