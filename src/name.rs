//! Mapping test identifiers to baseline paths.
//!
//! An identifier may contain `/` to nest baselines in directories mirroring
//! the test layout, but it must stay inside the configured root.

use std::path::{Component, Path, PathBuf};

use crate::errors::{GoldenError, Result};

/// File extension of every baseline.
pub const GOLDEN_EXTENSION: &str = "golden";

/// Checks that `name` is a non-empty, relative path made only of normal
/// segments.
pub fn validate(name: &str) -> Result<()> {
    let invalid = |reason| GoldenError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.contains('\0') {
        return Err(invalid("name contains a NUL byte"));
    }
    if name.ends_with('/') || name.ends_with('\\') {
        return Err(invalid("name ends with a path separator"));
    }
    if name.split(['/', '\\']).any(str::is_empty) {
        return Err(invalid("name contains an empty path segment"));
    }

    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => {}
            Component::CurDir | Component::ParentDir => {
                return Err(invalid("name must not contain `.` or `..` segments"))
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("name must be a relative path"))
            }
        }
    }
    Ok(())
}

/// `<root>/<name>.golden`, after validating `name`.
pub fn baseline_path(root: &Path, name: &str) -> Result<PathBuf> {
    validate(name)?;
    Ok(root.join(format!("{name}.{GOLDEN_EXTENSION}")))
}

/// Inverse of [`baseline_path`]: the identifier for a baseline found under
/// `root`, or `None` if `path` is not a baseline inside it.
pub fn name_from_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    if relative.extension()? != GOLDEN_EXTENSION {
        return None;
    }
    let stem = relative.with_extension("");
    let segments = stem
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}
