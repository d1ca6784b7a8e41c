//! Locating golden roots and the baselines stored in them.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::Result;
use crate::name;

/// Searches `start` and then each of its ancestors for a directory named
/// `dir_name`, returning the first match.
pub fn find_ancestor_dir(start: &Path, dir_name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(dir_name))
        .find(|candidate| candidate.is_dir())
}

/// Recursively lists every baseline under `root` as a test identifier.
///
/// The list is sorted so output is stable between runs. A missing root yields
/// an empty list.
pub fn list_baselines(root: &Path) -> Result<Vec<String>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = name::name_from_path(root, entry.path()) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
