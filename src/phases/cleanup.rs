//! Phase 2: Cleanup
//!
//! Repo files left behind by an earlier run would otherwise stay enabled next
//! to the new ones (for example a `delorean-mitaka.repo` after switching to
//! master). Every file whose name this tool could have produced is removed;
//! anything else in the directory is left alone.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};

/// File names this tool installs.
const MANAGED_REPO_PATTERN: &str = r"^(delorean|tripleo-centos-(opstools|ceph)).*\.repo$";

fn managed_repo_regex() -> Result<Regex> {
    Ok(Regex::new(MANAGED_REPO_PATTERN)?)
}

/// Execute Phase 2: remove managed repo files from `output_path`
///
/// Returns the removed paths in name order.
pub fn execute(output_path: &Path) -> Result<Vec<PathBuf>> {
    let regex = managed_repo_regex()?;

    let entries = fs::read_dir(output_path).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to read directory '{}': {}",
            output_path.display(),
            e
        ),
    })?;

    let mut stale = Vec::new();
    for entry in entries {
        let entry = entry?;
        let is_file = entry.file_type()?.is_file();
        if is_file && regex.is_match(&entry.file_name().to_string_lossy()) {
            stale.push(entry.path());
        }
    }
    stale.sort();

    for path in &stale {
        fs::remove_file(path).map_err(|e| Error::Filesystem {
            message: format!("Failed to remove '{}': {}", path.display(), e),
        })?;
        log::info!("Removed old repo \"{}\"", path.display());
    }

    Ok(stale)
}
