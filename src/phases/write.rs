//! Phase 5: Writing to Disk
//!
//! This is the final phase of a run. Each resolved repo file is written to
//! `<output>/<title>.repo`, replacing any file of that name. The output
//! directory is expected to exist; Phase 2 has already listed it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::RepoFile;
use crate::error::{Error, Result};

/// Writes one repo file into `output_path` and returns its path.
pub fn write_repo(repo: &RepoFile, output_path: &Path) -> Result<PathBuf> {
    let full_path = output_path.join(repo.file_name());

    fs::write(&full_path, repo.content()).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", full_path.display(), e),
    })?;

    log::info!("Installed repo {} to {}", repo.title(), full_path.display());
    Ok(full_path)
}

/// Execute Phase 5: write every repo file, in order
pub fn execute(repos: &[RepoFile], output_path: &Path) -> Result<Vec<PathBuf>> {
    repos
        .iter()
        .map(|repo| write_repo(repo, output_path))
        .collect()
}
