//! Orchestrator for a complete run
//!
//! This module sequences all phases behind one call, with the network and
//! the package manager passed in so callers (and tests) choose the
//! implementations.

use std::path::PathBuf;

use super::{phase1, phase2, phase4, phase5};
use crate::config::Settings;
use crate::error::Result;
use crate::fetch::RepoFetcher;
use crate::package::{install_priorities, PackageInstaller};

/// Execute a complete run
///
/// 1. Validate the requested repos against branch and distro
/// 2. Remove repo files installed by earlier runs
/// 3. Install the yum priorities plugin
/// 4. Fetch or build every repo file and apply its edits
/// 5. Write the repo files to `settings.output_path`
///
/// Returns the paths written, in order.
pub fn execute(
    settings: &Settings,
    fetcher: &dyn RepoFetcher,
    installer: &dyn PackageInstaller,
) -> Result<Vec<PathBuf>> {
    // Phase 1: Validation
    phase1::execute(settings)?;

    // Phase 2: Cleanup
    phase2::execute(&settings.output_path)?;

    // Phase 3: Priorities plugin
    install_priorities(installer)?;

    // Phase 4: Resolution
    let repos = phase4::execute(settings, fetcher)?;

    // Phase 5: Write to Disk
    phase5::execute(&repos, &settings.output_path)
}
