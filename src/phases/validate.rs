//! Phase 1: Validation
//!
//! Some repo selections overlap or only exist for the development branch.
//! This phase rejects such requests up front, before anything is deleted,
//! installed or downloaded.

use crate::config::{RepoName, Settings};
use crate::defaults::SUPPORTED_DISTROS;
use crate::error::{Error, Result};

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidArguments {
        message: message.into(),
    }
}

/// Execute Phase 1: check that `settings` describes an installable set
pub fn execute(settings: &Settings) -> Result<()> {
    if settings.repos.is_empty() {
        return Err(invalid("At least one repo must be specified"));
    }

    if settings.wants(RepoName::Current) && settings.wants(RepoName::CurrentTripleo) {
        return Err(invalid(
            "Cannot use \"current\" and \"current-tripleo\" together",
        ));
    }

    if settings.wants(RepoName::CurrentTripleoDev) {
        if settings.wants(RepoName::Current) {
            return Err(invalid(
                "Cannot use \"current\" with \"current-tripleo-dev\"",
            ));
        }
        if settings.wants(RepoName::Deps) {
            return Err(invalid(
                "current-tripleo-dev includes \"deps\", do not pass it explicitly",
            ));
        }
        if !settings.is_master() {
            return Err(invalid(
                "Cannot use current-tripleo-dev on any branch except master",
            ));
        }
    }

    if settings.wants(RepoName::CurrentTripleo) && !settings.is_master() {
        return Err(invalid(
            "Cannot use current-tripleo on any branch except master",
        ));
    }

    if !SUPPORTED_DISTROS.contains(&settings.distro.as_str()) {
        return Err(invalid(format!(
            "{} is not a supported distro, use one of: {}",
            settings.distro,
            SUPPORTED_DISTROS.join(", ")
        )));
    }

    Ok(())
}
