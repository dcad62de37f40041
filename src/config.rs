//! # Run Configuration
//!
//! This module defines the values a run of `tripleo-repos` is parameterized
//! by: which named repos were requested, which distro/branch they are for,
//! where the resulting `.repo` files go, and which mirrors to point them at.
//!
//! ## Key Components
//!
//! - **`RepoName`**: The fixed set of repo selections a user can ask for.
//!   Parsed from the names used on the command line.
//!
//! - **`Settings`**: Everything one run needs. Built once from the command
//!   line (or by library callers) and never mutated afterwards.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::defaults;
use crate::error::Error;

/// A named repo selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoName {
    /// Latest trunk build of the branch.
    Current,
    /// Dependency repo of the branch.
    Deps,
    /// Trunk build that last passed TripleO CI.
    CurrentTripleo,
    /// `current-tripleo` with TripleO packages layered from `current`.
    CurrentTripleoDev,
    /// CentOS Storage SIG ceph repo.
    Ceph,
    /// CentOS OpsTools SIG repo.
    Opstools,
}

impl RepoName {
    /// Every selection, in the order they are documented.
    pub const ALL: [RepoName; 6] = [
        RepoName::Current,
        RepoName::Deps,
        RepoName::CurrentTripleo,
        RepoName::CurrentTripleoDev,
        RepoName::Ceph,
        RepoName::Opstools,
    ];

    /// The name as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoName::Current => "current",
            RepoName::Deps => "deps",
            RepoName::CurrentTripleo => "current-tripleo",
            RepoName::CurrentTripleoDev => "current-tripleo-dev",
            RepoName::Ceph => "ceph",
            RepoName::Opstools => "opstools",
        }
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepoName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::InvalidArguments {
                message: format!("Invalid repo \"{}\" specified", s),
            })
    }
}

/// Parameters of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Requested repos, in the order given.
    pub repos: Vec<RepoName>,
    /// Target distro, e.g. `centos7`.
    pub distro: String,
    /// OpenStack branch, e.g. `master` or `mitaka`.
    pub branch: String,
    /// Directory the `.repo` files are written to.
    pub output_path: PathBuf,
    /// Base URL replacing `https://trunk.rdoproject.org`.
    pub rdo_mirror: String,
    /// Base URL replacing `http://mirror.centos.org`.
    pub centos_mirror: String,
}

impl Settings {
    /// Settings for `repos` with every other field at its default.
    pub fn new(repos: Vec<RepoName>) -> Self {
        Self {
            repos,
            distro: defaults::DEFAULT_DISTRO.to_string(),
            branch: defaults::DEFAULT_BRANCH.to_string(),
            output_path: defaults::default_output_path(),
            rdo_mirror: defaults::DEFAULT_RDO_MIRROR.to_string(),
            centos_mirror: defaults::DEFAULT_CENTOS_MIRROR.to_string(),
        }
    }

    /// Whether the run targets the development branch.
    pub fn is_master(&self) -> bool {
        self.branch == defaults::DEFAULT_BRANCH
    }

    /// Whether `name` was requested.
    pub fn wants(&self, name: RepoName) -> bool {
        self.repos.contains(&name)
    }

    /// URL prefix the trunk repo files live under.
    ///
    /// `<rdo_mirror>/<distro>/` on master, `<rdo_mirror>/<distro>-<branch>/`
    /// for stable branches.
    pub fn base_path(&self) -> String {
        let distro_branch = if self.is_master() {
            self.distro.clone()
        } else {
            format!("{}-{}", self.distro, self.branch)
        };
        format!("{}/{}/", self.rdo_mirror.trim_end_matches('/'), distro_branch)
    }
}
