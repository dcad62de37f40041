//! Implementation of the phases of a tripleo-repos run.
//!
//! ## Overview
//!
//! A run follows 5 phases:
//! 1. Validation - Reject repo/branch/distro combinations that cannot work
//! 2. Cleanup - Remove repo files installed by earlier runs
//! 3. Priorities - Install the yum priorities plugin
//! 4. Resolution - Plan which repo files to fetch or build and transform them
//! 5. Writing to Disk - Install the resulting `.repo` files
//!
//! Validation touches nothing outside the process, so a bad invocation fails
//! before the network, the package manager or the output directory is used.

// Phase modules
pub mod cleanup;
pub mod orchestrator;
pub mod resolve;
pub mod validate;
pub mod write;

// Re-export phase modules by position in the pipeline
pub use cleanup as phase2;
pub use resolve as phase4;
pub use validate as phase1;
pub use write as phase5;

/// Where the text of a planned repo comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// Downloaded from this URL, then pointed at the configured mirrors
    Remote(String),
    /// Generated locally, used as is
    Local(String),
}

/// One repo file to produce, and the edits applied to its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPlan {
    pub source: RepoSource,
    /// New name for every section title
    pub rename: Option<String>,
    /// Line added after the fetched text
    pub append: Option<String>,
    /// Value for the `priority=` directive
    pub priority: Option<u32>,
}

impl RepoPlan {
    pub fn remote(url: impl Into<String>) -> Self {
        Self::from_source(RepoSource::Remote(url.into()))
    }

    pub fn local(content: impl Into<String>) -> Self {
        Self::from_source(RepoSource::Local(content.into()))
    }

    fn from_source(source: RepoSource) -> Self {
        Self {
            source,
            rename: None,
            append: None,
            priority: None,
        }
    }

    pub fn renamed(mut self, title: impl Into<String>) -> Self {
        self.rename = Some(title.into());
        self
    }

    pub fn appending(mut self, line: impl Into<String>) -> Self {
        self.append = Some(line.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// URL this plan downloads, if any.
    pub fn url(&self) -> Option<&str> {
        match &self.source {
            RepoSource::Remote(url) => Some(url),
            RepoSource::Local(_) => None,
        }
    }
}
