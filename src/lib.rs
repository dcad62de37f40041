//! # TripleO Repos Library
//!
//! This library installs the yum repository definitions needed to deploy
//! TripleO from RDO trunk builds. It is used by the `tripleo-repos`
//! command-line tool but can be driven directly by other tooling that needs
//! the same repo set.
//!
//! ## Quick Example
//!
//! ```
//! use tripleo_repos::config::{RepoName, Settings};
//! use tripleo_repos::phases::resolve;
//!
//! let settings = Settings {
//!     branch: "mitaka".to_string(),
//!     ..Settings::new(vec![RepoName::Current])
//! };
//!
//! // Plan the repo files without touching the network
//! let plans = resolve::plan(&settings);
//! assert_eq!(plans.len(), 2);
//! assert_eq!(plans[0].rename.as_deref(), Some("delorean-mitaka"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The requested repo names plus distro,
//!   branch, output directory and mirrors of one run.
//! - **Content (`content`)**: Text-level edits of `.repo` files: mirror
//!   substitution, section renames, `priority=` directives and the locally
//!   built SIG repos.
//! - **Fetching (`fetch`)** and **Packages (`package`)**: The two outside
//!   systems a run talks to, each behind a trait.
//! - **Phases (`phases`)**: The pipeline tying it together.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator::execute`:
//!
//! 1.  **Validation**: Reject combinations such as `current` with
//!     `current-tripleo`, before any I/O.
//! 2.  **Cleanup**: Remove repo files installed by an earlier run.
//! 3.  **Priorities**: Install the yum priorities plugin.
//! 4.  **Resolution**: Fetch or build each repo file and edit it.
//! 5.  **Disk Output**: Write `<section>.repo` files.

pub mod config;
pub mod content;
pub mod defaults;
pub mod error;
pub mod fetch;
pub mod package;
pub mod phases;
