//! # Error Handling
//!
//! This module defines the centralized error type for `tripleo-repos`. It
//! uses `thiserror` to derive a single `Error` enum covering every failure the
//! pipeline can surface, each variant carrying enough context to explain what
//! went wrong without a backtrace.
//!
//! The failure classes are:
//!
//! - Invalid repo selections, branch or distro, raised before any I/O.
//! - HTTP fetches that answered with a non-success status.
//! - Transport failures while talking to a mirror.
//! - Repo content without a `[section]` title, raised before writing.
//! - Repo titles that would not name a plain file in the output directory.
//! - Package manager invocations that could not run or exited non-zero.
//! - Filesystem and I/O errors.
//!
//! The `Result` alias is used throughout the library.

use thiserror::Error;

/// Main error type for tripleo-repos operations
#[derive(Error, Debug)]
pub enum Error {
    /// The requested repos, branch or distro cannot be used together.
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// A repo file was requested over HTTP and the server did not answer 2xx.
    #[error("Failed to fetch {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },

    /// An error occurred during a network operation.
    #[error("Network operation error: {url} - {message}")]
    Network { url: String, message: String },

    /// Repo content does not contain any `[section]` title.
    #[error("Could not find repo title in:\n{content}")]
    NoRepoTitle { content: String },

    /// A repo title that cannot be used as a file name in the output directory.
    #[error("Invalid repo title \"{title}\": not usable as a file name")]
    InvalidRepoTitle { title: String },

    /// The package manager could not be started or reported failure.
    #[error("Package manager command failed: {command} - {message}")]
    PackageManager { command: String, message: String },

    /// An error occurred while touching the output directory.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
