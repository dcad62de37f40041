//! Repo file content handling
//!
//! This module holds the text-level transformations applied to `.repo` files
//! between fetching and writing them. Repo files are INI-style, but nothing
//! here parses INI: each transformation only needs to locate a `[section]`
//! title, a `baseurl=` line or a `priority=` line, and does so with a regular
//! expression.
//!
//! ## Submodules
//!
//! - `mirror` - point `baseurl=` lines at configured mirrors
//! - `priority` - set the yum `priority=` directive
//! - `template` - repos that are built locally instead of fetched
//!
//! ## Repo files
//!
//! `RepoFile` is the unit handed to the writer. It can only be built from text
//! that carries a section title, because the title also names the file on disk.

pub mod mirror;
pub mod priority;
pub mod template;

use regex::Regex;

use crate::error::{Error, Result};

/// Matches a section title line, capturing the name.
const TITLE_PATTERN: &str = r"(?m)^[ \t]*\[([^\]\r\n]+)\]";

/// Returns the name of the first `[section]` in `content`, if any.
pub fn repo_title(content: &str) -> Result<Option<String>> {
    let regex = Regex::new(TITLE_PATTERN)?;
    Ok(regex
        .captures(content)
        .map(|caps| caps[1].trim().to_string()))
}

/// Renames every section title in `content` to `title`.
///
/// Everything outside the brackets, including indentation before the title
/// and the rest of the file, is left as is.
pub fn rename_sections(content: &str, title: &str) -> Result<String> {
    let regex = Regex::new(r"(?m)^([ \t]*)\[[^\]\r\n]+\]")?;
    Ok(regex
        .replace_all(content, |caps: &regex::Captures| {
            format!("{}[{}]", &caps[1], title)
        })
        .into_owned())
}

/// Whether `<title>.repo` stays a plain entry of the output directory.
fn is_file_name(title: &str) -> bool {
    !title.is_empty() && !title.contains(['/', '\\', '\0']) && !title.contains("..")
}

/// A repo definition ready to be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFile {
    title: String,
    content: String,
}

impl RepoFile {
    /// Wraps `content`, failing with `NoRepoTitle` when it has no section and
    /// with `InvalidRepoTitle` when the title cannot name a file on its own.
    pub fn parse(content: String) -> Result<Self> {
        match repo_title(&content)? {
            Some(title) if is_file_name(&title) => Ok(Self { title, content }),
            Some(title) => Err(Error::InvalidRepoTitle { title }),
            None => Err(Error::NoRepoTitle { content }),
        }
    }

    /// Name of the first section.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name the repo is installed under.
    pub fn file_name(&self) -> String {
        format!("{}.repo", self.title)
    }
}
