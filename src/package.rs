//! Host package manager invocation
//!
//! yum ignores `priority=` directives unless the priorities plugin is
//! installed, so the plugin is installed before any repo is written. The
//! `PackageInstaller` trait keeps the real package manager out of tests.

use std::process::Command;

use crate::defaults::{DEFAULT_PACKAGE_MANAGER, PRIORITIES_PACKAGE};
use crate::error::{Error, Result};

/// Trait for installing OS packages - allows mocking in tests
pub trait PackageInstaller {
    fn install(&self, packages: &[&str]) -> Result<()>;
}

/// Installs the yum priorities plugin, passing any failure through.
pub fn install_priorities(installer: &dyn PackageInstaller) -> Result<()> {
    installer.install(&[PRIORITIES_PACKAGE]).inspect_err(|e| {
        log::error!("Failed to install {}: {}", PRIORITIES_PACKAGE, e);
    })
}

/// Runs `<program> install -y <packages...>` on the host.
///
/// The child inherits stdio so the package manager's own progress output
/// reaches the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstaller {
    program: String,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self, packages: &[&str]) -> String {
        let mut parts = vec![self.program.as_str(), "install", "-y"];
        parts.extend_from_slice(packages);
        parts.join(" ")
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGER)
    }
}

impl PackageInstaller for CommandInstaller {
    fn install(&self, packages: &[&str]) -> Result<()> {
        let command = self.command_line(packages);
        log::debug!("Running {}", command);

        let status = Command::new(&self.program)
            .args(["install", "-y"])
            .args(packages)
            .status()
            .map_err(|e| Error::PackageManager {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::PackageManager {
                command,
                message: status.to_string(),
            });
        }

        Ok(())
    }
}
