//! Shared test utilities for CLI E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.command("http://127.0.0.1:9").arg("ceph").assert().success();
//! }
//! ```

use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{repos, TestFixture, UNREACHABLE_MIRROR};
}

/// Mirror URL nothing listens on; any fetch against it fails.
pub const UNREACHABLE_MIRROR: &str = "http://127.0.0.1:9";

/// Repo file bodies served by the mock mirror.
#[allow(dead_code)]
pub mod repos {
    pub const CURRENT: &str = "[delorean]
name=delorean-openstack-current
baseurl=https://trunk.rdoproject.org/centos7/a1/b2/a1b2c3_d4e5f6
enabled=1
gpgcheck=0
priority=1
";

    pub const TRIPLEO: &str = "[delorean]
name=delorean-openstack-current-tripleo
baseurl=https://trunk.rdoproject.org/centos7/f6/e5/f6e5d4_c3b2a1
enabled=1
gpgcheck=0
";

    pub const DEPS: &str = "[delorean-master-testing]
name=dlrn-master-testing
baseurl=https://trunk.rdoproject.org/centos7-master/deps/latest/
enabled=1
gpgcheck=0

[rdo-qemu-ev]
name=RDO CentOS-7 - QEMU EV
baseurl=http://mirror.centos.org/centos/7/virt/$basearch/kvm-common/
gpgcheck=0
enabled=1
";
}

/// A temporary output directory for installed repo files.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given name and content.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.temp_dir
            .child(name)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(name)
    }

    /// Read an installed repo file.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("Failed to read repo file")
    }

    /// The binary, writing into this fixture, with `rdo_mirror` as RDO mirror
    /// and a package manager that always succeeds.
    pub fn command(&self, rdo_mirror: &str) -> Command {
        self.command_with_package_manager(rdo_mirror, "true")
    }

    /// Like `command`, installing packages with `package_manager`.
    pub fn command_with_package_manager(&self, rdo_mirror: &str, package_manager: &str) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tripleo-repos");
        cmd.env_remove("RUST_LOG")
            .env_remove("TRIPLEO_REPOS_CENTOS_MIRROR")
            .arg("--output-path")
            .arg(self.path())
            .arg("--rdo-mirror")
            .arg(rdo_mirror)
            .arg("--package-manager")
            .arg(package_manager)
            .arg("--timeout")
            .arg("5");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
