//! Default values for tripleo-repos configuration.
//!
//! This module provides centralized default values used by the CLI and the
//! library, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Directory yum reads repo definitions from.
pub const DEFAULT_OUTPUT_PATH: &str = "/etc/yum.repos.d";

/// Canonical RDO trunk server.
pub const DEFAULT_RDO_MIRROR: &str = "https://trunk.rdoproject.org";

/// Canonical CentOS mirror.
pub const DEFAULT_CENTOS_MIRROR: &str = "http://mirror.centos.org";

pub const DEFAULT_DISTRO: &str = "centos7";

pub const DEFAULT_BRANCH: &str = "master";

/// Distros with published trunk repos.
pub const SUPPORTED_DISTROS: &[&str] = &["centos7"];

/// Host the RDO trunk repos point at.
pub const RDO_HOST: &str = "trunk.rdoproject.org";

/// Host the CentOS repos point at.
pub const CENTOS_HOST: &str = "mirror.centos.org";

/// Package manager used to install the priorities plugin.
pub const DEFAULT_PACKAGE_MANAGER: &str = "yum";

/// Plugin that makes yum honour `priority=` directives.
pub const PRIORITIES_PACKAGE: &str = "yum-plugin-priorities";

/// HTTP timeout for repo fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Packages allowed from the `current` repo when layered under
/// `current-tripleo-dev`.
pub const INCLUDE_PKGS: &str = "includepkgs=instack,instack-undercloud,\
os-apply-config,os-collect-config,os-net-config,\
os-refresh-config,python-tripleoclient,\
openstack-tripleo-common*,openstack-tripleo-heat-templates,\
openstack-tripleo-image-elements,openstack-tripleo,\
openstack-tripleo-puppet-elements,openstack-puppet-modules,\
openstack-tripleo-ui,puppet-*";

/// Returns the default output directory as a path.
pub fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}
