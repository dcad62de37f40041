//! CLI argument parsing and dispatch

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use url::Url;

use tripleo_repos::config::{RepoName, Settings};
use tripleo_repos::defaults;
use tripleo_repos::fetch::HttpFetcher;
use tripleo_repos::package::CommandInstaller;
use tripleo_repos::phases::orchestrator;

/// Download and install yum repo files for TripleO
///
/// REPO is one or more of: current, deps, current-tripleo,
/// current-tripleo-dev, ceph, opstools.
#[derive(Parser, Debug)]
#[command(name = "tripleo-repos")]
#[command(version, about)]
pub struct Cli {
    /// Repos to install
    #[arg(value_name = "REPO", required = true)]
    repos: Vec<RepoName>,

    /// Target distro
    #[arg(short, long, default_value = defaults::DEFAULT_DISTRO)]
    distro: String,

    /// Target branch (master, or a stable release such as mitaka)
    #[arg(short, long, default_value = defaults::DEFAULT_BRANCH)]
    branch: String,

    /// Directory in which to save the selected repos
    #[arg(short, long, value_name = "PATH", default_value = defaults::DEFAULT_OUTPUT_PATH)]
    output_path: PathBuf,

    /// Server from which to install base OpenStack packages
    #[arg(
        long,
        value_name = "URL",
        env = "TRIPLEO_REPOS_RDO_MIRROR",
        default_value = defaults::DEFAULT_RDO_MIRROR,
        value_parser = parse_mirror
    )]
    rdo_mirror: String,

    /// Server from which to install CentOS packages
    #[arg(
        long,
        value_name = "URL",
        env = "TRIPLEO_REPOS_CENTOS_MIRROR",
        default_value = defaults::DEFAULT_CENTOS_MIRROR,
        value_parser = parse_mirror
    )]
    centos_mirror: String,

    /// Package manager used to install the priorities plugin
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "TRIPLEO_REPOS_PACKAGE_MANAGER",
        default_value = defaults::DEFAULT_PACKAGE_MANAGER
    )]
    package_manager: String,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = defaults::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

/// Accepts absolute http(s) URLs, returned without a trailing slash.
fn parse_mirror(value: &str) -> std::result::Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL '{}': {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim_end_matches('/').to_string()),
        scheme => Err(format!("unsupported scheme '{}' in '{}'", scheme, value)),
    }
}

impl Cli {
    /// Settings for the library pipeline.
    fn settings(&self) -> Settings {
        Settings {
            repos: self.repos.clone(),
            distro: self.distro.clone(),
            branch: self.branch.clone(),
            output_path: self.output_path.clone(),
            rdo_mirror: self.rdo_mirror.clone(),
            centos_mirror: self.centos_mirror.clone(),
        }
    }

    fn init_logging(&self) {
        // RUST_LOG wins over --log-level when set
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .format_timestamp(None)
        .format_target(false)
        .init();
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let settings = self.settings();
        let fetcher = HttpFetcher::new(Duration::from_secs(self.timeout))?;
        let installer = CommandInstaller::new(&self.package_manager);

        let written = orchestrator::execute(&settings, &fetcher, &installer)?;
        log::debug!("Wrote {} repo file(s)", written.len());
        Ok(())
    }
}
