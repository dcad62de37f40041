//! Phase 4: Resolution
//!
//! Turns the requested repo names into the repo files to install. This is
//! done in two steps:
//!
//! 1.  **Planning**: Each requested name expands, in request order, into one
//!     or more `RepoPlan`s saying where the text comes from (a URL under the
//!     branch's base path, or a local template) and how it is edited (section
//!     rename, appended line, priority). Trunk repos pull in the branch's deps
//!     repo; it is planned at most once per run.
//!
//! 2.  **Materializing**: Each plan is fetched or built, pointed at the
//!     configured mirrors, edited, and checked for a section title.
//!
//! Every plan is materialized before anything is written, so a failed fetch
//! or a malformed file leaves the output directory without half a set.

use crate::config::{RepoName, Settings};
use crate::content::mirror::MirrorMap;
use crate::content::priority::change_priority;
use crate::content::{rename_sections, template, RepoFile};
use crate::defaults::INCLUDE_PKGS;
use crate::error::Result;
use crate::fetch::RepoFetcher;

use super::{RepoPlan, RepoSource};

/// Priority of the `current-tripleo` layer under `current-tripleo-dev`.
const TRIPLEO_DEV_BASE_PRIORITY: u32 = 20;

/// Priority of the `current` packages layered on top.
const TRIPLEO_DEV_OVERLAY_PRIORITY: u32 = 10;

/// Builds the ordered list of repo files `settings` asks for.
pub fn plan(settings: &Settings) -> Vec<RepoPlan> {
    let base_path = settings.base_path();
    let current_url = format!("{}current/delorean.repo", base_path);
    let tripleo_url = format!("{}current-tripleo/delorean.repo", base_path);

    let mut plans = Vec::new();
    let mut deps_planned = false;
    let mut deps = |plans: &mut Vec<RepoPlan>| {
        if !deps_planned {
            plans.push(RepoPlan::remote(format!("{}delorean-deps.repo", base_path)));
            deps_planned = true;
        }
    };

    for repo in &settings.repos {
        match repo {
            RepoName::Current => {
                let title = if settings.is_master() {
                    "delorean".to_string()
                } else {
                    format!("delorean-{}", settings.branch)
                };
                plans.push(RepoPlan::remote(&current_url).renamed(title));
                deps(&mut plans);
            }
            RepoName::Deps => deps(&mut plans),
            RepoName::CurrentTripleo => {
                plans.push(RepoPlan::remote(&tripleo_url));
                deps(&mut plans);
            }
            RepoName::CurrentTripleoDev => {
                deps(&mut plans);
                plans.push(
                    RepoPlan::remote(&tripleo_url)
                        .renamed("delorean-current-tripleo")
                        .with_priority(TRIPLEO_DEV_BASE_PRIORITY),
                );
                plans.push(
                    RepoPlan::remote(&current_url)
                        .renamed("delorean")
                        .appending(INCLUDE_PKGS)
                        .with_priority(TRIPLEO_DEV_OVERLAY_PRIORITY),
                );
            }
            RepoName::Ceph => {
                let release = template::ceph_release(&settings.branch);
                plans.push(RepoPlan::local(template::ceph(
                    release,
                    &settings.centos_mirror,
                )));
            }
            RepoName::Opstools => {
                plans.push(RepoPlan::local(template::opstools(&settings.centos_mirror)));
            }
        }
    }

    plans
}

/// Produces the final repo file for one plan.
pub fn materialize(
    plan: &RepoPlan,
    fetcher: &dyn RepoFetcher,
    mirrors: &MirrorMap,
) -> Result<RepoFile> {
    let mut content = match &plan.source {
        RepoSource::Remote(url) => {
            log::info!("Fetching {}", url);
            mirrors.apply(&fetcher.fetch(url)?)?
        }
        RepoSource::Local(text) => text.clone(),
    };

    if let Some(title) = &plan.rename {
        content = rename_sections(&content, title)?;
    }
    if let Some(line) = &plan.append {
        content = format!("{}\n{}", content, line);
    }
    if let Some(priority) = plan.priority {
        content = change_priority(&content, priority)?;
    }

    RepoFile::parse(content)
}

/// Execute Phase 4: plan and materialize every requested repo
pub fn execute(settings: &Settings, fetcher: &dyn RepoFetcher) -> Result<Vec<RepoFile>> {
    let mirrors = MirrorMap::from_settings(settings);
    let plans = plan(settings);
    log::debug!("Resolved {} repo file(s): {:?}", plans.len(), plans);

    plans
        .iter()
        .map(|plan| materialize(plan, fetcher, &mirrors))
        .collect()
}
