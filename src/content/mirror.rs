//! Mirror substitution for `baseurl=` lines
//!
//! Repo files published on the canonical servers point back at those servers.
//! When a host is configured to use mirrors, every `baseurl=` that names one of
//! the canonical hosts is rewritten to the mirror, keeping the path (and any
//! yum variables such as `$basearch`) untouched.

use regex::{Captures, Regex};

use crate::config::Settings;
use crate::defaults::{CENTOS_HOST, RDO_HOST};
use crate::error::Result;

/// Known upstream hosts and the base URL each one is replaced with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorMap {
    entries: Vec<(String, String)>,
}

impl MirrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule replacing `host` (with either scheme) by `mirror`.
    pub fn with(mut self, host: impl Into<String>, mirror: impl Into<String>) -> Self {
        let mirror: String = mirror.into();
        self.entries
            .push((host.into(), mirror.trim_end_matches('/').to_string()));
        self
    }

    /// RDO trunk and CentOS rules for the mirrors in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with(RDO_HOST, &settings.rdo_mirror)
            .with(CENTOS_HOST, &settings.centos_mirror)
    }

    /// Rewrites the scheme, host and port of matching `baseurl=` lines.
    ///
    /// Lines that do not start with `baseurl=`, baseurls on hosts without a
    /// rule, and baseurls already under one of the mirrors come back byte for
    /// byte.
    pub fn apply(&self, content: &str) -> Result<String> {
        let mut rules = Vec::with_capacity(self.entries.len());
        for (host, mirror) in &self.entries {
            let pattern = format!(
                r"^baseurl=https?://{}(?::\d+)?(/.*)?$",
                regex::escape(host)
            );
            rules.push((Regex::new(&pattern)?, mirror.as_str()));
        }

        let baseurl = Regex::new(r"(?m)^baseurl=[^\r\n]*")?;
        Ok(baseurl
            .replace_all(content, |caps: &Captures| rewrite_line(&caps[0], &rules))
            .into_owned())
    }
}

/// Whether `url` is `mirror` itself or something below it.
fn is_under(url: &str, mirror: &str) -> bool {
    url.strip_prefix(mirror)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with(':'))
}

fn rewrite_line(line: &str, rules: &[(Regex, &str)]) -> String {
    let url = &line["baseurl=".len()..];
    if rules.iter().any(|(_, mirror)| is_under(url, mirror)) {
        return line.to_string();
    }

    for (regex, mirror) in rules {
        if let Some(caps) = regex.captures(line) {
            let path = caps.get(1).map_or("", |m| m.as_str());
            return format!("baseurl={}{}", mirror, path);
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepoName;
    use proptest::prelude::*;

    fn mirrors(centos: &str, rdo: &str) -> MirrorMap {
        let settings = Settings {
            centos_mirror: centos.to_string(),
            rdo_mirror: rdo.to_string(),
            ..Settings::new(vec![RepoName::Deps])
        };
        MirrorMap::from_settings(&settings)
    }

    #[test]
    fn test_inject_mirrors() {
        let start_repo = "
[delorean]
name=delorean
baseurl=https://trunk.rdoproject.org/centos7/some-repo-hash
enabled=1
[centos]
name=centos
baseurl=http://mirror.centos.org/centos/7/virt/$basearch/kvm-common
enabled=1
";
        let expected = "
[delorean]
name=delorean
baseurl=http://bar/centos7/some-repo-hash
enabled=1
[centos]
name=centos
baseurl=http://foo/centos/7/virt/$basearch/kvm-common
enabled=1
";
        let result = mirrors("http://foo", "http://bar").apply(start_repo).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_inject_mirrors_no_match() {
        let start_repo = "
[delorean]
name=delorean
baseurl=https://some.mirror.com/centos7/some-repo-hash
enabled=1
";
        let map = mirrors("http://mirror.centos.org", "http://some.mirror.com");
        assert_eq!(map.apply(start_repo).unwrap(), start_repo);
    }

    #[test]
    fn test_only_baseurl_lines_are_rewritten() {
        let start_repo = "[x]\nmirrorlist=http://mirror.centos.org/list\n\
                          #baseurl=http://mirror.centos.org/centos\n";
        let map = mirrors("http://foo", "http://bar");
        assert_eq!(map.apply(start_repo).unwrap(), start_repo);
    }

    #[test]
    fn test_host_prefix_is_not_a_match() {
        let start_repo = "baseurl=http://mirror.centos.org.evil/centos\n";
        let map = mirrors("http://foo", "http://bar");
        assert_eq!(map.apply(start_repo).unwrap(), start_repo);
    }

    #[test]
    fn test_bare_host_and_port() {
        let map = mirrors("http://foo/", "http://bar");
        assert_eq!(
            map.apply("baseurl=http://mirror.centos.org\n").unwrap(),
            "baseurl=http://foo\n"
        );
        assert_eq!(
            map.apply("baseurl=https://trunk.rdoproject.org:443/x").unwrap(),
            "baseurl=http://bar/x"
        );
    }

    #[test]
    fn test_mirror_port_replaces_upstream_port() {
        let map = mirrors("http://foo", "http://bar:8080");
        assert_eq!(
            map.apply("baseurl=https://trunk.rdoproject.org:443/centos7/x\n").unwrap(),
            "baseurl=http://bar:8080/centos7/x\n"
        );
    }

    #[test]
    fn test_same_host_mirror_is_idempotent() {
        let map = MirrorMap::new().with(RDO_HOST, "http://trunk.rdoproject.org/rdo");
        let mirrored = "baseurl=http://trunk.rdoproject.org/rdo/centos7/x\n";
        assert_eq!(map.apply(mirrored).unwrap(), mirrored);

        let upstream = "baseurl=https://trunk.rdoproject.org/centos7/x\n";
        let once = map.apply(upstream).unwrap();
        assert_eq!(once, mirrored);
        assert_eq!(map.apply(&once).unwrap(), once);
    }

    #[test]
    fn test_same_host_mirror_with_port_is_idempotent() {
        let map = MirrorMap::new().with(RDO_HOST, "https://trunk.rdoproject.org:8443");
        let mirrored = "baseurl=https://trunk.rdoproject.org:8443/centos7/x";
        assert_eq!(map.apply(mirrored).unwrap(), mirrored);
        assert_eq!(
            map.apply("baseurl=https://trunk.rdoproject.org/centos7/x").unwrap(),
            mirrored
        );
    }

    #[test]
    fn test_crlf_line_endings_are_kept() {
        let map = mirrors("http://foo", "http://bar");
        assert_eq!(
            map.apply("[a]\r\nbaseurl=https://trunk.rdoproject.org/x\r\nenabled=1\r\n").unwrap(),
            "[a]\r\nbaseurl=http://bar/x\r\nenabled=1\r\n"
        );
    }

    #[test]
    fn test_empty_map_is_noop() {
        let map = MirrorMap::new();
        let content = "baseurl=https://trunk.rdoproject.org/centos7/\n";
        assert_eq!(map.apply(content).unwrap(), content);
    }

    proptest! {
        /// Property: rewriting is idempotent once content points at the mirror
        #[test]
        fn apply_is_idempotent(
            path in "[a-z0-9/$_-]{0,30}",
            scheme in prop::sample::select(vec!["http", "https"]),
        ) {
            let map = mirrors("http://foo.example", "http://bar.example");
            let content = format!(
                "[a]\nbaseurl={scheme}://trunk.rdoproject.org/{path}\n[b]\nbaseurl={scheme}://mirror.centos.org/{path}\n"
            );
            let once = map.apply(&content).unwrap();
            let twice = map.apply(&once).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert!(!once.contains("rdoproject.org"));
            prop_assert!(!once.contains("mirror.centos.org"));
        }

        /// Property: rewriting is idempotent for mirrors on the canonical host
        #[test]
        fn apply_is_idempotent_on_same_host(
            path in "[a-z0-9/$_-]{0,30}",
            prefix in "(/[a-z]{1,6})?",
            port in prop::option::of(1u16..65535),
        ) {
            let port = port.map(|p| format!(":{}", p)).unwrap_or_default();
            let mirror = format!("http://trunk.rdoproject.org{}{}", port, prefix);
            let map = MirrorMap::new().with(RDO_HOST, mirror.as_str());
            let content = format!("[a]\nbaseurl=https://trunk.rdoproject.org/{path}\n");
            let once = map.apply(&content).unwrap();
            let expected = format!("baseurl={}/", mirror);
            prop_assert!(once.contains(&expected));
            prop_assert_eq!(map.apply(&once).unwrap(), once);
        }

        /// Property: content already on the target mirror is returned unchanged
        #[test]
        fn apply_leaves_mirrored_content_alone(path in "[a-z0-9/$_-]{0,30}") {
            let map = mirrors("http://foo.example", "http://bar.example");
            let content = format!("[a]\nbaseurl=http://bar.example/{path}\nenabled=1\n");
            prop_assert_eq!(map.apply(&content).unwrap(), content);
        }
    }
}
