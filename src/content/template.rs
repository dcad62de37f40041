//! Locally built repo definitions
//!
//! The CentOS SIG repos are not published as `.repo` files next to the trunk
//! builds, so they are generated from fixed templates pointing at the CentOS
//! mirror.

/// Ceph release matching an OpenStack branch.
pub fn ceph_release(branch: &str) -> &'static str {
    match branch {
        "liberty" | "mitaka" => "hammer",
        _ => "jewel",
    }
}

/// Storage SIG repo for ceph `release`.
pub fn ceph(release: &str, centos_mirror: &str) -> String {
    format!(
        "\n[tripleo-centos-ceph-{release}]\n\
         name=tripleo-centos-ceph-{release}\n\
         baseurl={mirror}/centos/7/storage/x86_64/ceph-{release}/\n\
         gpgcheck=0\n\
         enabled=1\n",
        release = release,
        mirror = centos_mirror.trim_end_matches('/'),
    )
}

/// OpsTools SIG repo.
pub fn opstools(centos_mirror: &str) -> String {
    format!(
        "\n[tripleo-centos-opstools]\n\
         name=tripleo-centos-opstools\n\
         baseurl={mirror}/centos/7/opstools/x86_64/\n\
         gpgcheck=0\n\
         enabled=1\n",
        mirror = centos_mirror.trim_end_matches('/'),
    )
}
