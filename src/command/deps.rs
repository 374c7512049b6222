//! Host prerequisites of the Contiki-NG environment

use crate::pkgmanager::{OsFamily, PackagePlan};

/// A logical dependency: the executable to look for and who provides it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub probe: &'static str,
    pub plan: PackagePlan,
}

impl Dependency {
    /// Whether the dependency is needed on `os` at all
    pub fn applies_to(&self, os: OsFamily) -> bool {
        self.plan.get(os).is_some()
    }
}

/// The container runtime
pub fn docker() -> Dependency {
    Dependency {
        probe: "docker",
        plan: PackagePlan::new()
            .with(OsFamily::Arch, "docker")
            .with(OsFamily::Ubuntu, "docker.io")
            .with(OsFamily::Fedora, "moby-engine")
            .with(OsFamily::MacOs, "docker")
            .with(OsFamily::Windows, "Docker.DockerDesktop"),
    }
}

/// Needed to let the container talk to the host X server (cooja).
/// There is no native X server on macOS or Windows to grant access to.
pub fn xhost() -> Dependency {
    Dependency {
        probe: "xhost",
        plan: PackagePlan::new()
            .with(OsFamily::Arch, "xorg-xhost")
            .with(OsFamily::Ubuntu, "x11-xserver-utils")
            .with(OsFamily::Fedora, "xhost"),
    }
}

pub fn all_dependencies() -> Vec<Dependency> {
    vec![docker(), xhost()]
}

/// The prerequisites that have a package on `os`
pub fn dependencies_for(os: OsFamily) -> Vec<Dependency> {
    all_dependencies()
        .into_iter()
        .filter(|dependency| dependency.applies_to(os))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docker_mapped_everywhere() {
        let dep = docker();
        for os in OsFamily::ALL {
            assert!(dep.plan.get(os).is_some(), "docker missing for {}", os);
        }
    }

    #[test]
    fn test_xhost_linux_only() {
        let dep = xhost();
        assert_eq!(dep.plan.get(OsFamily::Ubuntu), Some("x11-xserver-utils"));
        assert!(dep.plan.get(OsFamily::Windows).is_none());
        assert!(dep.plan.get(OsFamily::MacOs).is_none());
    }

    #[test]
    fn test_dependencies_for_skips_x11_off_linux() {
        for os in [OsFamily::MacOs, OsFamily::Windows] {
            let probes: Vec<_> = dependencies_for(os).iter().map(|dep| dep.probe).collect();
            assert_eq!(probes, vec!["docker"], "prerequisites for {}", os);
        }
        for os in [OsFamily::Arch, OsFamily::Ubuntu, OsFamily::Fedora] {
            assert_eq!(dependencies_for(os).len(), 2, "prerequisites for {}", os);
        }
    }
}
