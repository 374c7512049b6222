//! Per-OS package names for one logical dependency

use std::collections::BTreeMap;

use crate::error::{ContikerError, Result};
use super::OsFamily;

/// Maps an OS family to the package name that provides a dependency there
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagePlan {
    packages: BTreeMap<OsFamily, String>,
}

impl PackagePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PackagePlan::insert`]
    pub fn with(mut self, os: OsFamily, package: impl Into<String>) -> Self {
        self.insert(os, package);
        self
    }

    /// Set the package for `os`, replacing any previous entry
    pub fn insert(&mut self, os: OsFamily, package: impl Into<String>) -> Option<String> {
        self.packages.insert(os, package.into())
    }

    pub fn get(&self, os: OsFamily) -> Option<&str> {
        self.packages.get(&os).map(String::as_str)
    }

    /// Like [`PackagePlan::get`], but a missing entry is an error
    pub fn package_for(&self, os: OsFamily) -> Result<&str> {
        self.get(os)
            .ok_or(ContikerError::PackageNotSpecified { os })
    }

    pub fn iter(&self) -> impl Iterator<Item = (OsFamily, &str)> {
        self.packages.iter().map(|(os, name)| (*os, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(OsFamily, S)> for PackagePlan {
    fn from_iter<I: IntoIterator<Item = (OsFamily, S)>>(iter: I) -> Self {
        let mut plan = PackagePlan::new();
        for (os, package) in iter {
            plan.insert(os, package);
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let plan = PackagePlan::new()
            .with(OsFamily::Arch, "xorg-xhost")
            .with(OsFamily::Ubuntu, "x11-xserver-utils");
        assert_eq!(plan.get(OsFamily::Arch), Some("xorg-xhost"));
        assert_eq!(plan.package_for(OsFamily::Ubuntu).unwrap(), "x11-xserver-utils");
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_missing_key_is_error() {
        let plan = PackagePlan::new().with(OsFamily::Arch, "which");
        assert!(matches!(
            plan.package_for(OsFamily::Windows),
            Err(ContikerError::PackageNotSpecified { os: OsFamily::Windows })
        ));
    }

    #[test]
    fn test_keys_are_unique() {
        let plan: PackagePlan = [(OsFamily::Fedora, "a"), (OsFamily::Fedora, "b")]
            .into_iter()
            .collect();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.get(OsFamily::Fedora), Some("b"));
    }
}
