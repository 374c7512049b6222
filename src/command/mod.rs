//! Ensure a command is available, installing it if not
//!
//! A [`Command`] pairs the executable we look for with the packages that
//! provide it on each OS family, and the execution context it should be
//! found in.

mod deps;

pub use deps::{all_dependencies, dependencies_for, docker, xhost, Dependency};

use tracing::{debug, warn};

use crate::error::Result;
use crate::exec::CommandContext;
use crate::pkgmanager::{PackageManager, PackagePlan};

/// What `ensure_installed` had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Already available, nothing was installed
    Present,
    /// Was missing and has been installed
    Installed,
}

pub struct Command<'a> {
    probe: String,
    plan: PackagePlan,
    context: &'a dyn CommandContext,
}

impl<'a> Command<'a> {
    pub fn new(probe: impl Into<String>, plan: PackagePlan, context: &'a dyn CommandContext) -> Self {
        Self {
            probe: probe.into(),
            plan,
            context,
        }
    }

    pub fn for_dependency(dependency: Dependency, context: &'a dyn CommandContext) -> Self {
        Self::new(dependency.probe, dependency.plan, context)
    }

    pub fn probe(&self) -> &str {
        &self.probe
    }

    pub fn plan(&self) -> &PackagePlan {
        &self.plan
    }

    /// A failed lookup is treated as "missing" so that we try to install
    /// rather than silently skip.
    pub fn exists(&self) -> bool {
        match self.context.command_exists(&self.probe) {
            Ok(found) => found,
            Err(err) => {
                warn!(command = %self.probe, error = %err, "could not check if command exists");
                false
            }
        }
    }

    pub fn ensure_installed(&self, manager: &PackageManager) -> Result<InstallOutcome> {
        if self.exists() {
            debug!(command = %self.probe, "already available");
            return Ok(InstallOutcome::Present);
        }

        manager.install(self.context, &self.plan)?;
        Ok(InstallOutcome::Installed)
    }
}
