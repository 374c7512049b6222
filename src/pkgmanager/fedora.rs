//! dnf, for Fedora and RHEL-likes

use tracing::info;

use super::{probe, OsFamily, PackagePlan};
use crate::error::{ContikerError, Result};
use crate::exec::CommandContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dnf;

impl Dnf {
    pub const BINARY: &'static str = "dnf";

    pub fn check_available(&self, ctx: &dyn CommandContext) -> bool {
        probe(ctx, Self::BINARY)
    }

    pub fn install_manager(&self) -> Result<bool> {
        Ok(false)
    }

    // dnf refreshes expired metadata on install
    pub fn update_registry(&self, _ctx: &dyn CommandContext) -> Result<()> {
        Ok(())
    }

    pub fn install(&self, ctx: &dyn CommandContext, plan: &PackagePlan) -> Result<()> {
        if !self.check_available(ctx) {
            return Err(ContikerError::Unavailable {
                manager: Self::BINARY,
            });
        }
        let package = plan.package_for(OsFamily::Fedora)?;

        info!(package, context = %ctx.target(), "installing with dnf");
        ctx.run("sudo", &["dnf", "install", "-y", package])?;
        Ok(())
    }
}
