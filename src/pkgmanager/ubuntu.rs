//! apt, for Ubuntu and Debian
//!
//! apt keeps a local package index that has to be refreshed separately
//! from installing, so this is the one backend with a real
//! `update_registry`.

use tracing::info;

use super::{probe, OsFamily, PackagePlan};
use crate::error::{ContikerError, Result};
use crate::exec::CommandContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Apt;

impl Apt {
    pub const BINARY: &'static str = "apt";

    pub fn check_available(&self, ctx: &dyn CommandContext) -> bool {
        probe(ctx, Self::BINARY)
    }

    pub fn install_manager(&self) -> Result<bool> {
        Ok(false)
    }

    /// Refresh the index with `sudo apt update`
    pub fn update_registry(&self, ctx: &dyn CommandContext) -> Result<()> {
        if !self.check_available(ctx) {
            return Err(ContikerError::Unavailable {
                manager: Self::BINARY,
            });
        }

        info!(context = %ctx.target(), "refreshing apt package index");
        ctx.run("sudo", &["apt", "update"])?;
        Ok(())
    }

    pub fn install(&self, ctx: &dyn CommandContext, plan: &PackagePlan) -> Result<()> {
        if !self.check_available(ctx) {
            return Err(ContikerError::Unavailable {
                manager: Self::BINARY,
            });
        }
        let package = plan.package_for(OsFamily::Ubuntu)?;

        info!(package, context = %ctx.target(), "installing with apt");
        ctx.run("sudo", &["apt", "install", "-y", package])?;
        Ok(())
    }
}
